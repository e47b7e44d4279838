use colored::Colorize;
use serde_json::Value;

/// Pretty-print JSON to stdout. Envelope warnings are echoed to stderr so
/// they stay visible when stdout is piped.
pub fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("JSON serialization error: {}", e),
    }
    for warning in envelope_warnings(value) {
        eprintln!("{}: {}", "warning".yellow().bold(), warning);
    }
}

fn envelope_warnings(value: &Value) -> impl Iterator<Item = &str> {
    value
        .get("warnings")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_warnings_read_from_envelope() {
        let envelope = json!({
            "result": {"results": []},
            "warnings": ["Company name is not provided.", "No metrics could be computed."],
        });
        let warnings: Vec<&str> = envelope_warnings(&envelope).collect();
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0], "Company name is not provided.");
    }

    #[test]
    fn test_bare_values_have_no_warnings() {
        assert_eq!(envelope_warnings(&json!([{"key": "healthcare"}])).count(), 0);
    }
}
