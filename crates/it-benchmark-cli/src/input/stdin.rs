use std::io::{self, Read};

use it_benchmark_core::{BenchmarkError, ClientInputs};

/// Client inputs piped to stdin as a JSON record.
///
/// Returns `None` when stdin is a TTY or carries nothing, so the caller can
/// fall back to flags.
pub fn read_client_inputs() -> Result<Option<ClientInputs>, BenchmarkError> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| stdin_error(e.to_string()))?;
    parse_client_inputs(&buffer)
}

fn parse_client_inputs(text: &str) -> Result<Option<ClientInputs>, BenchmarkError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(trimmed)
        .map(Some)
        .map_err(|e| stdin_error(format!("not a client inputs record: {}", e)))
}

fn stdin_error(reason: String) -> BenchmarkError {
    BenchmarkError::InvalidInput {
        field: "stdin".into(),
        reason,
    }
}
