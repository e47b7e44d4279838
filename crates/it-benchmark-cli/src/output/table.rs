use colored::Colorize;
use serde_json::Value;
use tabled::{builder::Builder, Table};

use it_benchmark_core::analysis::report::{
    describe_delta, format_value, BenchmarkReport, Finding, OverallRating,
};
use it_benchmark_core::Quartile;

/// Format output as a table using the tabled crate.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                match serde_json::from_value::<BenchmarkReport>(result.clone()) {
                    Ok(report) => print_report(&report),
                    Err(_) => print_result_table(result),
                }
                print_envelope_notes(map);
            } else {
                print_flat_object(value);
            }
        }
        Value::Array(arr) => {
            print_array_table(arr);
        }
        _ => {
            println!("{}", value);
        }
    }
}

fn print_report(report: &BenchmarkReport) {
    let title = report.company_name.as_deref().unwrap_or("Benchmark report");
    let industry = report.industry_name.as_deref().unwrap_or(&report.industry);
    println!("{} ({})", title.bold(), industry);

    let mut builder = Builder::default();
    builder.push_record([
        "Category",
        "Metric",
        "Value",
        "Top Quartile",
        "Median",
        "Bottom Quartile",
        "Position",
        "Score",
        "vs Median",
    ]);
    for r in &report.results {
        builder.push_record([
            r.category.label().to_string(),
            r.name.clone(),
            r.display_value(),
            format_value(r.top_quartile, r.unit, r.format),
            format_value(r.median, r.unit, r.format),
            format_value(r.bottom_quartile, r.unit, r.format),
            r.quartile.label().to_string(),
            r.score.round_dp(0).to_string(),
            describe_delta(r.delta_pct),
        ]);
    }
    println!("{}", Table::from(builder));

    let summary = &report.summary;
    let mut builder = Builder::default();
    builder.push_record(["Position", "Metrics"]);
    for q in Quartile::ALL {
        builder.push_record([q.label().to_string(), summary.count(q).to_string()]);
    }
    builder.push_record(["Average score".to_string(), summary.average_score.round_dp(1).to_string()]);
    println!("\n{}", Table::from(builder));

    let message = &report.positioning.message;
    match report.positioning.rating {
        OverallRating::Strong | OverallRating::Solid => println!("\n{}", message.green()),
        _ => println!("\n{}", message.yellow()),
    }

    print_findings("Strengths", &report.findings.strengths);
    print_findings("Concerns", &report.findings.concerns);
    print_findings("Opportunities", &report.findings.opportunities);
}

fn print_findings(heading: &str, findings: &[Finding]) {
    if findings.is_empty() {
        return;
    }
    println!("\n{}:", heading.bold());
    for f in findings {
        println!("  - {} ({}): {}", f.name, f.display_value, f.insight);
    }
}

fn print_result_table(result: &Value) {
    match result {
        Value::Object(_) => print_flat_object(result),
        Value::Array(arr) => print_array_table(arr),
        other => println!("{}", format_cell(other)),
    }
}

fn print_envelope_notes(envelope: &serde_json::Map<String, Value>) {
    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_flat_object(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.as_str(), &format_cell(val)]);
        }
        println!("{}", Table::from(builder));
    }
}

fn print_array_table(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(h.as_str()).map(format_cell).unwrap_or_default())
                    .collect();
                builder.push_record(row);
            }
        }

        println!("{}", Table::from(builder));
    } else {
        for item in arr {
            println!("{}", format_cell(item));
        }
    }
}

fn format_cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "-".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_cell).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
