use crate::batch::{BatchResult, Transform};
use anyhow::Result;
use colored::*;
use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonItem {
    input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct JsonOutput {
    command: String,
    total: usize,
    failed: usize,
    results: Vec<JsonItem>,
}

/// Write successful results to `out` and failures to `err`.
pub fn print_results(
    transform: Transform,
    result: &BatchResult,
    format: OutputFormat,
    colored_output: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    match format {
        OutputFormat::Text => print_text_results(result, colored_output, out, err),
        OutputFormat::Json => print_json_results(transform, result, out),
    }
}

fn print_text_results(
    result: &BatchResult,
    colored_output: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    for item in &result.items {
        match &item.result {
            Ok(output) => writeln!(out, "{}", output)?,
            Err(e) => {
                if colored_output {
                    writeln!(
                        err,
                        "{} {} {}",
                        "error:".red().bold(),
                        item.input.yellow(),
                        e.to_string().dimmed()
                    )?;
                } else {
                    writeln!(err, "error: {} {}", item.input, e)?;
                }
            }
        }
    }
    Ok(())
}

fn print_json_results(transform: Transform, result: &BatchResult, out: &mut impl Write) -> Result<()> {
    let mut results = Vec::with_capacity(result.items.len());
    for item in &result.items {
        let json_item = match &item.result {
            Ok(output) => JsonItem {
                input: item.input.clone(),
                output: Some(serde_json::to_value(output)?),
                error: None,
            },
            Err(e) => JsonItem {
                input: item.input.clone(),
                output: None,
                error: Some(e.to_string()),
            },
        };
        results.push(json_item);
    }

    let output = JsonOutput {
        command: transform.name().to_string(),
        total: result.items.len(),
        failed: result.failed,
        results,
    };

    writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}

pub fn print_summary(result: &BatchResult, colored: bool, err: &mut impl Write) -> Result<()> {
    if result.failed == 0 {
        return Ok(());
    }

    let total = result.items.len();
    let noun = if total == 1 { "input" } else { "inputs" };
    if colored {
        writeln!(
            err,
            "{} {} of {} {} failed",
            "✗".red().bold(),
            result.failed.to_string().red().bold(),
            total,
            noun
        )?;
    } else {
        writeln!(err, "✗ {} of {} {} failed", result.failed, total, noun)?;
    }
    Ok(())
}
