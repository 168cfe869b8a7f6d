//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, PolarityArgs};
use crate::error::Result;
use crate::ml::evaluation::{TuningResult, WeightedWord};

/// Result structure for a training run.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrainingReport {
    pub algorithm: String,
    pub epochs: usize,
    pub lambda: Option<f64>,
    pub vocabulary_size: usize,
    pub train_accuracy: f64,
    pub val_accuracy: f64,
    pub train_hinge_loss: f64,
}

/// Result structure for hyperparameter tuning.
#[derive(Debug, Serialize, Deserialize)]
pub struct TuningReport {
    pub algorithm: String,
    pub epochs: Option<TuningResult>,
    pub lambda: Option<TuningResult>,
}

/// Vocabulary summary.
#[derive(Debug, Serialize, Deserialize)]
pub struct VocabularyReport {
    pub documents: usize,
    pub vocabulary_size: usize,
    pub words: Vec<String>,
}

/// The most explanatory words of a classifier.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExplanationReport {
    pub algorithm: String,
    pub words: Vec<WeightedWord>,
}

/// Training order for a sample count.
#[derive(Debug, Serialize, Deserialize)]
pub struct OrderReport {
    pub n_samples: usize,
    pub order: Vec<usize>,
    pub written_to: Option<String>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &PolarityArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &PolarityArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    for line in human_lines(&value, 0) {
        println!("{line}");
    }
    Ok(())
}

/// Render a JSON value as indented `key: value` lines.
fn human_lines(value: &serde_json::Value, indent: usize) -> Vec<String> {
    let spaces = "  ".repeat(indent);
    let mut lines = Vec::new();

    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                match val {
                    serde_json::Value::Object(_) => {
                        lines.push(format!("{spaces}{key}:"));
                        lines.extend(human_lines(val, indent + 1));
                    }
                    serde_json::Value::Array(arr) if arr.iter().any(|v| v.is_object()) => {
                        lines.push(format!("{spaces}{key}:"));
                        for item in arr {
                            lines.push(format!("{spaces}  - {}", format_inline(item)));
                        }
                    }
                    _ => lines.push(format!("{spaces}{key}: {}", format_value(val))),
                }
            }
        }
        _ => lines.push(format!("{spaces}{}", format_value(value))),
    }
    lines
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &PolarityArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format an object on a single line as `key=value` pairs.
fn format_inline(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Object(obj) => obj
            .iter()
            .map(|(k, v)| format!("{k}={}", format_value(v)))
            .collect::<Vec<_>>()
            .join(" "),
        _ => format_value(value),
    }
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => format!("{f:.4}"),
            _ => n.to_string(),
        },
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => format_inline(value),
        serde_json::Value::Null => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&json!("pegasos")), "pegasos");
        assert_eq!(format_value(&json!(42)), "42");
        assert_eq!(format_value(&json!(0.5)), "0.5000");
        assert_eq!(format_value(&json!([1, 2, 3])), "[1, 2, 3]");
        assert_eq!(format_value(&serde_json::Value::Null), "-");
    }

    #[test]
    fn test_human_lines_nested() {
        let value = json!({
            "algorithm": "pegasos",
            "words": [{"word": "great", "weight": 1.5}],
        });

        let lines = human_lines(&value, 0);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "algorithm: pegasos");
        assert_eq!(lines[1], "words:");
        assert!(lines[2].starts_with("  - "));
        assert!(lines[2].contains("word=great"));
        assert!(lines[2].contains("weight=1.5000"));
    }

    #[test]
    fn test_human_lines_scalar_array() {
        let lines = human_lines(&json!({"order": [2, 0, 1]}), 0);
        assert_eq!(lines, vec!["order: [2, 0, 1]"]);
    }
}
