use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use terbilang_core::{convert, convert_decimal};
use tracing::{debug, debug_span};

use super::{resolve_precision, CommandError};
use crate::settings::settings;

/// One output line of a batch run.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRecord {
    pub input: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub converted: usize,
    pub failed: usize,
}

/// Convert one input line. Integers go through `convert`; anything else
/// that parses as a float ("3.5", "1e3") goes through the decimal path.
pub fn convert_line(line: &str, precision: i32) -> BatchRecord {
    let result = match line.parse::<i64>() {
        Ok(n) => convert(n).map_err(|e| e.to_string()),
        Err(_) => line
            .parse::<f64>()
            .map_err(|e| format!("invalid number: {e}"))
            .and_then(|x| convert_decimal(x, precision).map_err(|e| e.to_string())),
    };
    match result {
        Ok(words) => BatchRecord {
            input: line.to_string(),
            words: Some(words),
            error: None,
        },
        Err(error) => BatchRecord {
            input: line.to_string(),
            words: None,
            error: Some(error),
        },
    }
}

/// Convert every non-blank line of `input`.
pub fn convert_lines(input: &str, precision: i32, skip_comments: bool) -> Vec<BatchRecord> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !(skip_comments && line.starts_with('#')))
        .map(|line| convert_line(line, precision))
        .collect()
}

/// Read numbers from `input_file` and write one JSON record per line to
/// `output_file`.
pub fn run_batch(
    input_file: &Path,
    output_file: &Path,
    precision: i32,
    skip_comments: bool,
) -> Result<BatchSummary, CommandError> {
    let _span = debug_span!("run_batch", precision).entered();
    let content = fs::read_to_string(input_file)?;
    let records = convert_lines(&content, precision, skip_comments);

    let mut writer = BufWriter::new(fs::File::create(output_file)?);
    let mut summary = BatchSummary::default();
    for record in &records {
        serde_json::to_writer(&mut writer, record)?;
        writeln!(writer)?;
        if record.error.is_some() {
            summary.failed += 1;
        } else {
            summary.converted += 1;
        }
    }
    writer.flush()?;
    debug!(converted = summary.converted, failed = summary.failed);
    Ok(summary)
}

pub fn batch_cmd(input_file: &str, output_file: &str, precision: Option<i32>) {
    let s = settings();
    let precision = die!(resolve_precision(precision, &s.decimal), "Error: {}");
    let summary = die!(
        run_batch(
            Path::new(input_file),
            Path::new(output_file),
            precision,
            s.batch.skip_comments,
        ),
        "Error running batch: {}"
    );
    eprintln!(
        "{} converted, {} failed -> {output_file}",
        summary.converted, summary.failed
    );
}
