use std::fs;
use std::path::Path;

use csv::ReaderBuilder;

use crate::engine::core::{Dataset, Record};
use crate::engine::errors::{WizardError, WizardResult};
use crate::engine::types::{Value, has_leading_zero, parse_bool, parse_number};

const CANDIDATE_DELIMITERS: &[u8] = b",\t;|";

/// Picks the most frequent candidate delimiter in the header line; comma on ties or none.
pub fn detect_delimiter(input: &str) -> u8 {
    let header = input.lines().next().unwrap_or_default();
    let mut best = b',';
    let mut best_count = 0usize;
    for &candidate in CANDIDATE_DELIMITERS {
        let count = header.bytes().filter(|b| *b == candidate).count();
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }
    best
}

/// Parses delimited text with a header row. `delimiter` overrides detection.
pub fn from_delimited_str(input: &str, delimiter: Option<u8>) -> WizardResult<Dataset> {
    if input.trim().is_empty() {
        return Ok(Dataset::default());
    }
    let delimiter = delimiter.unwrap_or_else(|| detect_delimiter(input));

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(input.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(WizardError::InvalidFormat(
            "delimited text has an empty header row".to_string(),
        ));
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let mut record = Record::with_capacity(headers.len());
        for (idx, name) in headers.iter().enumerate() {
            if name.is_empty() {
                continue;
            }
            record.insert(name.as_str(), type_cell(row.get(idx).unwrap_or_default()));
        }
        records.push(record);
    }
    Ok(Dataset::new(records))
}

pub fn from_delimited_file(path: &Path, delimiter: Option<u8>) -> WizardResult<Dataset> {
    let text = fs::read_to_string(path)?;
    from_delimited_str(&text, delimiter)
}

/// Zero-padded digits (zip codes, account ids) stay text so they keep their padding.
fn type_cell(cell: &str) -> Value {
    if cell.trim().is_empty() {
        Value::Null
    } else if has_leading_zero(cell) {
        Value::Text(cell.to_string())
    } else if let Some(n) = parse_number(cell) {
        Value::Number(n)
    } else if let Some(b) = parse_bool(cell) {
        Value::Bool(b)
    } else {
        Value::Text(cell.to_string())
    }
}
