use std::fs;
use std::path::Path;

use crate::engine::core::{Dataset, Record};
use crate::engine::errors::{WizardError, WizardResult};

/// Parses a JSON array of flat objects. Field order follows the first object that
/// mentions each field.
pub fn from_json_str(input: &str) -> WizardResult<Dataset> {
    match input.trim_start().chars().next() {
        Some('[') => {}
        Some(_) => {
            return Err(WizardError::InvalidFormat(
                "expected a JSON array of records".to_string(),
            ));
        }
        None => return Ok(Dataset::default()),
    }
    let records: Vec<Record> = serde_json::from_str(input)?;
    Ok(Dataset::new(records))
}

pub fn from_json_file(path: &Path) -> WizardResult<Dataset> {
    let text = fs::read_to_string(path)?;
    from_json_str(&text)
}
