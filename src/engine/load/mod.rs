//! Loaders that turn uploaded files, pasted text, or the bundled sample into a `Dataset`.

pub mod delimited;
pub mod json;
pub mod sample;

use std::path::Path;

use tracing::info;

use crate::engine::core::Dataset;
use crate::engine::errors::WizardResult;

pub use delimited::{detect_delimiter, from_delimited_file, from_delimited_str};
pub use json::{from_json_file, from_json_str};
pub use sample::sample_dataset;

/// Loads a file, choosing the parser from its extension: `.json` as a JSON array,
/// anything else as delimited text.
pub fn from_path(path: &Path, delimiter: Option<u8>) -> WizardResult<Dataset> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let dataset = if is_json {
        from_json_file(path)?
    } else {
        from_delimited_file(path, delimiter)?
    };
    info!(
        target: "report_wizard::load",
        path = %path.display(),
        records = dataset.len(),
        fields = dataset.fields.len(),
        "Loaded dataset"
    );
    Ok(dataset)
}
