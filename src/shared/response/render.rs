use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::errors::WizardError;
use crate::engine::grouping::GroupedResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Table,
}

impl OutputFormat {
    pub fn renderer(&self) -> Box<dyn Renderer> {
        match self {
            OutputFormat::Json => Box::new(super::JsonRenderer),
            OutputFormat::Table => Box::new(super::TableRenderer),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" | "text" => Ok(OutputFormat::Table),
            other => Err(WizardError::InvalidSpec(format!(
                "unknown output format '{}'",
                other
            ))),
        }
    }
}

/// A trait that defines how a grouped result is written out.
pub trait Renderer: Send + Sync {
    /// Render a complete result to bytes.
    fn render(&self, result: &GroupedResult) -> Vec<u8>;
}
