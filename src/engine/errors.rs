use thiserror::Error;
use tracing::{debug, error};

/// Errors raised at the edges of the engine: loading records, parsing group and
/// aggregation specs, reading configuration. Grouping itself never fails.
#[derive(Debug, Error)]
pub enum WizardError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse delimited text: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input format: {0}")]
    InvalidFormat(String),

    #[error("Invalid spec: {0}")]
    InvalidSpec(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl WizardError {
    pub fn log_error(&self) {
        match self {
            WizardError::Io(e) => {
                error!("I/O error: {}", e);
                debug!("I/O error details: {:?}", e);
            }
            WizardError::Json(e) => {
                error!("JSON parse failed: {}", e);
                debug!("JSON error details: {:?}", e);
            }
            WizardError::Csv(e) => {
                error!("Delimited text parse failed: {}", e);
                debug!("Delimited text error details: {:?}", e);
            }
            WizardError::InvalidFormat(e) => error!("Invalid input format: {}", e),
            WizardError::InvalidSpec(e) => error!("Invalid spec: {}", e),
            WizardError::Config(e) => {
                error!("Configuration error: {}", e);
                debug!("Configuration error details: {:?}", e);
            }
        }
    }
}

pub type WizardResult<T> = Result<T, WizardError>;
