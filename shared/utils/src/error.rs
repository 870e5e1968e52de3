use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum LedgerError {
    #[error("File access error: {path} - {message}")]
    FileAccess { path: String, message: String },

    #[error("Parse error: {path} - {message}")]
    Parse { path: String, message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl LedgerError {
    pub fn file_access(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FileAccess {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn parse(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::FileAccess { .. } => "FILE_ACCESS_ERROR",
            Self::Parse { .. } => "PARSE_ERROR",
            Self::Configuration { .. } => "CONFIGURATION_ERROR",
        }
    }

    /// Whether the failure is confined to one source file and the batch may go on.
    pub fn is_file_scoped(&self) -> bool {
        matches!(self, Self::FileAccess { .. } | Self::Parse { .. })
    }
}

pub type LedgerResult<T> = Result<T, LedgerError>;

/// Compact failure entry for run summaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureReport {
    pub code: String,
    pub message: String,
}

impl From<&LedgerError> for FailureReport {
    fn from(error: &LedgerError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
        }
    }
}

impl From<config::ConfigError> for LedgerError {
    fn from(error: config::ConfigError) -> Self {
        Self::configuration(error.to_string())
    }
}
