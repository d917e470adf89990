//! Unified error types for tensornote.
//!
//! This module provides the error type callers see. A notation parse failure
//! always maps to [`Error::Extension`], a kind distinct from the model
//! readiness, update and scoring kinds produced by the inference layer.

use tensornote_core::ParseError;
use tensornote_engine::InputError;
use thiserror::Error;

/// Prefix for parse failures surfaced through the extension error kind
pub const EXTENSION_PARSE_PREFIX: &str = "OnnxExtension: Failed to deserialize tensor: ";

/// All tensornote errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Tensor notation could not be deserialized
    #[error("extension error: {0}")]
    Extension(String),

    /// No model has been loaded yet
    #[error("model not ready: {0}")]
    ModelNotReady(String),

    /// A model update was rejected
    #[error("model update error: {0}")]
    ModelUpdate(String),

    /// Inputs could not be prepared or scored
    #[error("model rank error: {0}")]
    ModelRank(String),

    /// Caller-supplied input is unusable
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A configuration value could not be parsed
    #[error("config error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for tensornote operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Stable code for this error kind.
    ///
    /// These codes are frozen and must not change.
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::Extension(_) => "ExtensionError",
            Error::ModelNotReady(_) => "ModelNotReady",
            Error::ModelUpdate(_) => "ModelUpdateError",
            Error::ModelRank(_) => "ModelRankError",
            Error::InvalidInput(_) => "InvalidInput",
            Error::Config(_) => "ConfigError",
            Error::Io(_) => "IoError",
        }
    }

    /// Check if this is a notation deserialization failure.
    pub fn is_extension_error(&self) -> bool {
        matches!(self, Error::Extension(_))
    }

    /// Check if this error came from the model side rather than the input.
    pub fn is_model_error(&self) -> bool {
        matches!(
            self,
            Error::ModelNotReady(_) | Error::ModelUpdate(_) | Error::ModelRank(_)
        )
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::Extension(format!("{}{}", EXTENSION_PARSE_PREFIX, e))
    }
}

impl From<InputError> for Error {
    fn from(e: InputError) -> Self {
        Error::ModelRank(format!(
            "Could not interpret input values to match expected inputs: {}",
            e
        ))
    }
}
