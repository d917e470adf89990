//! Configuration for notation handling.
//!
//! Settings can be built in code or read from the flat key/value pairs a
//! host application already carries for its model extensions.

use crate::error::{Error, Result};
use tensornote_wire::ParseOptions;

/// Recognized setting keys.
pub mod keys {
    /// Whether feature strings are parsed as tensor notation (bool)
    pub const ONNX_PARSE_FEATURE_STRING: &str = "onnx.parse_feature_string";
    /// Name of the model output the downstream binder reads (string)
    pub const ONNX_OUTPUT_NAME: &str = "onnx.output_name";
    /// Whether bytes after the closing brace are an error (bool)
    pub const ONNX_REJECT_TRAILING_CONTENT: &str = "onnx.reject_trailing_content";
}

/// Default model output name.
pub const DEFAULT_OUTPUT_NAME: &str = "output";

/// Notation handling settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotationConfig {
    /// Parse feature strings as tensor notation
    pub parse_feature_string: bool,
    /// Treat non-whitespace after the closing brace as an error
    pub reject_trailing_content: bool,
    /// Model output name, carried for the downstream binder
    pub output_name: String,
}

impl Default for NotationConfig {
    fn default() -> Self {
        Self {
            parse_feature_string: true,
            reject_trailing_content: false,
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
        }
    }
}

impl NotationConfig {
    /// Read settings from key/value pairs.
    ///
    /// Unknown keys are ignored so the same settings map can be shared with
    /// other components. Missing keys keep their defaults.
    pub fn from_settings<I, K, V>(settings: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();

        for (key, value) in settings {
            let (key, value) = (key.as_ref(), value.as_ref());
            match key {
                keys::ONNX_PARSE_FEATURE_STRING => {
                    config.parse_feature_string = parse_bool(key, value)?;
                }
                keys::ONNX_REJECT_TRAILING_CONTENT => {
                    config.reject_trailing_content = parse_bool(key, value)?;
                }
                keys::ONNX_OUTPUT_NAME => {
                    if value.is_empty() {
                        return Err(Error::Config(format!("{} must not be empty", key)));
                    }
                    config.output_name = value.to_string();
                }
                _ => {}
            }
        }

        Ok(config)
    }

    /// Scanner options derived from these settings.
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            reject_trailing_content: self.reject_trailing_content,
        }
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(Error::Config(format!(
            "{} expects true or false, got '{}'",
            key, other
        ))),
    }
}
