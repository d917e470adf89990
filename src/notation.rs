//! Main entry point for reading tensor notation.
//!
//! [`read_tensor_notation`] is the single-call contract: parse text into a
//! caller-owned accumulator and report failures as [`Error::Extension`].
//! [`TensorNote`] wraps the same call with configuration.

use crate::config::NotationConfig;
use crate::error::{Error, Result};
use crate::model::{BoundModel, ModelSignature};
use std::io::Read;
use tensornote_core::{Document, InputAccumulator};
use tensornote_engine::{InputContext, TensorInput};
use tensornote_wire::{read_into, ParseOptions};
use tracing::{debug, info, warn};

/// Parse `text` into `accumulator` with default options.
///
/// `None` and empty text are valid and push nothing. On failure the
/// accumulator may hold a prefix of the entries; callers must discard it.
///
/// # Example
///
/// ```
/// use tensornote::read_tensor_notation;
/// use tensornote::Document;
///
/// let mut doc = Document::new();
/// read_tensor_notation(Some(r#"{"x":"AAAA;AAAA"}"#), &mut doc).unwrap();
/// assert_eq!(doc.names(), vec!["x"]);
/// ```
pub fn read_tensor_notation<A: InputAccumulator + ?Sized>(
    text: Option<&str>,
    accumulator: &mut A,
) -> Result<()> {
    read_with(text, accumulator, ParseOptions::default())
}

fn read_with<A: InputAccumulator + ?Sized>(
    text: Option<&str>,
    accumulator: &mut A,
    options: ParseOptions,
) -> Result<()> {
    let text = text.unwrap_or_default();
    debug!(len = text.len(), "parsing tensor notation");

    read_into(text, accumulator, options).map_err(|e| {
        warn!(line = e.position.line, column = e.position.column, "{}", e);
        Error::from(e)
    })
}

/// Configured reader for tensor notation.
///
/// # Example
///
/// ```
/// use tensornote::TensorNote;
///
/// let reader = TensorNote::builder()
///     .reject_trailing_content(true)
///     .build();
///
/// let inputs = reader.bind_inputs(Some(r#"{"x":"AQAAAAAAAAA=;AACAPw=="}"#)).unwrap();
/// assert_eq!(inputs[0].shape.as_slice(), &[1]);
/// assert_eq!(inputs[0].values, vec![1.0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TensorNote {
    config: NotationConfig,
}

impl TensorNote {
    /// Create a reader with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader from explicit settings.
    pub fn with_config(config: NotationConfig) -> Self {
        Self { config }
    }

    /// Create a builder for reader configuration.
    pub fn builder() -> TensorNoteBuilder {
        TensorNoteBuilder::new()
    }

    /// Current settings.
    pub fn config(&self) -> &NotationConfig {
        &self.config
    }

    /// Parse text into a [`Document`].
    pub fn parse(&self, text: &str) -> Result<Document> {
        let mut doc = Document::new();
        read_with(Some(text), &mut doc, self.config.parse_options())?;
        debug!(tensors = doc.len(), "parsed tensor notation");
        Ok(doc)
    }

    /// Read all of `reader` and parse it into a [`Document`].
    ///
    /// Bytes after the first NUL are dropped before the UTF-8 check, matching
    /// how the text itself is scanned.
    pub fn parse_reader<R: Read>(&self, mut reader: R) -> Result<Document> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        if let Some(end) = bytes.iter().position(|&b| b == 0) {
            bytes.truncate(end);
        }

        let text = String::from_utf8(bytes).map_err(|e| {
            Error::InvalidInput(format!("feature string is not valid UTF-8: {}", e))
        })?;
        self.parse(&text)
    }

    /// Parse a feature string into `accumulator`.
    ///
    /// Fails with [`Error::ModelRank`] when feature-string parsing is turned
    /// off, since no other feature format is supported.
    pub fn read_features<A: InputAccumulator + ?Sized>(
        &self,
        text: Option<&str>,
        accumulator: &mut A,
    ) -> Result<()> {
        if !self.config.parse_feature_string {
            return Err(Error::ModelRank(
                "Using parse_feature_string=false not implemented.".to_string(),
            ));
        }

        read_with(text, accumulator, self.config.parse_options())
    }

    /// Parse a feature string and decode every input into a typed tensor.
    ///
    /// Inputs come back in declaration order, ready to bind by name.
    pub fn bind_inputs(&self, text: Option<&str>) -> Result<Vec<TensorInput>> {
        let mut context = InputContext::new();
        self.read_features(text, &mut context)?;

        let inputs = context.inputs()?;
        debug!(
            inputs = inputs.len(),
            names = ?context.input_names(),
            "bound tensor inputs"
        );
        Ok(inputs)
    }

    /// Accept a newly loaded model if it exposes the configured output.
    ///
    /// Fails with [`Error::ModelUpdate`] when the output is missing; the
    /// previously bound model, if any, stays in use.
    pub fn bind_model(&self, signature: ModelSignature) -> Result<BoundModel> {
        let name = &self.config.output_name;
        let index = signature.output_index(name).ok_or_else(|| {
            Error::ModelUpdate(format!("Could not find output with name '{}' in model.", name))
        })?;

        info!(
            inputs = signature.inputs().len(),
            output = %name,
            output_index = index,
            "model bound"
        );
        Ok(BoundModel::new(signature, index))
    }

    /// Parse and decode a feature string for scoring against `model`.
    ///
    /// Fails with [`Error::ModelNotReady`] when no model has been bound, and
    /// with [`Error::InvalidInput`] when the string names an input the model
    /// does not declare.
    pub fn prepare_inputs(
        &self,
        model: Option<&BoundModel>,
        features: Option<&str>,
    ) -> Result<Vec<TensorInput>> {
        let model = model.ok_or_else(|| Error::ModelNotReady("No model loaded.".to_string()))?;

        let inputs = self.bind_inputs(features)?;
        if let Some(unknown) = inputs
            .iter()
            .find(|input| !model.signature().has_input(&input.name))
        {
            return Err(Error::InvalidInput(format!(
                "Model has no input named '{}'.",
                unknown.name
            )));
        }
        Ok(inputs)
    }
}

/// Builder for reader configuration.
///
/// # Example
///
/// ```
/// use tensornote::TensorNote;
///
/// let reader = TensorNote::builder()
///     .parse_feature_string(true)
///     .output_name("scores")
///     .build();
/// assert_eq!(reader.config().output_name, "scores");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TensorNoteBuilder {
    config: NotationConfig,
}

impl TensorNoteBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing settings.
    pub fn config(mut self, config: NotationConfig) -> Self {
        self.config = config;
        self
    }

    /// Parse feature strings as tensor notation (default: true).
    pub fn parse_feature_string(mut self, enabled: bool) -> Self {
        self.config.parse_feature_string = enabled;
        self
    }

    /// Reject content after the closing brace (default: false).
    pub fn reject_trailing_content(mut self, enabled: bool) -> Self {
        self.config.reject_trailing_content = enabled;
        self
    }

    /// Model output name carried for the downstream binder.
    pub fn output_name(mut self, name: impl Into<String>) -> Self {
        self.config.output_name = name.into();
        self
    }

    /// Build the reader.
    pub fn build(self) -> TensorNote {
        TensorNote::with_config(self.config)
    }
}
