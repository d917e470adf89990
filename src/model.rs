//! Model signatures checked before scoring.
//!
//! An inference session reports the names of its inputs and outputs when a
//! model is loaded. [`TensorNote::bind_model`](crate::TensorNote::bind_model)
//! checks that signature against the configured output name, and
//! [`TensorNote::prepare_inputs`](crate::TensorNote::prepare_inputs) checks
//! parsed feature strings against it.

/// Input and output names of a loaded model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelSignature {
    inputs: Vec<String>,
    outputs: Vec<String>,
}

impl ModelSignature {
    /// Create a signature from the session's input and output names.
    pub fn new<I, O>(inputs: I, outputs: O) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        O: IntoIterator,
        O::Item: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            outputs: outputs.into_iter().map(Into::into).collect(),
        }
    }

    /// Input names in session order.
    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    /// Output names in session order.
    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    /// Whether the model declares an input with this name.
    pub fn has_input(&self, name: &str) -> bool {
        self.inputs.iter().any(|i| i == name)
    }

    /// Position of the named output.
    pub fn output_index(&self, name: &str) -> Option<usize> {
        self.outputs.iter().position(|o| o == name)
    }
}

/// A model accepted for scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundModel {
    signature: ModelSignature,
    output_index: usize,
}

impl BoundModel {
    pub(crate) fn new(signature: ModelSignature, output_index: usize) -> Self {
        Self {
            signature,
            output_index,
        }
    }

    /// The accepted signature.
    pub fn signature(&self) -> &ModelSignature {
        &self.signature
    }

    /// Index of the scored output.
    pub fn output_index(&self) -> usize {
        self.output_index
    }

    /// Name of the scored output.
    pub fn output_name(&self) -> &str {
        &self.signature.outputs[self.output_index]
    }
}
