//! Ordered collection of parsed model inputs
//!
//! [`InputContext`] is what a scorer hands to the notation parser. It keeps
//! raw pushes in declaration order, so inputs reach the inference session in
//! a stable order, and decodes them into [`TensorInput`]s on demand.

use crate::tensor::{InputError, TensorInput};
use tensornote_core::{InputAccumulator, TensorEntry};
use tracing::debug;

/// Accumulates parsed inputs for one scoring call
#[derive(Debug, Clone, Default)]
pub struct InputContext {
    entries: Vec<TensorEntry>,
}

impl InputContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of inputs pushed so far
    pub fn input_count(&self) -> usize {
        self.entries.len()
    }

    /// Input names in push order
    pub fn input_names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// Raw entries in push order
    pub fn entries(&self) -> &[TensorEntry] {
        &self.entries
    }

    /// Decode every input, failing on the first that cannot be interpreted
    pub fn inputs(&self) -> Result<Vec<TensorInput>, InputError> {
        let inputs = self
            .entries
            .iter()
            .map(TensorInput::from_entry)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            count = inputs.len(),
            elements = inputs.iter().map(TensorInput::numel).sum::<usize>(),
            "decoded tensor inputs"
        );
        Ok(inputs)
    }

    /// Drop everything pushed so far
    ///
    /// Used after a failed parse, whose partial pushes must not be scored.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Consume the context, returning raw entries
    pub fn into_entries(self) -> Vec<TensorEntry> {
        self.entries
    }
}

impl InputAccumulator for InputContext {
    fn push_input(&mut self, name: String, dimensions: Vec<u8>, values: Vec<u8>) {
        self.entries.push(TensorEntry::new(name, dimensions, values));
    }
}

impl From<Vec<TensorInput>> for InputContext {
    fn from(inputs: Vec<TensorInput>) -> Self {
        Self {
            entries: inputs.iter().map(TensorInput::to_entry).collect(),
        }
    }
}
