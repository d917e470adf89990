//! The sink a parser pushes entries into
//!
//! The scanner never builds a collection of its own. Every recognized tensor
//! is handed to an [`InputAccumulator`] as soon as its closing quote is read,
//! so a consumer can bind inputs without an intermediate copy.

use crate::types::{Document, TensorEntry};

/// Receives parsed tensors in source order
///
/// When a parse fails, whatever was pushed before the failure is left in
/// place. Callers must discard that partial state.
pub trait InputAccumulator {
    /// Accept one parsed tensor
    fn push_input(&mut self, name: String, dimensions: Vec<u8>, values: Vec<u8>);
}

impl InputAccumulator for Document {
    fn push_input(&mut self, name: String, dimensions: Vec<u8>, values: Vec<u8>) {
        self.push(TensorEntry::new(name, dimensions, values));
    }
}

impl InputAccumulator for Vec<TensorEntry> {
    fn push_input(&mut self, name: String, dimensions: Vec<u8>, values: Vec<u8>) {
        self.push(TensorEntry::new(name, dimensions, values));
    }
}

impl<A: InputAccumulator + ?Sized> InputAccumulator for &mut A {
    fn push_input(&mut self, name: String, dimensions: Vec<u8>, values: Vec<u8>) {
        (**self).push_input(name, dimensions, values);
    }
}
