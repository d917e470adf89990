//! Convenient imports for tensornote.
//!
//! This module re-exports the most commonly used types so you can get started
//! with a single import:
//!
//! ```
//! use tensornote::prelude::*;
//!
//! let doc = TensorNote::new().parse("{}").unwrap();
//! assert!(doc.is_empty());
//! ```

// Main entry point
pub use crate::notation::{read_tensor_notation, TensorNote, TensorNoteBuilder};

// Configuration
pub use crate::config::NotationConfig;

// Model binding
pub use crate::model::{BoundModel, ModelSignature};

// Error handling
pub use crate::error::{Error, Result};

// Core types
pub use tensornote_core::{Document, InputAccumulator, TensorEntry};

// Typed inputs
pub use tensornote_engine::{InputContext, TensorInput};

// Serializer
pub use tensornote_wire::{encode_document, encode_tensor_notation};
