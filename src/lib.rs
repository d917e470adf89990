//! # tensornote
//!
//! Reader and writer for tensor notation: a narrow, JSON-like text format that
//! carries named model inputs as base64-encoded `int64` shapes and `f32`
//! values.
//!
//! ```text
//! {"features":"AgAAAAAAAAADAAAAAAAAAA==;AAAAAAAAgD8AAABAAABAQAAAgEAAAKBA"}
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use tensornote::prelude::*;
//!
//! let reader = TensorNote::new();
//!
//! // Raw entries, in source order
//! let doc = reader.parse(r#"{"x":"AQAAAAAAAAA=;AACAPw=="}"#)?;
//! assert_eq!(doc.names(), vec!["x"]);
//!
//! // Typed inputs ready to bind to a model
//! let inputs = reader.bind_inputs(Some(r#"{"x":"AQAAAAAAAAA=;AACAPw=="}"#))?;
//! assert_eq!(inputs[0].values, vec![1.0]);
//!
//! // And back to text
//! assert_eq!(encode_document(&doc), r#"{"x":"AQAAAAAAAAA=;AACAPw=="}"#);
//! # Ok::<(), tensornote::Error>(())
//! ```
//!
//! ## Layers
//!
//! - `tensornote-core`: entries, documents, accumulators, parse errors
//! - `tensornote-wire`: the scanner and the serializer
//! - `tensornote-engine`: typed decoding of parsed payloads
//!
//! Parse failures surface as [`Error::Extension`], separate from the model
//! error kinds an inference layer reports.

#![warn(missing_docs)]

mod config;
mod error;
mod model;
mod notation;

pub mod prelude;

// Re-export main entry points
pub use config::{keys, NotationConfig, DEFAULT_OUTPUT_NAME};
pub use error::{Error, Result, EXTENSION_PARSE_PREFIX};
pub use model::{BoundModel, ModelSignature};
pub use notation::{read_tensor_notation, TensorNote, TensorNoteBuilder};

// Re-export layer types
pub use tensornote_core::{
    Document, InputAccumulator, ParseError, ParseErrorKind, Position, TensorEntry,
};
pub use tensornote_engine::{InputContext, InputError, Shape, TensorInput};
pub use tensornote_wire::{
    encode_document, encode_entry, encode_tensor_notation, parse, parse_optional, parse_with,
    ParseOptions, TensorParser,
};
