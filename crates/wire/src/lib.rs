//! Wire encoding for tensornote
//!
//! This crate implements the tensor notation: a deliberately narrow, JSON-like
//! dialect that carries named tensors as base64 blobs.
//!
//! ```text
//! Tensors    := "{" TensorList "}"
//! TensorList := Tensor ["," [TensorList]]
//! Tensor     := '"' Name '"' ":" '"' TensorData '"'
//! TensorData := Base64(dims) ";" Base64(values)
//! ```
//!
//! `dims` is the base64 encoding of an `int64[]` shape and `values` the
//! encoding of a `float[]` payload. Nesting, numbers, unquoted tokens and
//! type annotations are all rejected.
//!
//! ## Examples
//!
//! ```
//! use tensornote_wire::{encode_entry, parse};
//!
//! let text = encode_entry("x", &[1, 0, 0, 0, 0, 0, 0, 0], &[0, 0, 128, 63]);
//! let notation = format!("{{{}}}", text);
//!
//! let doc = parse(&notation).unwrap();
//! assert_eq!(doc.names(), vec!["x"]);
//! assert_eq!(doc.entries()[0].values, vec![0, 0, 128, 63]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod notation;

// Re-export main types
pub use notation::{
    encode_document, encode_entry, encode_tensor_notation, parse, parse_optional, parse_with,
    read_into, ParseOptions, TensorParser,
};
