//! Tensor notation scanner and serializer
//!
//! - [`TensorParser`]: single-pass, fail-fast scanner pushing into an
//!   [`InputAccumulator`](tensornote_core::InputAccumulator)
//! - [`encode_tensor_notation`]: canonical serializer
//!
//! Positions in diagnostics are only computed on the error path.

mod decode;
mod diagnostic;
mod encode;

pub use decode::{parse, parse_optional, parse_with, read_into, ParseOptions, TensorParser};
pub use encode::{encode_document, encode_entry, encode_tensor_notation};
