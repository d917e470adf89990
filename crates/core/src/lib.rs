//! Core types for tensornote
//!
//! This crate defines the vocabulary shared by the notation scanner, the
//! serializer and the input-binding layer:
//!
//! - [`TensorEntry`]: one parsed `name -> (dimensions bytes, values bytes)` record
//! - [`Document`]: the ordered result of a parse
//! - [`InputAccumulator`]: the sink a parser pushes entries into
//! - [`ParseError`]: a single positioned diagnostic
//!
//! Nothing here interprets the decoded payloads. Turning dimension bytes into
//! `i64` shapes and value bytes into `f32` data is the consumer's job.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod accumulator;
pub mod error;
pub mod types;

pub use accumulator::InputAccumulator;
pub use error::{ParseError, ParseErrorKind};
pub use types::{Document, Position, TensorEntry};
