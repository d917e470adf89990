//! Input binding for tensornote
//!
//! The notation scanner hands over raw bytes. This crate is the consumer that
//! gives them meaning before they reach an inference session:
//!
//! - [`InputContext`]: an [`InputAccumulator`](tensornote_core::InputAccumulator)
//!   that records pushes in order and exposes input names and counts
//! - [`TensorInput`]: a typed `int64` shape plus `f32` values
//! - [`InputError`]: why a payload could not be interpreted

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod input_context;
pub mod tensor;

pub use input_context::InputContext;
pub use tensor::{InputError, Shape, TensorInput};
