//! Typed tensors decoded from notation payloads
//!
//! Dimension bytes are read as little-endian `i64` and value bytes as
//! little-endian `f32`, matching what the notation's producers write.

use byteorder::{ByteOrder, LittleEndian};
use smallvec::SmallVec;
use tensornote_core::TensorEntry;
use thiserror::Error;

/// Tensor shape; most model inputs have rank 6 or less
pub type Shape = SmallVec<[i64; 6]>;

const DIM_BYTES: usize = std::mem::size_of::<i64>();
const VALUE_BYTES: usize = std::mem::size_of::<f32>();

/// Why a payload could not be interpreted as a float tensor
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Dimension bytes do not divide into `i64`s
    #[error("input '{name}': dimensions byte length {len} is not a multiple of 8")]
    MisalignedDimensions {
        /// Input name
        name: String,
        /// Byte length found
        len: usize,
    },

    /// Value bytes do not divide into `f32`s
    #[error("input '{name}': values byte length {len} is not a multiple of 4")]
    MisalignedValues {
        /// Input name
        name: String,
        /// Byte length found
        len: usize,
    },

    /// A dimension below zero
    #[error("input '{name}': dimension {index} is negative ({value})")]
    NegativeDimension {
        /// Input name
        name: String,
        /// Axis index
        index: usize,
        /// Offending value
        value: i64,
    },

    /// The product of the shape overflowed
    #[error("input '{name}': element count overflows")]
    ShapeOverflow {
        /// Input name
        name: String,
    },

    /// Shape and value count disagree
    #[error("input '{name}': shape holds {expected} elements but {actual} values were given")]
    ElementCountMismatch {
        /// Input name
        name: String,
        /// Elements implied by the shape
        expected: usize,
        /// Values present
        actual: usize,
    },
}

/// A named `f32` tensor ready to bind to a model input
#[derive(Debug, Clone, PartialEq)]
pub struct TensorInput {
    /// Model input name
    pub name: String,
    /// Dimensions, outermost first
    pub shape: Shape,
    /// Row-major values
    pub values: Vec<f32>,
}

impl TensorInput {
    /// Build a tensor, checking that `values` fills `shape` exactly
    pub fn new(
        name: impl Into<String>,
        shape: &[i64],
        values: Vec<f32>,
    ) -> Result<Self, InputError> {
        let name = name.into();
        let expected = element_count(&name, shape)?;
        if expected != values.len() {
            return Err(InputError::ElementCountMismatch {
                name,
                expected,
                actual: values.len(),
            });
        }

        Ok(Self {
            name,
            shape: shape.iter().copied().collect(),
            values,
        })
    }

    /// Decode a raw entry
    pub fn from_entry(entry: &TensorEntry) -> Result<Self, InputError> {
        let name = &entry.name;

        if entry.dimensions.len() % DIM_BYTES != 0 {
            return Err(InputError::MisalignedDimensions {
                name: name.clone(),
                len: entry.dimensions.len(),
            });
        }
        if entry.values.len() % VALUE_BYTES != 0 {
            return Err(InputError::MisalignedValues {
                name: name.clone(),
                len: entry.values.len(),
            });
        }

        let mut shape: Shape = SmallVec::from_elem(0, entry.dimensions.len() / DIM_BYTES);
        LittleEndian::read_i64_into(&entry.dimensions, &mut shape);

        let mut values = vec![0f32; entry.values.len() / VALUE_BYTES];
        LittleEndian::read_f32_into(&entry.values, &mut values);

        Self::new(name.clone(), &shape, values)
    }

    /// Number of dimensions
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Number of elements; a rank-0 tensor holds one
    pub fn numel(&self) -> usize {
        self.values.len()
    }

    /// Re-encode as raw little-endian payloads
    pub fn to_entry(&self) -> TensorEntry {
        let mut dimensions = vec![0u8; self.shape.len() * DIM_BYTES];
        LittleEndian::write_i64_into(&self.shape, &mut dimensions);

        let mut values = vec![0u8; self.values.len() * VALUE_BYTES];
        LittleEndian::write_f32_into(&self.values, &mut values);

        TensorEntry::new(self.name.clone(), dimensions, values)
    }
}

fn element_count(name: &str, shape: &[i64]) -> Result<usize, InputError> {
    shape.iter().enumerate().try_fold(1usize, |acc, (index, &dim)| {
        let dim = usize::try_from(dim).map_err(|_| InputError::NegativeDimension {
            name: name.to_string(),
            index,
            value: dim,
        })?;
        acc.checked_mul(dim).ok_or_else(|| InputError::ShapeOverflow {
            name: name.to_string(),
        })
    })
}
