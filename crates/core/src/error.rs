//! Parse error types
//!
//! A parse attempt produces at most one [`ParseError`]. It pairs the position
//! of the offending byte with a [`ParseErrorKind`] describing what was wrong,
//! and renders as:
//!
//! ```text
//! Error parsing TensorNotation at position (1:7): Expecting ':'; actual '"'.
//! ```

use crate::types::Position;
use thiserror::Error;

/// What went wrong at the failing position
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A structural character (brace, quote, colon, semicolon) was expected
    #[error("Expecting '{expected}'; actual '{actual}'.")]
    UnexpectedCharacter {
        /// The character the grammar required
        expected: char,
        /// The character found instead
        actual: char,
    },

    /// The terminator was reached where a structural character was expected
    ///
    /// An unterminated name surfaces as this kind with `expected == '"'`.
    #[error("Expecting '{expected}'; actual end of input.")]
    UnexpectedEnd {
        /// The character the grammar required
        expected: char,
    },

    /// A base64 run whose encoded length is not a multiple of 4
    #[error("Base64 string \"{run}\" length is not divisible by 4: {}.", .run.len())]
    Base64Length {
        /// The scanned run
        run: String,
    },

    /// A base64 run the codec refused to decode
    #[error("Base64 string \"{run}\" could not be decoded: {reason}.")]
    Base64Decode {
        /// The scanned run
        run: String,
        /// Codec message
        reason: String,
    },

    /// Non-whitespace content after the closing brace (strict mode only)
    #[error("Unexpected trailing content after '}}': '{actual}'.")]
    TrailingContent {
        /// First offending character
        actual: char,
    },
}

/// A positioned parse diagnostic
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error parsing TensorNotation at position ({position}): {kind}")]
pub struct ParseError {
    /// Where the scan stopped
    pub position: Position,
    /// What was wrong there
    pub kind: ParseErrorKind,
}

impl ParseError {
    /// Create a parse error
    pub fn new(position: Position, kind: ParseErrorKind) -> Self {
        Self { position, kind }
    }

    /// The full human-readable diagnostic
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// True for brace/quote/colon/semicolon mismatches, including end of input
    pub fn is_structural(&self) -> bool {
        matches!(
            self.kind,
            ParseErrorKind::UnexpectedCharacter { .. }
                | ParseErrorKind::UnexpectedEnd { .. }
                | ParseErrorKind::TrailingContent { .. }
        )
    }

    /// True for base64 length or decoding failures
    pub fn is_base64(&self) -> bool {
        matches!(
            self.kind,
            ParseErrorKind::Base64Length { .. } | ParseErrorKind::Base64Decode { .. }
        )
    }
}
