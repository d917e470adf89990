//! Error-path position recovery
//!
//! The scanner only keeps a byte offset. When it fails, the consumed prefix is
//! replayed once to turn that offset into a line and column.

use tensornote_core::{ParseError, ParseErrorKind, Position};

/// Replay `buffer` up to and including the character at `head`
///
/// Every `\n` starts a new line at column 1; any other character advances the
/// column by one. When `head` sits on the terminator, the terminator itself
/// occupies one column, so the result always points one past the last
/// character the scanner accepted.
pub(crate) fn locate(buffer: &str, head: usize) -> Position {
    let head = head.min(buffer.len());
    let mut line = 1;
    let mut column = 1;

    let failing = buffer[head..].chars().next();
    for c in buffer[..head].chars().chain(Some(failing.unwrap_or('\0'))) {
        if c == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }

    Position::new(line, column)
}

/// Build a positioned error for the scan head
pub(crate) fn error_at(buffer: &str, head: usize, kind: ParseErrorKind) -> ParseError {
    ParseError::new(locate(buffer, head), kind)
}
