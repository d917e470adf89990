//! Tensor notation decoding
//!
//! A single forward scan over the input. The scanner never backtracks and
//! stops at the first malformed token. Each tensor is pushed into the
//! caller's accumulator as soon as its closing quote has been read.
//!
//! The input behaves like a C string: the end of the slice and an embedded
//! NUL byte both act as the terminator.

use super::diagnostic::error_at;
use base64::Engine;
use tensornote_core::{Document, InputAccumulator, ParseError, ParseErrorKind};

mod tokens {
    pub const ESCAPE: u8 = b'\\';
    pub const DQUOTE: u8 = b'"';
    pub const SEMICOLON: u8 = b';';
    pub const COLON: u8 = b':';
    pub const COMMA: u8 = b',';
    pub const OPEN_CBRACKET: u8 = b'{';
    pub const CLOSE_CBRACKET: u8 = b'}';
}

/// Options controlling how strictly the scanner treats its input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject non-whitespace bytes after the closing `}`
    ///
    /// Off by default: trailing bytes are ignored, which existing callers
    /// that append unrelated text rely on.
    pub reject_trailing_content: bool,
}

impl ParseOptions {
    /// Options with trailing-content rejection enabled
    pub fn strict() -> Self {
        Self {
            reject_trailing_content: true,
        }
    }
}

/// Parse tensor notation into a [`Document`]
///
/// Empty input is a valid document with no tensors.
pub fn parse(text: &str) -> Result<Document, ParseError> {
    parse_with(text, ParseOptions::default())
}

/// Parse possibly-absent tensor notation
///
/// `None` is treated like empty input.
pub fn parse_optional(text: Option<&str>) -> Result<Document, ParseError> {
    text.map_or_else(|| Ok(Document::new()), parse)
}

/// Parse tensor notation with explicit options
pub fn parse_with(text: &str, options: ParseOptions) -> Result<Document, ParseError> {
    let mut doc = Document::new();
    read_into(text, &mut doc, options)?;
    Ok(doc)
}

/// Parse tensor notation, pushing every tensor into `accumulator`
///
/// On failure the accumulator may already hold the tensors that preceded the
/// malformed token.
pub fn read_into<A: InputAccumulator + ?Sized>(
    text: &str,
    accumulator: &mut A,
    options: ParseOptions,
) -> Result<(), ParseError> {
    TensorParser::with_options(text, accumulator, options).into_result()
}

/// Memoizing tensor notation parser
///
/// The first call to [`cached_parse`](Self::cached_parse) scans the input;
/// later calls return the stored verdict without touching the input or the
/// accumulator again.
pub struct TensorParser<'a, A: InputAccumulator + ?Sized> {
    buffer: &'a str,
    head: usize,
    accumulator: &'a mut A,
    options: ParseOptions,
    verdict: Option<Result<(), ParseError>>,
}

impl<'a, A: InputAccumulator + ?Sized> TensorParser<'a, A> {
    /// Create a parser with default options
    pub fn new(text: &'a str, accumulator: &'a mut A) -> Self {
        Self::with_options(text, accumulator, ParseOptions::default())
    }

    /// Create a parser with explicit options
    pub fn with_options(text: &'a str, accumulator: &'a mut A, options: ParseOptions) -> Self {
        let buffer = match text.find('\0') {
            Some(end) => &text[..end],
            None => text,
        };

        Self {
            buffer,
            head: 0,
            accumulator,
            options,
            verdict: None,
        }
    }

    /// Parse once and return whether parsing succeeded
    pub fn cached_parse(&mut self) -> bool {
        if self.verdict.is_none() {
            let result = if self.buffer.is_empty() {
                Ok(())
            } else {
                self.read_tensor_list()
            };
            self.verdict = Some(result);
        }

        self.succeeded()
    }

    /// Whether a parse has been attempted
    pub fn has_parsed(&self) -> bool {
        self.verdict.is_some()
    }

    /// False only once a parse has failed
    pub fn succeeded(&self) -> bool {
        !matches!(self.verdict, Some(Err(_)))
    }

    /// The stored diagnostic, or an empty string when there is none
    pub fn error_message(&self) -> String {
        self.error().map(ParseError::message).unwrap_or_default()
    }

    /// The stored error, if the parse failed
    pub fn error(&self) -> Option<&ParseError> {
        match &self.verdict {
            Some(Err(e)) => Some(e),
            _ => None,
        }
    }

    /// Parse if needed and return the verdict
    pub fn into_result(mut self) -> Result<(), ParseError> {
        self.cached_parse();
        self.verdict.unwrap_or(Ok(()))
    }

    fn peek(&self) -> Option<u8> {
        self.buffer.as_bytes().get(self.head).copied()
    }

    fn current_char(&self) -> char {
        self.buffer[self.head..].chars().next().unwrap_or('\0')
    }

    fn fail(&self, kind: ParseErrorKind) -> ParseError {
        error_at(self.buffer, self.head, kind)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\r' | b'\n')) {
            self.head += 1;
        }
    }

    fn read_character(&mut self, expected: u8) -> Result<(), ParseError> {
        match self.peek() {
            Some(c) if c == expected => {
                self.head += 1;
                Ok(())
            }
            Some(_) => Err(self.fail(ParseErrorKind::UnexpectedCharacter {
                expected: expected as char,
                actual: self.current_char(),
            })),
            None => Err(self.fail(ParseErrorKind::UnexpectedEnd {
                expected: expected as char,
            })),
        }
    }

    fn read_base64(&mut self) -> Result<Vec<u8>, ParseError> {
        let buffer = self.buffer;
        let start = self.head;

        while self.peek().map_or(false, is_base64) {
            self.head += 1;
        }

        let run = &buffer[start..self.head];
        if run.len() % 4 != 0 {
            return Err(self.fail(ParseErrorKind::Base64Length {
                run: run.to_string(),
            }));
        }

        base64::engine::general_purpose::STANDARD
            .decode(run)
            .map_err(|e| {
                self.fail(ParseErrorKind::Base64Decode {
                    run: run.to_string(),
                    reason: e.to_string(),
                })
            })
    }

    fn read_tensor_name(&mut self) -> Result<String, ParseError> {
        let buffer = self.buffer;
        self.read_character(tokens::DQUOTE)?;

        let start = self.head;
        // Only a backslash flips the escape flag; no other character clears
        // it. While it is set, quotes do not close the name. Backslashes stay
        // in the captured name.
        let mut in_escape = false;
        loop {
            match self.peek() {
                None => break,
                Some(tokens::DQUOTE) if !in_escape => break,
                Some(tokens::ESCAPE) => in_escape = !in_escape,
                Some(_) => {}
            }
            self.head += 1;
        }
        let name = &buffer[start..self.head];

        self.read_character(tokens::DQUOTE)?;
        Ok(name.to_string())
    }

    fn read_tensor_data(&mut self) -> Result<(Vec<u8>, Vec<u8>), ParseError> {
        self.read_character(tokens::DQUOTE)?;

        let dimensions = self.read_base64()?;
        // The separator also confirms the dimensions run ended where expected
        self.read_character(tokens::SEMICOLON)?;
        let values = self.read_base64()?;

        self.read_character(tokens::DQUOTE)?;
        Ok((dimensions, values))
    }

    fn read_tensor(&mut self) -> Result<(), ParseError> {
        let name = self.read_tensor_name()?;
        self.skip_whitespace();
        self.read_character(tokens::COLON)?;
        self.skip_whitespace();
        let (dimensions, values) = self.read_tensor_data()?;

        self.accumulator.push_input(name, dimensions, values);
        Ok(())
    }

    fn read_tensor_list(&mut self) -> Result<(), ParseError> {
        self.skip_whitespace();
        self.read_character(tokens::OPEN_CBRACKET)?;
        self.skip_whitespace();

        while !matches!(self.peek(), None | Some(tokens::CLOSE_CBRACKET)) {
            self.read_tensor()?;
            self.skip_whitespace();
            if self.peek() == Some(tokens::COMMA) {
                self.read_character(tokens::COMMA)?;
                self.skip_whitespace();
            }
        }

        self.read_character(tokens::CLOSE_CBRACKET)?;

        if self.options.reject_trailing_content {
            self.skip_whitespace();
            if self.peek().is_some() {
                return Err(self.fail(ParseErrorKind::TrailingContent {
                    actual: self.current_char(),
                }));
            }
        }

        Ok(())
    }
}

fn is_base64(c: u8) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, b'+' | b'/' | b'=')
}
