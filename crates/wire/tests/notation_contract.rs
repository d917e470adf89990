//! Contract tests for the tensor notation
//!
//! Covers the observable behavior callers depend on:
//!
//! 1. Empty documents
//! 2. Entry order and payload fidelity
//! 3. Positioned diagnostics
//! 4. Memoized verdicts

use tensornote_core::{Document, InputAccumulator, ParseErrorKind, Position, TensorEntry};
use tensornote_wire::{encode_tensor_notation, parse, parse_optional, TensorParser};

// ============================================================================
// Test Helpers
// ============================================================================

fn le_i64(dims: &[i64]) -> Vec<u8> {
    dims.iter().flat_map(|d| d.to_le_bytes()).collect()
}

fn le_f32(values: &[f32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

// ============================================================================
// Module 1: Empty documents
// ============================================================================

#[test]
fn test_empty_inputs_yield_no_tensors() {
    for text in ["", "{}", " { } ", "\0"] {
        let doc = parse(text).unwrap();
        assert!(doc.is_empty(), "{:?} should parse to nothing", text);
    }
    assert!(parse_optional(None).unwrap().is_empty());
}

// ============================================================================
// Module 2: Order and payloads
// ============================================================================

#[test]
fn test_eight_dimension_bytes_and_four_value_bytes() {
    let entry = TensorEntry::new("a", le_i64(&[1]), le_f32(&[0.5]));
    let text = encode_tensor_notation(&[entry.clone()]);

    let doc = parse(&text).unwrap();
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.entries()[0].name, "a");
    assert_eq!(doc.entries()[0].dimensions.len(), 8);
    assert_eq!(doc.entries()[0].values.len(), 4);
    assert_eq!(doc.entries()[0], entry);
}

#[test]
fn test_names_follow_source_order() {
    let names = ["state", "action", "context", "bias", "a", "zeta"];
    let entries: Vec<TensorEntry> = names
        .iter()
        .enumerate()
        .map(|(i, n)| TensorEntry::new(*n, le_i64(&[i as i64 + 1]), le_f32(&vec![1.0; i + 1])))
        .collect();

    let doc = parse(&encode_tensor_notation(&entries)).unwrap();
    assert_eq!(doc.names(), names.to_vec());
    assert_eq!(encode_tensor_notation(doc.entries()), encode_tensor_notation(&entries));
}

#[test]
fn test_hand_written_document_with_formatting() {
    let text = r#"
    {
        "features": "AgAAAAAAAAADAAAAAAAAAA==;AAAAAAAAgD8AAABAAABAQAAAgEAAAKBA",
        "mask":     "AQAAAAAAAAA=;AACAPw=="
    }
    "#;

    let doc = parse(text).unwrap();
    assert_eq!(doc.names(), vec!["features", "mask"]);
    assert_eq!(doc.get("features").unwrap().dimensions, le_i64(&[2, 3]));
    assert_eq!(
        doc.get("features").unwrap().values,
        le_f32(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0])
    );
    assert_eq!(doc.get("mask").unwrap().values, le_f32(&[1.0]));
}

// ============================================================================
// Module 3: Diagnostics
// ============================================================================

#[test]
fn test_malformed_base64_reports_run_boundary() {
    let err = parse(r#"{"a":"AAA;AAAA"}"#).unwrap_err();
    assert!(err.is_base64());
    assert_eq!(err.position, Position::new(1, 11));
    assert_eq!(
        err.to_string(),
        "Error parsing TensorNotation at position (1:11): \
         Base64 string \"AAA\" length is not divisible by 4: 3."
    );
}

#[test]
fn test_missing_colon_reports_expected_and_actual() {
    let err = parse(r#"{"a" "x"}"#).unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::UnexpectedCharacter {
            expected: ':',
            actual: '"'
        }
    );
    assert!(err.to_string().contains("Expecting ':'; actual '\"'."));
}

#[test]
fn test_diagnostic_lines_are_one_based() {
    let err = parse("{\n\n  \"a\":\"AAAA;AAAA\"\n  \"b\"\n  x").unwrap_err();
    assert_eq!(err.position.line, 5);
    assert!(err.to_string().starts_with("Error parsing TensorNotation at position (5:"));
}

#[test]
fn test_escape_flag_is_never_cleared_by_other_characters() {
    // an escape before any non-backslash keeps every later quote inside the name
    let err = parse(r#"{"a\nb":"AAAA;AAAA"}"#).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnexpectedEnd { expected: '"' });

    let mut doc = Document::new();
    let err = tensornote_wire::read_into(
        r#"{"ok":"AAAA;AAAA","q\"x":"AAAA;AAAA"}"#,
        &mut doc,
        Default::default(),
    )
    .unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnexpectedEnd { expected: '"' });
    assert_eq!(doc.names(), vec!["ok"]);

    // paired backslashes cancel out
    let doc = parse(r#"{"a\\":"AAAA;AAAA"}"#).unwrap();
    assert_eq!(doc.names(), vec![r#"a\\"#]);
}

// ============================================================================
// Module 4: Memoized verdicts
// ============================================================================

#[derive(Default)]
struct Recorder {
    seen: Vec<String>,
}

impl InputAccumulator for Recorder {
    fn push_input(&mut self, name: String, _dimensions: Vec<u8>, _values: Vec<u8>) {
        self.seen.push(name);
    }
}

#[test]
fn test_repeated_queries_return_the_first_verdict() {
    let mut recorder = Recorder::default();
    let mut parser = TensorParser::new(r#"{"x":"AAAA;AAAA"}"#, &mut recorder);

    let verdicts: Vec<bool> = (0..5).map(|_| parser.cached_parse()).collect();
    assert_eq!(verdicts, vec![true; 5]);
    assert!(parser.succeeded());
    assert!(parser.error().is_none());
    drop(parser);

    assert_eq!(recorder.seen, vec!["x"]);
}

#[test]
fn test_parsing_into_document_accumulator() {
    let mut doc = Document::new();
    let mut parser = TensorParser::new(r#"{"x":"AAAA;AAAA","y":"AAAA;AAAA"}"#, &mut doc);
    assert!(parser.cached_parse());
    drop(parser);
    assert_eq!(doc.names(), vec!["x", "y"]);
}
