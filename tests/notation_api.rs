//! Facade API Tests
//!
//! Exercises the public surface the way a scoring host uses it:
//!
//! 1. Single-call parsing into caller-owned accumulators
//! 2. Configuration from settings maps
//! 3. Typed input binding
//! 4. Error kinds seen by the host
//! 5. Model binding
//!
//! These tests verify values, not just is_ok().

use std::collections::HashMap;

use byteorder::{ByteOrder, LittleEndian};
use proptest::prelude::*;
use tensornote::prelude::*;
use tensornote::{keys, parse, ParseErrorKind, EXTENSION_PARSE_PREFIX};

// ============================================================================
// Test Helpers
// ============================================================================

fn b64(bytes: &[u8]) -> String {
    use base64::Engine;
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

fn dims_bytes(dims: &[i64]) -> Vec<u8> {
    let mut out = vec![0u8; dims.len() * 8];
    LittleEndian::write_i64_into(dims, &mut out);
    out
}

fn values_bytes(values: &[f32]) -> Vec<u8> {
    let mut out = vec![0u8; values.len() * 4];
    LittleEndian::write_f32_into(values, &mut out);
    out
}

fn tensor(name: &str, dims: &[i64], values: &[f32]) -> String {
    format!(
        r#""{}":"{};{}""#,
        name,
        b64(&dims_bytes(dims)),
        b64(&values_bytes(values))
    )
}

// ============================================================================
// Module 1: Single-call parsing
// ============================================================================

#[test]
fn test_read_into_input_context() {
    let text = format!(
        "{{{},{}}}",
        tensor("state", &[1, 2], &[0.25, 0.75]),
        tensor("action_mask", &[2], &[1.0, 0.0])
    );

    let mut context = InputContext::new();
    read_tensor_notation(Some(text.as_str()), &mut context).unwrap();

    assert_eq!(context.input_count(), 2);
    assert_eq!(context.input_names(), vec!["state", "action_mask"]);

    let inputs = context.inputs().unwrap();
    assert_eq!(inputs[0].shape.as_slice(), &[1, 2]);
    assert_eq!(inputs[0].values, vec![0.25, 0.75]);
    assert_eq!(inputs[1].values, vec![1.0, 0.0]);
}

#[test]
fn test_empty_feature_strings() {
    for text in [None, Some(""), Some("{}")] {
        let mut context = InputContext::new();
        read_tensor_notation(text, &mut context).unwrap();
        assert_eq!(context.input_count(), 0);
    }
}

#[test]
fn test_parse_then_encode_reproduces_canonical_text() {
    let text = format!(
        "{{{},{}}}",
        tensor("b", &[3], &[1.0, 2.0, 3.0]),
        tensor("a", &[], &[9.0])
    );
    let doc = TensorNote::new().parse(&text).unwrap();
    assert_eq!(encode_document(&doc), text);
}

// ============================================================================
// Module 2: Configuration
// ============================================================================

#[test]
fn test_settings_drive_reader() {
    let mut settings = HashMap::new();
    settings.insert(keys::ONNX_REJECT_TRAILING_CONTENT.to_string(), "true".to_string());
    settings.insert(keys::ONNX_OUTPUT_NAME.to_string(), "pdf".to_string());

    let reader = TensorNote::with_config(NotationConfig::from_settings(&settings).unwrap());
    assert_eq!(reader.config().output_name, "pdf");

    let text = format!("{{{}}}, extra", tensor("x", &[1], &[1.0]));
    let err = reader.parse(&text).unwrap_err();
    assert!(err.is_extension_error());
    assert!(err.to_string().contains("Unexpected trailing content after '}': ','."));
}

#[test]
fn test_disabled_feature_parsing_is_a_rank_error() {
    let reader = TensorNote::builder().parse_feature_string(false).build();
    let err = reader.bind_inputs(Some("{}")).unwrap_err();
    assert!(matches!(err, Error::ModelRank(ref m) if m.contains("parse_feature_string=false")));
}

// ============================================================================
// Module 3: Typed binding
// ============================================================================

#[test]
fn test_bind_inputs_decodes_every_tensor() {
    let text = format!(
        "{{\n  {},\n  {}\n}}",
        tensor("image", &[1, 2, 2], &[0.0, 0.1, 0.2, 0.3]),
        tensor("scale", &[], &[2.0])
    );

    let inputs = TensorNote::new().bind_inputs(Some(text.as_str())).unwrap();
    assert_eq!(inputs.len(), 2);
    assert_eq!(inputs[0].rank(), 3);
    assert_eq!(inputs[0].numel(), 4);
    assert_eq!(inputs[1].rank(), 0);
    assert_eq!(inputs[1].values, vec![2.0]);
}

#[test]
fn test_bind_inputs_rejects_shape_value_mismatch() {
    let text = format!("{{{}}}", tensor("x", &[2, 2], &[1.0, 2.0]));
    let err = TensorNote::new().bind_inputs(Some(text.as_str())).unwrap_err();
    assert_eq!(err.error_code(), "ModelRankError");
    assert!(err.to_string().contains("shape holds 4 elements but 2 values"));
}

// ============================================================================
// Module 4: Error kinds
// ============================================================================

#[test]
fn test_parse_errors_carry_prefix_and_position() {
    let mut doc = Document::new();
    let err = read_tensor_notation(Some("{\n  \"a\":\"AAA;AAAA\"\n}"), &mut doc).unwrap_err();

    match err {
        Error::Extension(message) => {
            assert!(message.starts_with(EXTENSION_PARSE_PREFIX));
            assert!(message.contains("position (2:12)"));
            assert!(message.contains("length is not divisible by 4: 3."));
        }
        other => panic!("expected extension error, got {:?}", other),
    }
}

#[test]
fn test_raw_parse_error_kind() {
    let err = parse(r#"{"a":"AAAA;AAAA""#).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnexpectedEnd { expected: '}' });
}

// ============================================================================
// Module 5: Model binding
// ============================================================================

#[test]
fn test_output_name_setting_selects_model_output() {
    let config =
        NotationConfig::from_settings([(keys::ONNX_OUTPUT_NAME, "pdf")]).unwrap();
    let reader = TensorNote::with_config(config);

    let err = reader
        .bind_model(ModelSignature::new(["state"], ["output"]))
        .unwrap_err();
    assert_eq!(err.error_code(), "ModelUpdateError");
    assert!(err.to_string().contains("'pdf'"));

    let model = reader
        .bind_model(ModelSignature::new(["state"], ["value", "pdf"]))
        .unwrap();
    assert_eq!(model.output_index(), 1);
}

#[test]
fn test_scoring_path_error_kinds() {
    let reader = TensorNote::new();
    let text = format!("{{{}}}", tensor("state", &[2], &[0.5, 1.5]));

    let err = reader.prepare_inputs(None, Some(text.as_str())).unwrap_err();
    assert!(matches!(err, Error::ModelNotReady(ref m) if m == "No model loaded."));

    let model = reader
        .bind_model(ModelSignature::new(["state"], ["output"]))
        .unwrap();
    let inputs = reader.prepare_inputs(Some(&model), Some(text.as_str())).unwrap();
    assert_eq!(inputs[0].values, vec![0.5, 1.5]);

    // parse failures still win over model checks once a model is bound
    let err = reader
        .prepare_inputs(Some(&model), Some(r#"{"state" "x"}"#))
        .unwrap_err();
    assert!(err.is_extension_error());
}

// ============================================================================
// Module 6: Properties
// ============================================================================

fn typed_input() -> impl Strategy<Value = TensorInput> {
    (
        "[a-z][a-z0-9_]{0,10}",
        prop::collection::vec(0i64..4, 0..4),
    )
        .prop_flat_map(|(name, shape)| {
            let count = shape.iter().product::<i64>() as usize;
            (
                Just(name),
                Just(shape),
                prop::collection::vec(-1.0e6f32..1.0e6, count),
            )
        })
        .prop_map(|(name, shape, values)| {
            TensorInput::new(name, &shape, values).expect("generated shape matches values")
        })
}

proptest! {
    #[test]
    fn bound_inputs_match_encoded_inputs(inputs in prop::collection::vec(typed_input(), 0..6)) {
        let entries: Vec<TensorEntry> = inputs.iter().map(TensorInput::to_entry).collect();
        let text = encode_tensor_notation(&entries);

        let bound = TensorNote::new().bind_inputs(Some(text.as_str())).unwrap();
        prop_assert_eq!(bound, inputs);
    }
}
