//! Tensor notation encoding
//!
//! Produces the canonical form: no whitespace, standard padded base64,
//! names written verbatim.

use base64::Engine;
use tensornote_core::{Document, TensorEntry};

/// Encode one `"name":"dims;values"` pair
pub fn encode_entry(name: &str, dimensions: &[u8], values: &[u8]) -> String {
    let engine = &base64::engine::general_purpose::STANDARD;
    format!(
        r#""{}":"{};{}""#,
        name,
        engine.encode(dimensions),
        engine.encode(values)
    )
}

/// Encode entries as a complete notation string, keeping their order
pub fn encode_tensor_notation<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = &'a TensorEntry>,
{
    let pairs: Vec<String> = entries
        .into_iter()
        .map(|e| encode_entry(&e.name, &e.dimensions, &e.values))
        .collect();

    format!("{{{}}}", pairs.join(","))
}

/// Encode a parsed document
pub fn encode_document(doc: &Document) -> String {
    encode_tensor_notation(doc.entries())
}
