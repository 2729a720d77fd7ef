use anyhow::{Context, Result};
use serde_json::Value;

/// Decodes JSON text into a generic tree.
pub fn decode(text: &str) -> Result<Value> {
	serde_json::from_str(text).context("Failed to decode JSON")
}

/// Decodes UTF-8 JSON bytes into a generic tree.
pub fn decode_slice(bytes: &[u8]) -> Result<Value> {
	serde_json::from_slice(bytes).context("Failed to decode JSON")
}

/// Encodes a generic tree as compact JSON text.
pub fn encode(value: &Value) -> Result<String> {
	serde_json::to_string(value).context("Failed to encode JSON")
}

/// Encodes a generic tree as indented JSON text.
pub fn encode_pretty(value: &Value) -> Result<String> {
	serde_json::to_string_pretty(value).context("Failed to encode JSON")
}

/// Returns the JSON type of a value as a lowercase word (`"array"`, `"object"`, …).
#[must_use]
pub fn type_as_str(value: &Value) -> &'static str {
	match value {
		Value::Array(_) => "array",
		Value::Bool(_) => "boolean",
		Value::Null => "null",
		Value::Number(_) => "number",
		Value::Object(_) => "object",
		Value::String(_) => "string",
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[test]
	fn decode_and_encode() -> Result<()> {
		let value = decode(r#"{"type":"Point","coordinates":[1,2.5]}"#)?;
		assert_eq!(value, json!({"type": "Point", "coordinates": [1, 2.5]}));
		assert_eq!(encode(&value)?, r#"{"type":"Point","coordinates":[1,2.5]}"#);
		Ok(())
	}

	#[test]
	fn encode_keeps_insertion_order() -> Result<()> {
		let value = decode(r#"{"z":1,"a":2,"m":3}"#)?;
		assert_eq!(encode(&value)?, r#"{"z":1,"a":2,"m":3}"#);
		Ok(())
	}

	#[test]
	fn encode_pretty_indents() -> Result<()> {
		let text = encode_pretty(&json!({"a": [1]}))?;
		assert_eq!(text, "{\n  \"a\": [\n    1\n  ]\n}");
		Ok(())
	}

	#[test]
	fn decode_slice_reads_bytes() -> Result<()> {
		assert_eq!(decode_slice(b"[true,null]")?, json!([true, null]));
		Ok(())
	}

	#[test]
	fn decode_reports_invalid_json() {
		let err = decode(r#"{"type": "Point",}"#).unwrap_err();
		assert_eq!(err.to_string(), "Failed to decode JSON");
	}

	#[rstest]
	#[case(json!([]), "array")]
	#[case(json!(false), "boolean")]
	#[case(json!(null), "null")]
	#[case(json!(1.5), "number")]
	#[case(json!({}), "object")]
	#[case(json!("x"), "string")]
	fn type_names(#[case] value: Value, #[case] expected: &str) {
		assert_eq!(type_as_str(&value), expected);
	}
}
