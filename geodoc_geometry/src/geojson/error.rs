use geodoc_core::json::{JsonValue, type_as_str};
use std::fmt::{self, Display};

/// A GeoJSON document whose structure does not match its `type`.
///
/// Raised by the parser through `anyhow`; callers that need to tell it apart from I/O or
/// syntax errors can recover it with `err.downcast_ref::<MalformedDocument>()`.
#[derive(Clone, Debug, PartialEq)]
pub struct MalformedDocument {
	/// Location of the offending member, e.g. `features[2].geometry.coordinates`.
	/// Empty for the document root.
	pub path: String,
	pub expected: String,
	pub actual: String,
}

impl MalformedDocument {
	pub fn new(path: &str, expected: impl Into<String>, actual: impl Into<String>) -> Self {
		Self {
			path: path.to_owned(),
			expected: expected.into(),
			actual: actual.into(),
		}
	}

	/// A member was present but had the wrong shape.
	pub fn unexpected(path: &str, expected: impl Into<String>, value: &JsonValue) -> Self {
		Self::new(path, expected, describe(value))
	}

	/// A required member was not there at all.
	pub fn missing(path: &str, expected: impl Into<String>) -> Self {
		Self::new(path, expected, "nothing")
	}
}

impl Display for MalformedDocument {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let path = if self.path.is_empty() { "document root" } else { &self.path };
		write!(
			f,
			"malformed GeoJSON at {path}: expected {}, found {}",
			self.expected, self.actual
		)
	}
}

impl std::error::Error for MalformedDocument {}

/// Short description of a value's shape, used in error messages.
pub(crate) fn describe(value: &JsonValue) -> String {
	match value {
		JsonValue::Array(items) => match items.first() {
			None => String::from("an empty array"),
			Some(first) if items.iter().all(|v| type_as_str(v) == type_as_str(first)) => {
				format!("an array of {}s", type_as_str(first))
			}
			Some(_) => String::from("an array of mixed values"),
		},
		JsonValue::String(text) => format!("the string {text:?}"),
		JsonValue::Null => String::from("null"),
		JsonValue::Object(_) => String::from("an object"),
		other => format!("a {}", type_as_str(other)),
	}
}

pub(crate) fn key_path(path: &str, key: &str) -> String {
	if path.is_empty() {
		key.to_owned()
	} else {
		format!("{path}.{key}")
	}
}

pub(crate) fn index_path(path: &str, index: usize) -> String {
	format!("{path}[{index}]")
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(json!([]), "an empty array")]
	#[case(json!([1, 2]), "an array of numbers")]
	#[case(json!([[1, 2]]), "an array of arrays")]
	#[case(json!([1, [2]]), "an array of mixed values")]
	#[case(json!("Pointy"), "the string \"Pointy\"")]
	#[case(json!(null), "null")]
	#[case(json!({}), "an object")]
	#[case(json!(true), "a boolean")]
	fn describes_values(#[case] value: JsonValue, #[case] expected: &str) {
		assert_eq!(describe(&value), expected);
	}

	#[test]
	fn display() {
		let err = MalformedDocument::unexpected("features[0].geometry.coordinates", "a position", &json!([[1, 2]]));
		assert_eq!(
			err.to_string(),
			"malformed GeoJSON at features[0].geometry.coordinates: expected a position, found an array of arrays"
		);
		let err = MalformedDocument::missing("", "an object");
		assert_eq!(err.to_string(), "malformed GeoJSON at document root: expected an object, found nothing");
	}

	#[test]
	fn paths() {
		assert_eq!(key_path("", "type"), "type");
		assert_eq!(key_path("features[1]", "geometry"), "features[1].geometry");
		assert_eq!(index_path("geometries", 3), "geometries[3]");
	}
}
