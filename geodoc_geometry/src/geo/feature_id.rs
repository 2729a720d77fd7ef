use serde_json::{Number, Value};
use std::fmt::{self, Display};

/// The `id` member of a feature: either a string or a number.
#[derive(Clone, Debug, PartialEq)]
pub enum FeatureId {
	String(String),
	Number(Number),
}

impl FeatureId {
	#[must_use]
	pub fn to_json(&self) -> Value {
		match self {
			FeatureId::String(s) => Value::String(s.clone()),
			FeatureId::Number(n) => Value::Number(n.clone()),
		}
	}
}

impl From<&str> for FeatureId {
	fn from(value: &str) -> Self {
		FeatureId::String(value.to_owned())
	}
}

impl From<String> for FeatureId {
	fn from(value: String) -> Self {
		FeatureId::String(value)
	}
}

impl From<u64> for FeatureId {
	fn from(value: u64) -> Self {
		FeatureId::Number(Number::from(value))
	}
}

impl From<i64> for FeatureId {
	fn from(value: i64) -> Self {
		FeatureId::Number(Number::from(value))
	}
}

impl Display for FeatureId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			FeatureId::String(s) => f.write_str(s),
			FeatureId::Number(n) => write!(f, "{n}"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn conversions() {
		assert_eq!(FeatureId::from("abc").to_json(), json!("abc"));
		assert_eq!(FeatureId::from(13u64).to_json(), json!(13));
		assert_eq!(FeatureId::from(-2i64).to_json(), json!(-2));
	}

	#[test]
	fn display() {
		assert_eq!(FeatureId::from("abc").to_string(), "abc");
		assert_eq!(FeatureId::from(42u64).to_string(), "42");
	}
}
