use geodoc_core::{BoundingBox, json::numbers_to_json};
use serde_json::Value;
use std::fmt::Debug;

/// A single coordinate tuple: `[x, y]`, `[x, y, z]` or more dimensions.
///
/// This is the innermost level of every coordinate tree.
#[derive(Clone, Default, PartialEq)]
pub struct Position(pub Vec<f64>);

impl Position {
	#[must_use]
	pub fn new(values: Vec<f64>) -> Self {
		Self(values)
	}

	#[must_use]
	pub fn dimensions(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn as_slice(&self) -> &[f64] {
		&self.0
	}

	/// The degenerate box `[x, y, x, y]` around this position.
	#[must_use]
	pub fn bounding_box(&self) -> BoundingBox {
		BoundingBox::from(self.0.as_slice())
	}

	#[must_use]
	pub fn to_json(&self, precision: Option<u8>) -> Value {
		numbers_to_json(&self.0, precision)
	}
}

impl From<Vec<f64>> for Position {
	fn from(value: Vec<f64>) -> Self {
		Self(value)
	}
}

impl<T: Copy + Into<f64>, const N: usize> From<[T; N]> for Position {
	fn from(value: [T; N]) -> Self {
		Self(value.iter().map(|v| (*v).into()).collect())
	}
}

impl<'a, T: Copy + Into<f64>, const N: usize> From<&'a [T; N]> for Position {
	fn from(value: &'a [T; N]) -> Self {
		Self(value.iter().map(|v| (*v).into()).collect())
	}
}

impl From<(f64, f64)> for Position {
	fn from(value: (f64, f64)) -> Self {
		Self(vec![value.0, value.1])
	}
}

impl From<(f64, f64, f64)> for Position {
	fn from(value: (f64, f64, f64)) -> Self {
		Self(vec![value.0, value.1, value.2])
	}
}

impl From<&Position> for BoundingBox {
	fn from(position: &Position) -> Self {
		position.bounding_box()
	}
}

impl From<Position> for Vec<f64> {
	fn from(value: Position) -> Self {
		value.0
	}
}

impl Debug for Position {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn conversions() {
		assert_eq!(Position::from([1, 2]).as_slice(), &[1.0, 2.0]);
		assert_eq!(Position::from(&[1.5f32, 2.5f32]).as_slice(), &[1.5, 2.5]);
		assert_eq!(Position::from((3.0, 4.0)).as_slice(), &[3.0, 4.0]);
		assert_eq!(Position::from((3.0, 4.0, 5.0)).dimensions(), 3);
		assert_eq!(Vec::<f64>::from(Position::from(vec![7.0, 8.0])), vec![7.0, 8.0]);
	}

	#[test]
	fn bounding_box_is_degenerate() {
		let p = Position::from([5, 10]);
		assert_eq!(p.bounding_box().as_slice(), &[5.0, 10.0, 5.0, 10.0]);
		assert_eq!(BoundingBox::from(&p), p.bounding_box());
	}

	#[test]
	fn to_json() {
		assert_eq!(Position::from([1.23456, 2.0]).to_json(None), json!([1.23456, 2.0]));
		assert_eq!(Position::from([1.23456, 2.0]).to_json(Some(2)), json!([1.23, 2.0]));
	}

	#[test]
	fn debug_formats_like_array() {
		assert_eq!(format!("{:?}", Position::from([1, 2])), "[1.0, 2.0]");
	}
}
