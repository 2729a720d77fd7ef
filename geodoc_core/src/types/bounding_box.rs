use anyhow::{Result, ensure};
use log::trace;
use serde_json::Value;
use std::fmt::{Debug, Display};

/// Maximum nesting depth of a coordinate tree (a multi polygon).
const MAX_TREE_DEPTH: usize = 4;

/// An axis-aligned bounding box in `D` dimensions.
///
/// The components are stored as two contiguous halves,
/// `[min_1, …, min_D, max_1, …, max_D]`, so a 2D box reads `[west, south, east, north]`
/// and a 3D box `[x_min, y_min, z_min, x_max, y_max, z_max]`.
///
/// The empty box (zero components) means "no box". It is the identity element of
/// [`merge`](Self::merge). A `BoundingBox` is a value: every operation returns a new box
/// and never aliases the coordinates it was built from.
///
/// `min <= max` is not enforced by the type; it holds for every box built from
/// coordinates, but a box read from a document is taken as given.
///
/// # Examples
///
/// ```
/// use geodoc_core::BoundingBox;
///
/// let a = BoundingBox::from(&[0.0, 0.0][..]);
/// let b = BoundingBox::from(&[2.0, 3.0][..]);
/// assert_eq!(a.merge(&b).as_slice(), &[0.0, 0.0, 2.0, 3.0]);
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct BoundingBox(Vec<f64>);

impl BoundingBox {
	/// Creates the empty box.
	#[must_use]
	pub fn new() -> BoundingBox {
		BoundingBox(Vec::new())
	}

	/// Creates a box from separate minimum and maximum corners.
	///
	/// # Errors
	///
	/// Returns an error if the corners have different dimensions.
	pub fn from_min_max(min: &[f64], max: &[f64]) -> Result<BoundingBox> {
		ensure!(
			min.len() == max.len(),
			"min corner ({}) and max corner ({}) must have the same dimension",
			min.len(),
			max.len()
		);
		Ok(BoundingBox([min, max].concat()))
	}

	/// Parses a comma separated list of numbers, e.g. `"-10,-5,10,5"`.
	///
	/// Tokens that are not numbers are skipped, so `"1,2,x,4"` yields `[1, 2, 4]`.
	/// Tokens are not trimmed: `" 2"` is not a number either. This never fails.
	///
	/// ```
	/// use geodoc_core::BoundingBox;
	///
	/// assert_eq!(BoundingBox::from_text("1,2,x,4").as_slice(), &[1.0, 2.0, 4.0]);
	/// ```
	#[must_use]
	pub fn from_text(text: &str) -> BoundingBox {
		BoundingBox(
			text
				.split(',')
				.filter_map(|token| match token.parse::<f64>() {
					Ok(value) => Some(value),
					Err(_) => {
						trace!("skipping bbox token {token:?}");
						None
					}
				})
				.collect(),
		)
	}

	/// Builds a box from an untyped JSON value.
	///
	/// * a string is parsed with [`from_text`](Self::from_text),
	/// * an array is read as a coordinate tree of depth 1 to 4 (a position, a list of
	///   positions, …) and its enclosing box is returned.
	///
	/// Anything else, including arrays that mix numbers and arrays, trees whose branches
	/// have different depths or positions of different dimensions, yields the empty box.
	#[must_use]
	pub fn from_json(value: &Value) -> BoundingBox {
		match value {
			Value::String(text) => BoundingBox::from_text(text),
			Value::Array(_) => tree_from_json(value, MAX_TREE_DEPTH)
				.map(|(_, bbox)| bbox)
				.unwrap_or_default(),
			_ => BoundingBox::new(),
		}
	}

	/// Returns `true` if this is the empty box.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Number of dimensions `D`.
	#[must_use]
	pub fn dimensions(&self) -> usize {
		self.0.len() / 2
	}

	#[must_use]
	pub fn as_slice(&self) -> &[f64] {
		&self.0
	}

	#[must_use]
	pub fn into_vec(self) -> Vec<f64> {
		self.0
	}

	/// The minimum corner, `[min_1, …, min_D]`.
	#[must_use]
	pub fn min(&self) -> &[f64] {
		&self.0[..self.dimensions()]
	}

	/// The maximum corner, `[max_1, …, max_D]`.
	#[must_use]
	pub fn max(&self) -> &[f64] {
		&self.0[self.dimensions()..]
	}

	/// Returns the smallest box containing both `self` and `other`.
	///
	/// The empty box is the identity: merging with it returns the other box unchanged.
	///
	/// # Panics
	///
	/// Panics if both boxes are non-empty and have different lengths. Use
	/// [`try_merge`](Self::try_merge) to get an error instead.
	#[must_use]
	pub fn merge(&self, other: &BoundingBox) -> BoundingBox {
		match self.try_merge(other) {
			Ok(bbox) => bbox,
			Err(err) => panic!("{err}"),
		}
	}

	/// Like [`merge`](Self::merge), but reports a dimension mismatch as an error.
	pub fn try_merge(&self, other: &BoundingBox) -> Result<BoundingBox> {
		if self.is_empty() {
			return Ok(other.clone());
		}
		if other.is_empty() {
			return Ok(self.clone());
		}
		ensure!(
			self.0.len() == other.0.len(),
			"cannot merge bounding boxes of different lengths ({} and {})",
			self.0.len(),
			other.0.len()
		);

		let length = self.0.len();
		let mut values = self.0.clone();
		for i in 0..length / 2 {
			if other.0[i] < values[i] {
				values[i] = other.0[i];
			}
		}
		for i in length / 2..length {
			if other.0[i] > values[i] {
				values[i] = other.0[i];
			}
		}
		Ok(BoundingBox(values))
	}

	/// Exact comparison: two empty boxes are equal, an empty and a non-empty box are not,
	/// and otherwise every component must match bit for bit (no tolerance).
	#[must_use]
	pub fn equals(&self, other: &BoundingBox) -> bool {
		self == other
	}

	/// Returns `true` if the interiors of both boxes have something in common.
	///
	/// Boxes that only share a boundary do not overlap. Empty boxes and boxes of
	/// different dimensions never overlap.
	///
	/// ```
	/// use geodoc_core::BoundingBox;
	///
	/// let a = BoundingBox::try_from(vec![0.0, 0.0, 1.0, 1.0]).unwrap();
	/// let b = BoundingBox::try_from(vec![1.0, 0.0, 2.0, 1.0]).unwrap();
	/// assert!(!a.overlaps(&b));
	/// ```
	#[must_use]
	pub fn overlaps(&self, other: &BoundingBox) -> bool {
		if self.is_empty() || other.is_empty() || self.0.len() != other.0.len() {
			return false;
		}
		let d = self.dimensions();
		(0..d).all(|i| self.0[i] < other.0[i + d] && self.0[i + d] > other.0[i])
	}

	/// The center of the box, or `None` for the empty box.
	#[must_use]
	pub fn centroid(&self) -> Option<Vec<f64>> {
		if self.is_empty() {
			return None;
		}
		let d = self.dimensions();
		Some((0..d).map(|i| (self.0[i] + self.0[i + d]) / 2.0).collect())
	}

	/// Returns the box as a JSON array of numbers.
	#[must_use]
	pub fn to_json(&self) -> Value {
		Value::from(self.0.clone())
	}
}

/// Returns the height and box of a uniform coordinate tree, or `None` if `value` is
/// not one.
fn tree_from_json(value: &Value, remaining_depth: usize) -> Option<(usize, BoundingBox)> {
	let items = value.as_array()?;

	if items.iter().all(Value::is_number) {
		let position = items.iter().filter_map(Value::as_f64).collect::<Vec<f64>>();
		return Some((1, BoundingBox::from(position.as_slice())));
	}
	if remaining_depth <= 1 {
		return None;
	}

	let mut height = None;
	let mut bbox = BoundingBox::new();
	for item in items {
		let (child_height, child) = tree_from_json(item, remaining_depth - 1)?;
		if *height.get_or_insert(child_height) != child_height {
			return None;
		}
		bbox = bbox.try_merge(&child).ok()?;
	}
	height.map(|h| (h + 1, bbox))
}

impl From<&[f64]> for BoundingBox {
	/// A single position becomes a degenerate box whose minimum equals its maximum:
	/// `[x, y]` turns into `[x, y, x, y]`.
	fn from(position: &[f64]) -> Self {
		BoundingBox([position, position].concat())
	}
}

impl From<&[Vec<f64>]> for BoundingBox {
	fn from(positions: &[Vec<f64>]) -> Self {
		positions.iter().map(|p| BoundingBox::from(p.as_slice())).collect()
	}
}

impl From<&[Vec<Vec<f64>>]> for BoundingBox {
	fn from(lines: &[Vec<Vec<f64>>]) -> Self {
		lines.iter().map(|l| BoundingBox::from(l.as_slice())).collect()
	}
}

impl From<&[Vec<Vec<Vec<f64>>>]> for BoundingBox {
	fn from(polygons: &[Vec<Vec<Vec<f64>>>]) -> Self {
		polygons.iter().map(|p| BoundingBox::from(p.as_slice())).collect()
	}
}

impl From<&str> for BoundingBox {
	fn from(text: &str) -> Self {
		BoundingBox::from_text(text)
	}
}

impl FromIterator<BoundingBox> for BoundingBox {
	/// Merges all boxes left to right, starting with the empty box.
	fn from_iter<I: IntoIterator<Item = BoundingBox>>(iter: I) -> Self {
		iter
			.into_iter()
			.fold(BoundingBox::new(), |acc, bbox| acc.merge(&bbox))
	}
}

impl TryFrom<Vec<f64>> for BoundingBox {
	type Error = anyhow::Error;

	/// Takes the components as they are. The length must be even.
	fn try_from(values: Vec<f64>) -> Result<Self> {
		ensure!(
			values.len() % 2 == 0,
			"bounding box must have an even number of values, but has {}",
			values.len()
		);
		Ok(BoundingBox(values))
	}
}

impl Display for BoundingBox {
	/// Renders the components as `1,2,3,4`; the empty box renders as an empty string.
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let parts = self.0.iter().map(ToString::to_string).collect::<Vec<_>>();
		write!(f, "{}", parts.join(","))
	}
}

impl Debug for BoundingBox {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "BoundingBox({})", self.to_string().replace(',', ", "))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	fn bbox(values: &[f64]) -> BoundingBox {
		BoundingBox::try_from(values.to_vec()).unwrap()
	}

	#[test]
	fn empty_box() {
		let empty = BoundingBox::new();
		assert!(empty.is_empty());
		assert_eq!(empty.dimensions(), 0);
		assert_eq!(empty.centroid(), None);
		assert_eq!(empty.to_string(), "");
	}

	#[test]
	fn from_min_max() {
		let b = BoundingBox::from_min_max(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap();
		assert_eq!(b.dimensions(), 3);
		assert_eq!(b.min(), &[1.0, 2.0, 3.0]);
		assert_eq!(b.max(), &[4.0, 5.0, 6.0]);
		assert!(BoundingBox::from_min_max(&[1.0], &[1.0, 2.0]).is_err());
	}

	#[test]
	fn from_single_position_duplicates() {
		let position = vec![5.0, 10.0];
		let b = BoundingBox::from(position.as_slice());
		assert_eq!(b.as_slice(), &[5.0, 10.0, 5.0, 10.0]);
		// the input stays untouched
		assert_eq!(position, vec![5.0, 10.0]);
	}

	#[test]
	fn from_line() {
		let line = vec![vec![1.0, 5.0], vec![-2.0, 3.0], vec![4.0, 4.0]];
		assert_eq!(BoundingBox::from(line.as_slice()).as_slice(), &[-2.0, 3.0, 4.0, 5.0]);
	}

	#[test]
	fn from_polygon_with_hole() {
		let polygon = vec![
			vec![vec![0.0, 0.0], vec![10.0, 0.0], vec![10.0, 10.0], vec![0.0, 0.0]],
			vec![vec![2.0, 2.0], vec![3.0, 2.0], vec![3.0, 3.0], vec![2.0, 2.0]],
		];
		assert_eq!(BoundingBox::from(polygon.as_slice()).as_slice(), &[0.0, 0.0, 10.0, 10.0]);
	}

	#[test]
	fn from_multi_polygon_3d() {
		let multi = vec![
			vec![vec![vec![0.0, 0.0, 1.0], vec![1.0, 1.0, 2.0]]],
			vec![vec![vec![-5.0, 3.0, 0.5], vec![2.0, 7.0, 9.0]]],
		];
		assert_eq!(
			BoundingBox::from(multi.as_slice()).as_slice(),
			&[-5.0, 0.0, 0.5, 2.0, 7.0, 9.0]
		);
	}

	#[test]
	fn from_empty_list_is_empty() {
		let empty: Vec<Vec<f64>> = vec![];
		assert!(BoundingBox::from(empty.as_slice()).is_empty());
	}

	#[rstest]
	#[case("1,2,x,4", &[1.0, 2.0, 4.0])]
	#[case("-10,-5,10,5", &[-10.0, -5.0, 10.0, 5.0])]
	#[case("1.5, 2", &[1.5])]
	#[case(" 1, 2 ,x", &[])]
	#[case("", &[])]
	#[case("a,b", &[])]
	fn from_text(#[case] text: &str, #[case] expected: &[f64]) {
		assert_eq!(BoundingBox::from_text(text).as_slice(), expected);
		assert_eq!(BoundingBox::from(text).as_slice(), expected);
	}

	#[rstest]
	#[case(json!("1,2,3,4"), &[1.0, 2.0, 3.0, 4.0])]
	#[case(json!([5, 10]), &[5.0, 10.0, 5.0, 10.0])]
	#[case(json!([[1, 2], [3, 0]]), &[1.0, 0.0, 3.0, 2.0])]
	#[case(json!([[[1, 2], [3, 0]], [[-1, 9]]]), &[-1.0, 0.0, 3.0, 9.0])]
	#[case(json!([[[[1, 2]]], [[[7, -7]]]]), &[1.0, -7.0, 7.0, 2.0])]
	#[case(json!([[[[[1, 2]]]]]), &[])]
	#[case(json!([[1, 2], [[3, 4]]]), &[])]
	#[case(json!([1, [2, 3]]), &[])]
	#[case(json!([[1, 2], [3, 4, 5]]), &[])]
	#[case(json!({"a": 1}), &[])]
	#[case(json!(null), &[])]
	#[case(json!(42), &[])]
	fn from_json(#[case] value: Value, #[case] expected: &[f64]) {
		assert_eq!(BoundingBox::from_json(&value).as_slice(), expected);
	}

	#[test]
	fn merge_identity() {
		let a = bbox(&[0.0, 1.0, 2.0, 3.0]);
		let empty = BoundingBox::new();
		assert_eq!(empty.merge(&a), a);
		assert_eq!(a.merge(&empty), a);
		assert_eq!(empty.merge(&empty), empty);
	}

	#[rstest]
	#[case(&[0.0, 0.0, 1.0, 1.0], &[2.0, -1.0, 3.0, 0.5], &[0.0, -1.0, 3.0, 1.0])]
	#[case(&[0.0, 0.0, 4.0, 4.0], &[1.0, 1.0, 2.0, 2.0], &[0.0, 0.0, 4.0, 4.0])]
	#[case(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[0.0, 3.0, 2.0, 5.0, 4.0, 7.0], &[0.0, 2.0, 2.0, 5.0, 5.0, 7.0])]
	fn merge_commutative(#[case] a: &[f64], #[case] b: &[f64], #[case] expected: &[f64]) {
		let (a, b) = (bbox(a), bbox(b));
		assert_eq!(a.merge(&b).as_slice(), expected);
		assert_eq!(b.merge(&a).as_slice(), expected);
		assert!(a.merge(&b).equals(&b.merge(&a)));
	}

	#[test]
	fn merge_idempotent() {
		let a = bbox(&[-1.0, -2.0, 1.0, 2.0]);
		assert_eq!(a.merge(&a), a);
	}

	#[test]
	fn merge_leaves_inputs_untouched() {
		let a = bbox(&[0.0, 0.0, 1.0, 1.0]);
		let b = bbox(&[-1.0, -1.0, 2.0, 2.0]);
		let _ = a.merge(&b);
		assert_eq!(a.as_slice(), &[0.0, 0.0, 1.0, 1.0]);
		assert_eq!(b.as_slice(), &[-1.0, -1.0, 2.0, 2.0]);
	}

	#[test]
	fn try_merge_rejects_mismatched_dimensions() {
		let a = bbox(&[0.0, 0.0, 1.0, 1.0]);
		let b = bbox(&[0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
		assert!(a.try_merge(&b).is_err());
	}

	#[test]
	#[should_panic(expected = "different lengths")]
	fn merge_panics_on_mismatched_dimensions() {
		let a = bbox(&[0.0, 0.0, 1.0, 1.0]);
		let b = bbox(&[0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
		let _ = a.merge(&b);
	}

	#[test]
	fn equals() {
		assert!(BoundingBox::new().equals(&BoundingBox::new()));
		assert!(!BoundingBox::new().equals(&bbox(&[0.0, 0.0])));
		assert!(!bbox(&[0.0, 0.0]).equals(&BoundingBox::new()));
		assert!(!bbox(&[0.0, 0.0]).equals(&bbox(&[0.0, 0.0, 0.0, 0.0])));
		assert!(bbox(&[1.0, 2.0, 3.0, 4.0]).equals(&bbox(&[1.0, 2.0, 3.0, 4.0])));
		assert!(!bbox(&[1.0, 2.0, 3.0, 4.0]).equals(&bbox(&[1.0, 2.0, 3.0, 4.000_000_1])));
	}

	#[rstest]
	#[case(&[0.0, 0.0, 2.0, 2.0], &[1.0, 1.0, 3.0, 3.0], true)]
	#[case(&[0.0, 0.0, 1.0, 1.0], &[1.0, 0.0, 2.0, 1.0], false)]
	#[case(&[0.0, 0.0, 1.0, 1.0], &[1.0, 1.0, 2.0, 2.0], false)]
	#[case(&[0.0, 0.0, 4.0, 4.0], &[1.0, 1.0, 2.0, 2.0], true)]
	#[case(&[0.0, 0.0, 1.0, 1.0], &[5.0, 5.0, 6.0, 6.0], false)]
	#[case(&[0.0, 0.0, 0.0, 2.0, 2.0, 2.0], &[1.0, 1.0, 1.0, 3.0, 3.0, 3.0], true)]
	#[case(&[0.0, 0.0, 0.0, 2.0, 2.0, 2.0], &[1.0, 1.0, 2.0, 3.0, 3.0, 3.0], false)]
	#[case(&[0.0, 0.0, 2.0, 2.0], &[], false)]
	#[case(&[0.0, 0.0, 2.0, 2.0], &[0.0, 0.0, 0.0, 2.0, 2.0, 2.0], false)]
	fn overlaps_is_symmetric_and_strict(#[case] a: &[f64], #[case] b: &[f64], #[case] expected: bool) {
		let (a, b) = (bbox(a), bbox(b));
		assert_eq!(a.overlaps(&b), expected);
		assert_eq!(b.overlaps(&a), expected);
	}

	#[test]
	fn centroid() {
		assert_eq!(bbox(&[0.0, 0.0, 2.0, 4.0]).centroid(), Some(vec![1.0, 2.0]));
		assert_eq!(
			bbox(&[-1.0, -1.0, -1.0, 1.0, 3.0, 5.0]).centroid(),
			Some(vec![0.0, 1.0, 2.0])
		);
	}

	#[test]
	fn display_and_back() {
		let b = bbox(&[-10.0, -5.5, 10.0, 5.0]);
		assert_eq!(b.to_string(), "-10,-5.5,10,5");
		assert_eq!(BoundingBox::from_text(&b.to_string()), b);
	}

	#[test]
	fn debug_format() {
		assert_eq!(format!("{:?}", bbox(&[1.0, 2.0, 3.0, 4.0])), "BoundingBox(1, 2, 3, 4)");
	}

	#[test]
	fn try_from_rejects_odd_length() {
		assert!(BoundingBox::try_from(vec![1.0, 2.0, 3.0]).is_err());
	}

	#[test]
	fn to_json() {
		assert_eq!(bbox(&[1.0, 2.5, 3.0, 4.0]).to_json(), json!([1.0, 2.5, 3.0, 4.0]));
		assert_eq!(BoundingBox::new().to_json(), json!([]));
	}
}
