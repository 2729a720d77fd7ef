use super::Position;
use crate::geojson::{MalformedDocument, index_path, insert_bbox, tagged_object};
use anyhow::Result;
use geodoc_core::BoundingBox;
use serde_json::Value;
use std::fmt::Debug;

/// Anything that can carry a bounding box: geometries, features and collections.
///
/// The stored box is a cache. It is filled from the `bbox` member of a parsed document or
/// by [`update_bbox`](Self::update_bbox), and it is never invalidated automatically: after
/// changing coordinates, refreshing it is the caller's job.
pub trait BoundedTrait {
	/// Computes the bounding box from the current coordinates. Cached boxes, including
	/// those of nested members, are ignored.
	fn compute_bbox(&self) -> BoundingBox;

	/// Returns the cached bounding box, if any.
	fn bbox(&self) -> Option<&BoundingBox>;

	/// Replaces the cached bounding box.
	fn set_bbox(&mut self, bbox: Option<BoundingBox>);

	/// Stores a freshly computed bounding box in the cache.
	fn update_bbox(&mut self) {
		let bbox = self.compute_bbox();
		self.set_bbox(Some(bbox));
	}

	/// Returns the cached box, or computes one if there is none.
	fn bbox_or_compute(&self) -> BoundingBox {
		self.bbox().cloned().unwrap_or_else(|| self.compute_bbox())
	}
}

/// A nested list of positions. The nesting depth encodes the geometry kind:
/// 1 for a point, 2 for line strings and multi points, 3 for polygons and
/// multi line strings, 4 for multi polygons.
pub trait CoordinateTree: Debug + Clone + PartialEq + Sized {
	const DEPTH: usize;

	fn compute_bbox(&self) -> BoundingBox;

	fn to_json(&self, precision: Option<u8>) -> Value;

	/// Reads a tree of exactly [`DEPTH`](Self::DEPTH) levels from a JSON value.
	///
	/// `dimensions` tracks the size of the first position found; every other position
	/// must have the same size.
	fn from_json(value: &Value, path: &str, dimensions: &mut Option<usize>) -> Result<Self>;

	/// Describes the expected JSON shape, for error messages.
	fn shape() -> String;
}

impl CoordinateTree for Position {
	const DEPTH: usize = 1;

	fn compute_bbox(&self) -> BoundingBox {
		self.bounding_box()
	}

	fn to_json(&self, precision: Option<u8>) -> Value {
		Position::to_json(self, precision)
	}

	fn from_json(value: &Value, path: &str, dimensions: &mut Option<usize>) -> Result<Self> {
		let values = value
			.as_array()
			.filter(|items| items.len() >= 2)
			.and_then(|items| items.iter().map(Value::as_f64).collect::<Option<Vec<f64>>>())
			.ok_or_else(|| MalformedDocument::unexpected(path, Self::shape(), value))?;

		let expected = *dimensions.get_or_insert(values.len());
		if expected != values.len() {
			return Err(MalformedDocument::new(
				path,
				format!("a position with {expected} values like the ones before"),
				format!("a position with {} values", values.len()),
			)
			.into());
		}
		Ok(Position(values))
	}

	fn shape() -> String {
		String::from("a position (an array of at least two numbers)")
	}
}

impl<T: CoordinateTree> CoordinateTree for Vec<T> {
	const DEPTH: usize = T::DEPTH + 1;

	fn compute_bbox(&self) -> BoundingBox {
		self.iter().map(CoordinateTree::compute_bbox).collect()
	}

	fn to_json(&self, precision: Option<u8>) -> Value {
		Value::Array(self.iter().map(|item| item.to_json(precision)).collect())
	}

	fn from_json(value: &Value, path: &str, dimensions: &mut Option<usize>) -> Result<Self> {
		let Some(items) = value.as_array() else {
			return Err(MalformedDocument::unexpected(path, Self::shape(), value).into());
		};
		items
			.iter()
			.enumerate()
			.map(|(index, item)| T::from_json(item, &index_path(path, index), dimensions))
			.collect()
	}

	fn shape() -> String {
		format!("an array of {}", T::shape().trim_start_matches("a ").trim_start_matches("an "))
	}
}

/// Converts nested lists of position-like values (arrays, tuples, …) into a
/// [`CoordinateTree`].
pub trait IntoCoordinateTree<C> {
	fn into_tree(self) -> C;
}

impl<T> IntoCoordinateTree<Position> for T
where
	Position: From<T>,
{
	fn into_tree(self) -> Position {
		Position::from(self)
	}
}

impl<T, C> IntoCoordinateTree<Vec<C>> for Vec<T>
where
	T: IntoCoordinateTree<C>,
{
	fn into_tree(self) -> Vec<C> {
		self.into_iter().map(IntoCoordinateTree::into_tree).collect()
	}
}

/// A geometry made of a single coordinate tree, i.e. every kind except the
/// geometry collection.
pub trait GeometryTrait: BoundedTrait + Debug + Clone + PartialEq {
	type Coordinates: CoordinateTree;

	/// The GeoJSON `type` of this geometry.
	const TYPE_NAME: &'static str;

	fn coordinates(&self) -> &Self::Coordinates;

	fn coordinates_mut(&mut self) -> &mut Self::Coordinates;

	/// Builds the geometry from its parts without computing anything.
	fn from_parts(coordinates: Self::Coordinates, bbox: Option<BoundingBox>) -> Self;

	/// Converts the coordinates into nested JSON arrays, optionally rounded.
	fn to_coord_json(&self, precision: Option<u8>) -> Value {
		self.coordinates().to_json(precision)
	}

	/// Serializes the geometry as a GeoJSON object, `type` first.
	fn to_json(&self, precision: Option<u8>) -> Value {
		let mut object = tagged_object(Self::TYPE_NAME);
		object.insert(String::from("coordinates"), self.to_coord_json(precision));
		insert_bbox(&mut object, self.bbox(), precision);
		Value::Object(object)
	}
}
