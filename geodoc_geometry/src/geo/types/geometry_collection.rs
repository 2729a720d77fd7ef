use crate::{BoundedTrait, Geometry, geojson::{insert_bbox, tagged_object}};
use geodoc_core::BoundingBox;
use serde_json::Value;
use std::fmt::Debug;

/// A heterogeneous list of geometries, possibly containing further collections.
#[derive(Clone, Default, PartialEq)]
pub struct GeometryCollection {
	pub geometries: Vec<Geometry>,
	pub bbox: Option<BoundingBox>,
}

impl GeometryCollection {
	#[must_use]
	pub fn new(geometries: Vec<Geometry>) -> Self {
		Self { geometries, bbox: None }
	}

	pub fn push(&mut self, geometry: Geometry) {
		self.geometries.push(geometry);
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.geometries.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.geometries.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Geometry> {
		self.geometries.iter()
	}

	#[must_use]
	pub fn to_json(&self, precision: Option<u8>) -> Value {
		let mut object = tagged_object("GeometryCollection");
		object.insert(
			String::from("geometries"),
			Value::Array(self.geometries.iter().map(|g| g.to_json(precision)).collect()),
		);
		insert_bbox(&mut object, self.bbox.as_ref(), precision);
		Value::Object(object)
	}
}

impl BoundedTrait for GeometryCollection {
	fn compute_bbox(&self) -> BoundingBox {
		self.geometries.iter().map(BoundedTrait::compute_bbox).collect()
	}
	fn bbox(&self) -> Option<&BoundingBox> {
		self.bbox.as_ref()
	}
	fn set_bbox(&mut self, bbox: Option<BoundingBox>) {
		self.bbox = bbox;
	}
}

impl FromIterator<Geometry> for GeometryCollection {
	fn from_iter<I: IntoIterator<Item = Geometry>>(iter: I) -> Self {
		Self::new(iter.into_iter().collect())
	}
}

impl Debug for GeometryCollection {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.geometries).finish()
	}
}
