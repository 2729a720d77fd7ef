use super::*;
use crate::geojson::{insert_bbox, parse_feature_collection, tagged_object};
use anyhow::Result;
use geodoc_core::{BoundingBox, json::decode};
use serde_json::Value;

/// An ordered list of features. An empty collection is valid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoCollection {
	pub features: Vec<GeoFeature>,
	pub bbox: Option<BoundingBox>,
}

impl GeoCollection {
	#[must_use]
	pub fn new(features: Vec<GeoFeature>) -> Self {
		Self { features, bbox: None }
	}

	/// Parses GeoJSON text that must hold a `FeatureCollection`.
	pub fn from_json_str(json: &str) -> Result<Self> {
		parse_feature_collection(&decode(json)?)
	}

	pub fn push(&mut self, feature: GeoFeature) {
		self.features.push(feature);
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.features.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.features.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, GeoFeature> {
		self.features.iter()
	}

	#[must_use]
	pub fn to_json(&self, precision: Option<u8>) -> Value {
		let mut object = tagged_object("FeatureCollection");
		object.insert(
			String::from("features"),
			Value::Array(self.features.iter().map(|f| f.to_json(precision)).collect()),
		);
		insert_bbox(&mut object, self.bbox.as_ref(), precision);
		Value::Object(object)
	}
}

impl BoundedTrait for GeoCollection {
	fn compute_bbox(&self) -> BoundingBox {
		self.features.iter().map(BoundedTrait::compute_bbox).collect()
	}
	fn bbox(&self) -> Option<&BoundingBox> {
		self.bbox.as_ref()
	}
	fn set_bbox(&mut self, bbox: Option<BoundingBox>) {
		self.bbox = bbox;
	}
}

impl From<Vec<GeoFeature>> for GeoCollection {
	fn from(features: Vec<GeoFeature>) -> Self {
		Self::new(features)
	}
}

impl FromIterator<GeoFeature> for GeoCollection {
	fn from_iter<I: IntoIterator<Item = GeoFeature>>(iter: I) -> Self {
		Self::new(iter.into_iter().collect())
	}
}

impl<'a> IntoIterator for &'a GeoCollection {
	type Item = &'a GeoFeature;
	type IntoIter = std::slice::Iter<'a, GeoFeature>;
	fn into_iter(self) -> Self::IntoIter {
		self.features.iter()
	}
}
