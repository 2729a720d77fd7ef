use super::*;
use crate::geojson::{insert_bbox, tagged_object};
use geodoc_core::{BoundingBox, json::JsonValue};
use serde_json::Value;

/// A geometry with properties.
///
/// Both the geometry and the properties may be absent; an absent geometry is written as
/// `"geometry": null`, absent properties are not written at all.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoFeature {
	pub id: Option<FeatureId>,
	pub geometry: Option<Geometry>,
	pub properties: Option<GeoProperties>,
	pub bbox: Option<BoundingBox>,
}

impl GeoFeature {
	#[must_use]
	pub fn new(geometry: Geometry) -> Self {
		Self {
			geometry: Some(geometry),
			..Self::default()
		}
	}

	/// A feature with neither geometry nor properties.
	#[must_use]
	pub fn empty() -> Self {
		Self::default()
	}

	pub fn set_id(&mut self, id: impl Into<FeatureId>) {
		self.id = Some(id.into());
	}

	pub fn set_geometry(&mut self, geometry: Geometry) {
		self.geometry = Some(geometry);
	}

	pub fn set_properties(&mut self, properties: GeoProperties) {
		self.properties = Some(properties);
	}

	/// Sets a single property, creating the property object if there is none yet.
	pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<JsonValue>) {
		self.properties.get_or_insert_with(GeoProperties::new).insert(key, value);
	}

	#[must_use]
	pub fn to_json(&self, precision: Option<u8>) -> Value {
		let mut object = tagged_object("Feature");
		if let Some(id) = &self.id {
			object.insert(String::from("id"), id.to_json());
		}
		object.insert(
			String::from("geometry"),
			self.geometry.as_ref().map_or(Value::Null, |g| g.to_json(precision)),
		);
		if let Some(properties) = &self.properties {
			object.insert(String::from("properties"), properties.to_json());
		}
		insert_bbox(&mut object, self.bbox.as_ref(), precision);
		Value::Object(object)
	}

	#[cfg(test)]
	pub fn new_example() -> Self {
		let mut feature = Self::new(Geometry::new_example());
		feature.set_id(13u64);
		feature.set_properties(GeoProperties::from(vec![
			("name", JsonValue::from("Nice")),
			("population", JsonValue::from(348_085)),
			("is_nice", JsonValue::from(true)),
		]));
		feature
	}
}

impl BoundedTrait for GeoFeature {
	/// The box of the geometry; empty when there is none.
	fn compute_bbox(&self) -> BoundingBox {
		self.geometry.as_ref().map(BoundedTrait::compute_bbox).unwrap_or_default()
	}
	fn bbox(&self) -> Option<&BoundingBox> {
		self.bbox.as_ref()
	}
	fn set_bbox(&mut self, bbox: Option<BoundingBox>) {
		self.bbox = bbox;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use serde_json::json;

	#[test]
	fn without_geometry() {
		let feature = GeoFeature::empty();
		assert_eq!(feature.to_json(None).to_string(), r#"{"type":"Feature","geometry":null}"#);
		assert!(feature.compute_bbox().is_empty());
	}

	#[test]
	fn empty_properties_differ_from_absent() {
		let mut feature = GeoFeature::empty();
		feature.set_properties(GeoProperties::new());
		assert_eq!(
			feature.to_json(None).to_string(),
			r#"{"type":"Feature","geometry":null,"properties":{}}"#
		);
	}

	#[test]
	fn set_property_creates_object() {
		let mut feature = GeoFeature::new(Geometry::new_point([1, 2]));
		feature.set_property("name", "x");
		feature.set_property("rank", 3);
		assert_eq!(
			feature.properties.as_ref().map(GeoProperties::to_json),
			Some(json!({"name": "x", "rank": 3}))
		);
	}

	#[test]
	fn to_json_full() {
		let mut feature = GeoFeature::new(Geometry::new_point([1.5, 2.5]));
		feature.set_id("a1");
		feature.set_property("name", "x");
		feature.update_bbox();
		assert_eq!(
			feature.to_json(None),
			json!({
				"type": "Feature",
				"id": "a1",
				"geometry": {"type": "Point", "coordinates": [1.5, 2.5]},
				"properties": {"name": "x"},
				"bbox": [1.5, 2.5, 1.5, 2.5]
			})
		);
	}

	#[test]
	fn compute_bbox_uses_geometry() {
		let feature = GeoFeature::new_example();
		assert_eq!(feature.compute_bbox().as_slice(), &[0.0, 0.0, 9.0, 4.0]);
		assert_eq!(feature.id, Some(FeatureId::from(13u64)));
	}
}
