use geodoc_core::json::{JsonObject, JsonValue};
use std::fmt::Debug;

/// The `properties` of a feature: an arbitrary JSON object, kept as it was read.
#[derive(Clone, Default, PartialEq)]
pub struct GeoProperties {
	properties: JsonObject,
}

impl GeoProperties {
	#[must_use]
	pub fn new() -> GeoProperties {
		GeoProperties {
			properties: JsonObject::new(),
		}
	}
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<JsonValue>) {
		self.properties.insert(key.into(), value.into());
	}
	pub fn update(&mut self, new_properties: &GeoProperties) {
		for (k, v) in new_properties.iter() {
			self.properties.insert(k.clone(), v.clone());
		}
	}
	pub fn remove(&mut self, key: &str) -> Option<JsonValue> {
		self.properties.remove(key)
	}
	#[must_use]
	pub fn get(&self, key: &str) -> Option<&JsonValue> {
		self.properties.get(key)
	}
	pub fn iter(&self) -> serde_json::map::Iter<'_> {
		self.properties.iter()
	}
	#[must_use]
	pub fn len(&self) -> usize {
		self.properties.len()
	}
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.properties.is_empty()
	}
	#[must_use]
	pub fn as_object(&self) -> &JsonObject {
		&self.properties
	}
	#[must_use]
	pub fn to_json(&self) -> JsonValue {
		JsonValue::Object(self.properties.clone())
	}
}

impl From<JsonObject> for GeoProperties {
	fn from(properties: JsonObject) -> Self {
		GeoProperties { properties }
	}
}

impl From<GeoProperties> for JsonObject {
	fn from(value: GeoProperties) -> Self {
		value.properties
	}
}

impl From<Vec<(&str, JsonValue)>> for GeoProperties {
	fn from(value: Vec<(&str, JsonValue)>) -> Self {
		value.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
	}
}

impl FromIterator<(String, JsonValue)> for GeoProperties {
	fn from_iter<T: IntoIterator<Item = (String, JsonValue)>>(iter: T) -> Self {
		GeoProperties {
			properties: JsonObject::from_iter(iter),
		}
	}
}

impl IntoIterator for GeoProperties {
	type Item = (String, JsonValue);
	type IntoIter = serde_json::map::IntoIter;
	fn into_iter(self) -> Self::IntoIter {
		self.properties.into_iter()
	}
}

impl Debug for GeoProperties {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.properties.iter()).finish()
	}
}
