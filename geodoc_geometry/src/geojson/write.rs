use crate::GeoJson;
use anyhow::{Context, Result};
use geodoc_core::{
	BoundingBox,
	io::write_all,
	json::{JsonObject, JsonValue, encode, encode_pretty, numbers_to_json},
};
use log::debug;
use std::{io::Write, path::Path};

/// How GeoJSON text is written.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WriteOptions {
	/// Number of decimal places to round coordinates and boxes to. `None` writes them unchanged.
	pub precision: Option<u8>,
	/// Indent the output.
	pub pretty: bool,
}

impl WriteOptions {
	#[must_use]
	pub fn with_precision(mut self, precision: u8) -> Self {
		self.precision = Some(precision);
		self
	}

	#[must_use]
	pub fn with_pretty(mut self, pretty: bool) -> Self {
		self.pretty = pretty;
		self
	}
}

/// Converts a document into a generic JSON tree at full precision.
#[must_use]
pub fn serialize_geojson(geojson: &GeoJson) -> JsonValue {
	geojson.to_json(None)
}

pub fn stringify_geojson(geojson: &GeoJson, options: &WriteOptions) -> Result<String> {
	let value = geojson.to_json(options.precision);
	if options.pretty {
		encode_pretty(&value)
	} else {
		encode(&value)
	}
}

pub fn write_geojson(mut writer: impl Write, geojson: &GeoJson, options: &WriteOptions) -> Result<()> {
	let text = stringify_geojson(geojson, options)?;
	writer.write_all(text.as_bytes()).context("Failed to write GeoJSON")?;
	writer.flush().context("Failed to write GeoJSON")
}

pub fn write_geojson_file(path: &Path, geojson: &GeoJson, options: &WriteOptions) -> Result<()> {
	debug!("writing {} to {path:?}", geojson.type_name());
	let text = stringify_geojson(geojson, options)?;
	write_all(path, text.as_bytes())
}

/// A JSON object whose first member is `"type": type_name`.
pub(crate) fn tagged_object(type_name: &str) -> JsonObject {
	let mut object = JsonObject::new();
	object.insert(String::from("type"), JsonValue::from(type_name));
	object
}

/// Adds a cached box as `bbox`. Missing and empty boxes are skipped.
pub(crate) fn insert_bbox(object: &mut JsonObject, bbox: Option<&BoundingBox>, precision: Option<u8>) {
	if let Some(bbox) = bbox.filter(|b| !b.is_empty()) {
		object.insert(String::from("bbox"), numbers_to_json(bbox.as_slice(), precision));
	}
}
