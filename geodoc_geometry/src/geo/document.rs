use super::*;
use crate::geojson::{WriteOptions, parse_geojson_value, stringify_geojson};
use anyhow::Result;
use geodoc_core::{BoundingBox, json::decode};
use serde_json::Value;
use std::fmt::{self, Display};

/// A whole GeoJSON document: a geometry, a feature or a feature collection.
#[derive(Clone, Debug, PartialEq)]
pub enum GeoJson {
	Geometry(Geometry),
	Feature(GeoFeature),
	FeatureCollection(GeoCollection),
}

impl GeoJson {
	pub fn from_json_str(json: &str) -> Result<Self> {
		parse_geojson_value(&decode(json)?)
	}

	pub fn to_json_string(&self, options: &WriteOptions) -> Result<String> {
		stringify_geojson(self, options)
	}

	#[must_use]
	pub fn to_json(&self, precision: Option<u8>) -> Value {
		match self {
			GeoJson::Geometry(g) => g.to_json(precision),
			GeoJson::Feature(f) => f.to_json(precision),
			GeoJson::FeatureCollection(c) => c.to_json(precision),
		}
	}

	/// The `type` of the top-level object.
	#[must_use]
	pub fn type_name(&self) -> &'static str {
		match self {
			GeoJson::Geometry(g) => g.type_name(),
			GeoJson::Feature(_) => "Feature",
			GeoJson::FeatureCollection(_) => "FeatureCollection",
		}
	}

	/// All geometries in the document, in order. Geometry collections are expanded and
	/// features without a geometry contribute nothing.
	#[must_use]
	pub fn geometries(&self) -> Vec<&Geometry> {
		let mut list = Vec::new();
		match self {
			GeoJson::Geometry(g) => g.collect_leaves(&mut list),
			GeoJson::Feature(f) => {
				if let Some(g) = &f.geometry {
					g.collect_leaves(&mut list);
				}
			}
			GeoJson::FeatureCollection(c) => {
				for g in c.features.iter().filter_map(|f| f.geometry.as_ref()) {
					g.collect_leaves(&mut list);
				}
			}
		}
		list
	}

	fn as_bounded(&self) -> &dyn BoundedTrait {
		match self {
			GeoJson::Geometry(g) => g,
			GeoJson::Feature(f) => f,
			GeoJson::FeatureCollection(c) => c,
		}
	}
}

impl BoundedTrait for GeoJson {
	fn compute_bbox(&self) -> BoundingBox {
		self.as_bounded().compute_bbox()
	}
	fn bbox(&self) -> Option<&BoundingBox> {
		self.as_bounded().bbox()
	}
	fn set_bbox(&mut self, bbox: Option<BoundingBox>) {
		match self {
			GeoJson::Geometry(g) => g.set_bbox(bbox),
			GeoJson::Feature(f) => f.set_bbox(bbox),
			GeoJson::FeatureCollection(c) => c.set_bbox(bbox),
		}
	}
}

impl From<Geometry> for GeoJson {
	fn from(value: Geometry) -> Self {
		GeoJson::Geometry(value)
	}
}

impl From<GeoFeature> for GeoJson {
	fn from(value: GeoFeature) -> Self {
		GeoJson::Feature(value)
	}
}

impl From<GeoCollection> for GeoJson {
	fn from(value: GeoCollection) -> Self {
		GeoJson::FeatureCollection(value)
	}
}

/// Compact GeoJSON text.
impl Display for GeoJson {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.to_json(None))
	}
}
