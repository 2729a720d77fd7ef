use super::{MalformedDocument, index_path, key_path};
use crate::{
	CoordinateTree, FeatureId, GeoCollection, GeoFeature, GeoJson, GeoProperties, Geometry, GeometryCollection,
	GeometryTrait,
};
use anyhow::Result;
use geodoc_core::{
	BoundingBox,
	json::{JsonObject, JsonValue},
};
use log::trace;

/// Builds a typed document from a generic JSON tree, dispatching on `type`.
///
/// Nothing is recomputed: a `bbox` member is stored as the cached box as it is.
/// Unknown members are ignored.
///
/// All positions of one document must have the same number of values, so the bounding
/// box of a parsed document can always be computed.
pub fn parse_geojson_value(value: &JsonValue) -> Result<GeoJson> {
	let object = object_at(value, "", "a GeoJSON object")?;
	let dimensions = &mut None;
	match type_at(object, "")? {
		"Feature" => Ok(GeoJson::Feature(feature_at(value, "", dimensions)?)),
		"FeatureCollection" => Ok(GeoJson::FeatureCollection(collection_at(value, "", dimensions)?)),
		_ => Ok(GeoJson::Geometry(geometry_at(value, "", dimensions)?)),
	}
}

/// Like [`parse_geojson_value`], but the document must be a geometry.
pub fn parse_geometry(value: &JsonValue) -> Result<Geometry> {
	geometry_at(value, "", &mut None)
}

/// Like [`parse_geojson_value`], but the document must be a `Feature`.
pub fn parse_feature(value: &JsonValue) -> Result<GeoFeature> {
	feature_at(value, "", &mut None)
}

/// Like [`parse_geojson_value`], but the document must be a `FeatureCollection`.
pub fn parse_feature_collection(value: &JsonValue) -> Result<GeoCollection> {
	collection_at(value, "", &mut None)
}

fn object_at<'a>(value: &'a JsonValue, path: &str, expected: &str) -> Result<&'a JsonObject> {
	value
		.as_object()
		.ok_or_else(|| MalformedDocument::unexpected(path, expected, value).into())
}

fn type_at<'a>(object: &'a JsonObject, path: &str) -> Result<&'a str> {
	let type_path = key_path(path, "type");
	match object.get("type") {
		Some(JsonValue::String(name)) => Ok(name.as_str()),
		Some(other) => Err(MalformedDocument::unexpected(&type_path, "a type name", other).into()),
		None => Err(MalformedDocument::missing(&type_path, "a type name").into()),
	}
}

fn expect_type(object: &JsonObject, path: &str, expected: &str) -> Result<()> {
	let name = type_at(object, path)?;
	if name == expected {
		Ok(())
	} else {
		Err(MalformedDocument::new(&key_path(path, "type"), format!("{expected:?}"), format!("{name:?}")).into())
	}
}

fn bbox_at(object: &JsonObject, path: &str) -> Result<Option<BoundingBox>> {
	let value = match object.get("bbox") {
		None | Some(JsonValue::Null) => return Ok(None),
		Some(value) => value,
	};
	let values = value
		.as_array()
		.filter(|items| !items.is_empty())
		.and_then(|items| items.iter().map(JsonValue::as_f64).collect::<Option<Vec<f64>>>());
	match values.map(BoundingBox::try_from) {
		Some(Ok(bbox)) => Ok(Some(bbox)),
		_ => Err(MalformedDocument::unexpected(
			&key_path(path, "bbox"),
			"a bounding box (a non-empty array with an even number of numbers)",
			value,
		)
		.into()),
	}
}

fn geometry_at(value: &JsonValue, path: &str, dimensions: &mut Option<usize>) -> Result<Geometry> {
	let object = object_at(value, path, "a geometry object")?;
	let name = type_at(object, path)?;
	trace!("parsing {name} at {path:?}");

	Ok(match name {
		"Point" => Geometry::Point(coordinate_geometry(object, path, dimensions)?),
		"MultiPoint" => Geometry::MultiPoint(coordinate_geometry(object, path, dimensions)?),
		"LineString" => Geometry::LineString(coordinate_geometry(object, path, dimensions)?),
		"MultiLineString" => Geometry::MultiLineString(coordinate_geometry(object, path, dimensions)?),
		"Polygon" => Geometry::Polygon(coordinate_geometry(object, path, dimensions)?),
		"MultiPolygon" => Geometry::MultiPolygon(coordinate_geometry(object, path, dimensions)?),
		"GeometryCollection" => Geometry::GeometryCollection(geometry_collection_at(object, path, dimensions)?),
		_ => {
			return Err(MalformedDocument::new(&key_path(path, "type"), "a geometry type", format!("{name:?}")).into());
		}
	})
}

fn coordinate_geometry<G: GeometryTrait>(
	object: &JsonObject,
	path: &str,
	dimensions: &mut Option<usize>,
) -> Result<G> {
	let coordinates_path = key_path(path, "coordinates");
	let value = object
		.get("coordinates")
		.ok_or_else(|| MalformedDocument::missing(&coordinates_path, <G::Coordinates as CoordinateTree>::shape()))?;
	let coordinates = <G::Coordinates as CoordinateTree>::from_json(value, &coordinates_path, dimensions)?;
	Ok(G::from_parts(coordinates, bbox_at(object, path)?))
}

fn geometry_collection_at(
	object: &JsonObject,
	path: &str,
	dimensions: &mut Option<usize>,
) -> Result<GeometryCollection> {
	let geometries_path = key_path(path, "geometries");
	let items = match object.get("geometries") {
		Some(JsonValue::Array(items)) => items,
		Some(other) => {
			return Err(MalformedDocument::unexpected(&geometries_path, "an array of geometries", other).into());
		}
		None => return Err(MalformedDocument::missing(&geometries_path, "an array of geometries").into()),
	};
	let geometries = items
		.iter()
		.enumerate()
		.map(|(index, item)| geometry_at(item, &index_path(&geometries_path, index), dimensions))
		.collect::<Result<Vec<_>>>()?;
	Ok(GeometryCollection {
		geometries,
		bbox: bbox_at(object, path)?,
	})
}

fn feature_at(value: &JsonValue, path: &str, dimensions: &mut Option<usize>) -> Result<GeoFeature> {
	let object = object_at(value, path, "a feature object")?;
	expect_type(object, path, "Feature")?;
	trace!("parsing Feature at {path:?}");

	let geometry = match object.get("geometry") {
		None | Some(JsonValue::Null) => None,
		Some(value) => Some(geometry_at(value, &key_path(path, "geometry"), dimensions)?),
	};

	let properties = match object.get("properties") {
		None | Some(JsonValue::Null) => None,
		Some(JsonValue::Object(properties)) => Some(GeoProperties::from(properties.clone())),
		Some(other) => {
			return Err(MalformedDocument::unexpected(&key_path(path, "properties"), "an object or null", other).into());
		}
	};

	let id = match object.get("id") {
		None | Some(JsonValue::Null) => None,
		Some(JsonValue::String(id)) => Some(FeatureId::String(id.clone())),
		Some(JsonValue::Number(id)) => Some(FeatureId::Number(id.clone())),
		Some(other) => {
			return Err(MalformedDocument::unexpected(&key_path(path, "id"), "a string or a number", other).into());
		}
	};

	Ok(GeoFeature {
		id,
		geometry,
		properties,
		bbox: bbox_at(object, path)?,
	})
}

fn collection_at(value: &JsonValue, path: &str, dimensions: &mut Option<usize>) -> Result<GeoCollection> {
	let object = object_at(value, path, "a feature collection object")?;
	expect_type(object, path, "FeatureCollection")?;

	let features_path = key_path(path, "features");
	let items = match object.get("features") {
		Some(JsonValue::Array(items)) => items,
		Some(other) => return Err(MalformedDocument::unexpected(&features_path, "an array of features", other).into()),
		None => return Err(MalformedDocument::missing(&features_path, "an array of features").into()),
	};
	trace!("parsing FeatureCollection with {} features at {path:?}", items.len());

	let features = items
		.iter()
		.enumerate()
		.map(|(index, item)| feature_at(item, &index_path(&features_path, index), dimensions))
		.collect::<Result<Vec<_>>>()?;

	Ok(GeoCollection {
		features,
		bbox: bbox_at(object, path)?,
	})
}
