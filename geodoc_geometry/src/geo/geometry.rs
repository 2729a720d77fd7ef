use super::*;
use geodoc_core::BoundingBox;
use serde_json::Value;
use std::fmt::{self, Debug, Display};

/// Any GeoJSON geometry.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(PointGeometry),
	MultiPoint(MultiPointGeometry),
	LineString(LineStringGeometry),
	MultiLineString(MultiLineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPolygon(MultiPolygonGeometry),
	GeometryCollection(GeometryCollection),
}

impl Geometry {
	pub fn new_point<T: IntoCoordinateTree<Position>>(value: T) -> Self {
		Self::Point(PointGeometry::new(value))
	}
	pub fn new_multi_point<T: IntoCoordinateTree<Vec<Position>>>(value: T) -> Self {
		Self::MultiPoint(MultiPointGeometry::new(value))
	}
	pub fn new_line_string<T: IntoCoordinateTree<Vec<Position>>>(value: T) -> Self {
		Self::LineString(LineStringGeometry::new(value))
	}
	pub fn new_multi_line_string<T: IntoCoordinateTree<Vec<Vec<Position>>>>(value: T) -> Self {
		Self::MultiLineString(MultiLineStringGeometry::new(value))
	}
	pub fn new_polygon<T: IntoCoordinateTree<Vec<Vec<Position>>>>(value: T) -> Self {
		Self::Polygon(PolygonGeometry::new(value))
	}
	pub fn new_multi_polygon<T: IntoCoordinateTree<Vec<Vec<Vec<Position>>>>>(value: T) -> Self {
		Self::MultiPolygon(MultiPolygonGeometry::new(value))
	}
	#[must_use]
	pub fn new_geometry_collection(geometries: Vec<Geometry>) -> Self {
		Self::GeometryCollection(GeometryCollection::new(geometries))
	}

	/// The GeoJSON `type` of this geometry.
	#[must_use]
	pub fn type_name(&self) -> &'static str {
		match self {
			Geometry::Point(_) => PointGeometry::TYPE_NAME,
			Geometry::MultiPoint(_) => MultiPointGeometry::TYPE_NAME,
			Geometry::LineString(_) => LineStringGeometry::TYPE_NAME,
			Geometry::MultiLineString(_) => MultiLineStringGeometry::TYPE_NAME,
			Geometry::Polygon(_) => PolygonGeometry::TYPE_NAME,
			Geometry::MultiPolygon(_) => MultiPolygonGeometry::TYPE_NAME,
			Geometry::GeometryCollection(_) => "GeometryCollection",
		}
	}

	#[must_use]
	pub fn is_collection(&self) -> bool {
		matches!(self, Geometry::GeometryCollection(_))
	}

	#[must_use]
	pub fn to_json(&self, precision: Option<u8>) -> Value {
		match self {
			Geometry::Point(g) => g.to_json(precision),
			Geometry::MultiPoint(g) => g.to_json(precision),
			Geometry::LineString(g) => g.to_json(precision),
			Geometry::MultiLineString(g) => g.to_json(precision),
			Geometry::Polygon(g) => g.to_json(precision),
			Geometry::MultiPolygon(g) => g.to_json(precision),
			Geometry::GeometryCollection(g) => g.to_json(precision),
		}
	}

	/// Pushes this geometry onto `list`, or its members if it is a collection.
	pub(crate) fn collect_leaves<'a>(&'a self, list: &mut Vec<&'a Geometry>) {
		match self {
			Geometry::GeometryCollection(collection) => {
				for geometry in &collection.geometries {
					geometry.collect_leaves(list);
				}
			}
			_ => list.push(self),
		}
	}

	fn as_bounded(&self) -> &dyn BoundedTrait {
		match self {
			Geometry::Point(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::LineString(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPolygon(g) => g,
			Geometry::GeometryCollection(g) => g,
		}
	}

	fn as_bounded_mut(&mut self) -> &mut dyn BoundedTrait {
		match self {
			Geometry::Point(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::LineString(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPolygon(g) => g,
			Geometry::GeometryCollection(g) => g,
		}
	}

	#[cfg(test)]
	pub fn new_example() -> Self {
		Self::MultiPolygon(MultiPolygonGeometry::new_example())
	}
}

impl BoundedTrait for Geometry {
	fn compute_bbox(&self) -> BoundingBox {
		self.as_bounded().compute_bbox()
	}
	fn bbox(&self) -> Option<&BoundingBox> {
		self.as_bounded().bbox()
	}
	fn set_bbox(&mut self, bbox: Option<BoundingBox>) {
		self.as_bounded_mut().set_bbox(bbox);
	}
}

macro_rules! impl_from_variant {
	($($variant:ident($t:ty)),*) => {$(
		impl From<$t> for Geometry {
			fn from(geometry: $t) -> Self {
				Geometry::$variant(geometry)
			}
		}
	)*};
}

impl_from_variant!(
	Point(PointGeometry),
	MultiPoint(MultiPointGeometry),
	LineString(LineStringGeometry),
	MultiLineString(MultiLineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPolygon(MultiPolygonGeometry),
	GeometryCollection(GeometryCollection)
);

impl Debug for Geometry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Point(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::LineString(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPolygon(g) => g,
			Geometry::GeometryCollection(g) => g,
		};
		f.debug_tuple(self.type_name()).field(inner).finish()
	}
}

/// Compact GeoJSON text.
impl Display for Geometry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.to_json(None))
	}
}
