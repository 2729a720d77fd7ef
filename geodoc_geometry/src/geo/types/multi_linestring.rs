use super::Position;
use geodoc_core::BoundingBox;

/// A collection of line strings.
#[derive(Clone, PartialEq)]
pub struct MultiLineStringGeometry {
	pub coordinates: Vec<Vec<Position>>,
	pub bbox: Option<BoundingBox>,
}

super::impl_geometry!(MultiLineStringGeometry, Vec<Vec<Position>>, "MultiLineString");
