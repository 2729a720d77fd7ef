use super::Position;
use geodoc_core::BoundingBox;

/// A sequence of connected positions.
#[derive(Clone, PartialEq)]
pub struct LineStringGeometry {
	pub coordinates: Vec<Position>,
	pub bbox: Option<BoundingBox>,
}

super::impl_geometry!(LineStringGeometry, Vec<Position>, "LineString");
