use super::Position;
use geodoc_core::BoundingBox;

/// A single position.
#[derive(Clone, PartialEq)]
pub struct PointGeometry {
	pub coordinates: Position,
	pub bbox: Option<BoundingBox>,
}

super::impl_geometry!(PointGeometry, Position, "Point");

impl PointGeometry {
	/// The point in the middle of `bbox`, or `None` if the box is empty.
	pub fn from_bbox_centroid(bbox: &BoundingBox) -> Option<Self> {
		bbox.centroid().map(PointGeometry::new)
	}

	#[must_use]
	pub fn as_position(&self) -> &Position {
		&self.coordinates
	}
}
