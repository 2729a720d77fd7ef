use super::Position;
use geodoc_core::BoundingBox;

/// A polygon: the outer ring first, followed by any holes.
///
/// Rings are taken as they are; closure and winding order are not checked.
#[derive(Clone, PartialEq)]
pub struct PolygonGeometry {
	pub coordinates: Vec<Vec<Position>>,
	pub bbox: Option<BoundingBox>,
}

super::impl_geometry!(PolygonGeometry, Vec<Vec<Position>>, "Polygon");

impl PolygonGeometry {
	/// The outer ring, if there is one.
	#[must_use]
	pub fn exterior(&self) -> Option<&Vec<Position>> {
		self.coordinates.first()
	}

	/// All rings after the first.
	#[must_use]
	pub fn interiors(&self) -> &[Vec<Position>] {
		self.coordinates.get(1..).unwrap_or_default()
	}
}
