use super::Position;
use geodoc_core::BoundingBox;

/// A collection of polygons.
#[derive(Clone, PartialEq)]
pub struct MultiPolygonGeometry {
	pub coordinates: Vec<Vec<Vec<Position>>>,
	pub bbox: Option<BoundingBox>,
}

super::impl_geometry!(MultiPolygonGeometry, Vec<Vec<Vec<Position>>>, "MultiPolygon");

impl MultiPolygonGeometry {
	#[cfg(test)]
	pub fn new_example() -> Self {
		Self::new(vec![
			vec![
				vec![[0.0, 0.0], [5.0, 0.0], [2.5, 4.0], [0.0, 0.0]],
				vec![[2.0, 1.0], [2.5, 2.0], [3.0, 1.0], [2.0, 1.0]],
			],
			vec![
				vec![[6.0, 0.0], [9.0, 0.0], [9.0, 4.0], [6.0, 4.0], [6.0, 0.0]],
				vec![[7.0, 1.0], [7.0, 3.0], [8.0, 3.0], [8.0, 1.0], [7.0, 1.0]],
			],
		])
	}
}
