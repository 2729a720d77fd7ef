use super::Position;
use geodoc_core::BoundingBox;

/// A collection of unconnected positions.
#[derive(Clone, PartialEq)]
pub struct MultiPointGeometry {
	pub coordinates: Vec<Position>,
	pub bbox: Option<BoundingBox>,
}

super::impl_geometry!(MultiPointGeometry, Vec<Position>, "MultiPoint");

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{BoundedTrait, GeometryTrait};
	use serde_json::json;

	fn sample() -> MultiPointGeometry {
		MultiPointGeometry::new(vec![[1, 2], [3, 4], [5, 6]])
	}

	#[test]
	fn compute_bbox() {
		assert_eq!(sample().compute_bbox().as_slice(), &[1.0, 2.0, 5.0, 6.0]);
	}

	#[test]
	fn empty_has_empty_bbox() {
		let empty = MultiPointGeometry::new(Vec::<Position>::new());
		assert!(empty.compute_bbox().is_empty());
	}

	#[test]
	fn to_coord_json() {
		assert_eq!(sample().to_coord_json(None), json!([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]));
	}

	#[test]
	fn debug_format() {
		assert_eq!(format!("{:?}", sample()), "[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]");
	}
}
