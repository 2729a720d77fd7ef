/// Implements the shared plumbing of a single-tree geometry: `new`, [`BoundedTrait`],
/// [`GeometryTrait`] and a `Debug` that prints just the coordinates.
///
/// The geometry type must be a struct with `coordinates` and `bbox` fields.
///
/// [`BoundedTrait`]: crate::BoundedTrait
/// [`GeometryTrait`]: crate::GeometryTrait
macro_rules! impl_geometry {
	($($t:ident, $c:ty, $name:literal),*) => {$(
		impl $t {
			/// Creates the geometry without a cached bounding box.
			pub fn new<T>(coordinates: T) -> Self
			where
				T: $crate::IntoCoordinateTree<$c>,
			{
				Self {
					coordinates: $crate::IntoCoordinateTree::into_tree(coordinates),
					bbox: None,
				}
			}
		}

		impl $crate::BoundedTrait for $t {
			fn compute_bbox(&self) -> $crate::BoundingBox {
				$crate::CoordinateTree::compute_bbox(&self.coordinates)
			}
			fn bbox(&self) -> Option<&$crate::BoundingBox> {
				self.bbox.as_ref()
			}
			fn set_bbox(&mut self, bbox: Option<$crate::BoundingBox>) {
				self.bbox = bbox;
			}
		}

		impl $crate::GeometryTrait for $t {
			type Coordinates = $c;
			const TYPE_NAME: &'static str = $name;

			fn coordinates(&self) -> &$c {
				&self.coordinates
			}
			fn coordinates_mut(&mut self) -> &mut $c {
				&mut self.coordinates
			}
			fn from_parts(coordinates: $c, bbox: Option<$crate::BoundingBox>) -> Self {
				Self { coordinates, bbox }
			}
		}

		impl std::fmt::Debug for $t {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				std::fmt::Debug::fmt(&self.coordinates, f)
			}
		}
	)*}
}

pub(crate) use impl_geometry;
