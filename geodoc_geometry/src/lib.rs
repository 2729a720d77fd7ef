//! GeoJSON documents as typed Rust values.
//!
//! The [`geojson`] module converts between generic JSON trees and [`GeoJson`]: a
//! [`Geometry`], a [`GeoFeature`] or a [`GeoCollection`]. Every one of them can carry a
//! cached [`BoundingBox`] and compute a fresh one through [`BoundedTrait`].
//!
//! ```
//! use geodoc_geometry::{BoundedTrait, GeoJson};
//!
//! let document = GeoJson::from_json_str(r#"{"type":"LineString","coordinates":[[1,2],[3,-4]]}"#).unwrap();
//! assert_eq!(document.compute_bbox().to_string(), "1,-4,3,2");
//! ```

mod geo;
pub mod geojson;

pub use geo::*;
pub use geodoc_core::BoundingBox;
pub use geojson::*;

/// Computes the bounding box of a whole document from its coordinates, ignoring every
/// cached box.
///
/// # Panics
///
/// Panics if the document mixes positions of different dimensions across geometries.
#[must_use]
pub fn compute_bbox(geojson: &GeoJson) -> BoundingBox {
	geojson.compute_bbox()
}
