//! The seven GeoJSON geometry kinds and the traits they share.
//!
//! Six of them wrap a single coordinate tree and get their plumbing from
//! `impl_geometry!`; [`GeometryCollection`] holds other geometries.

mod geometry_collection;
mod linestring;
mod macros;
mod multi_linestring;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
mod position;
mod traits;

use macros::impl_geometry;

pub use geometry_collection::*;
pub use linestring::*;
pub use multi_linestring::*;
pub use multi_point::*;
pub use multi_polygon::*;
pub use point::*;
pub use polygon::*;
pub use position::*;
pub use traits::*;
