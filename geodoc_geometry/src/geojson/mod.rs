//! Conversion between GeoJSON and the crate's geometry types.
//!
//! [`parse_geojson_value`] turns a generic JSON tree into a [`GeoJson`](crate::GeoJson),
//! [`serialize_geojson`] goes the other way. The readers and writers wrap both with the
//! codec and file helpers of `geodoc_core`.

mod error;
mod parse;
mod read;
mod write;

pub use error::MalformedDocument;
pub(crate) use error::{index_path, key_path};
pub use parse::*;
pub use read::*;
pub(crate) use write::{insert_bbox, tagged_object};
pub use write::{WriteOptions, serialize_geojson, stringify_geojson, write_geojson, write_geojson_file};
