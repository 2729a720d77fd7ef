//! Value types shared by the geodoc crates.

mod bounding_box;
pub use bounding_box::*;
