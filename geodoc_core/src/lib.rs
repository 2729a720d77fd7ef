//! Core building blocks of geodoc: the n-dimensional [`BoundingBox`], the JSON codec that
//! turns text into generic document trees and back, and whole-file I/O helpers.

pub mod io;
pub mod json;
pub mod types;

pub use types::*;
