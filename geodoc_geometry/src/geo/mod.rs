mod collection;
mod document;
mod feature;
mod feature_id;
mod geometry;
mod properties;
mod types;

pub use collection::*;
pub use document::*;
pub use feature::*;
pub use feature_id::*;
pub use geometry::*;
pub use properties::*;
pub use types::*;
