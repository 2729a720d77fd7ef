//! The JSON codec used to move between text and the generic document tree.
//!
//! Documents are decoded into [`serde_json::Value`] trees; the geometry crate only ever
//! works on those trees and never scans text itself.

mod codec;
mod number;

pub use codec::*;
pub use number::*;
pub use serde_json::{Map, Number, Value as JsonValue};

/// A JSON object with keys kept in insertion order.
pub type JsonObject = Map<String, JsonValue>;
