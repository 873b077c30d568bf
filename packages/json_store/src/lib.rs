//! Serde and JSON integration for dotstore
//!
//! This layer adds:
//! - `JsonImporter` / `JsonExporter`: load and dump a store as JSON
//! - `SerdeImporter`: load a store from any serializable struct
//! - `TypedStore`: read and write Rust types at a path
//! - Value <-> serde_json conversions

mod convert;
mod json_io;
mod typed;

pub use convert::{from_value, json_to_value, map_to_json, to_map, to_value, value_to_json};
pub use json_io::{JsonExporter, JsonImporter};
pub use typed::{to_json, to_json_string, SerdeImporter, TypedStore};

// Re-export core types for convenience
pub use dotstore_core::{Error, Map, Path, PathStore, Policy, Value};
