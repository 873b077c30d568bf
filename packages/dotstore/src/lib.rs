//! dotstore: a mutable tree of ordered maps addressed by dot paths.
//!
//! Values are read and written with paths like `"server.http.port"`. Writes
//! create intermediate branches on demand and follow a collision [`Policy`].
//! Loading and saving go through [`Importer`] and [`Exporter`]; the JSON and
//! serde implementations live in [`json`].
//!
//! ```rust
//! use dotstore::json::{to_json, JsonImporter};
//! use dotstore::PathStore;
//!
//! let mut store = PathStore::from_importer(&mut JsonImporter::from_text(r#"{"app": {"name": "demo"}}"#))?;
//! store.set("app.debug", true)?;
//! assert_eq!(to_json(&store)["app"]["debug"], serde_json::Value::Bool(true));
//! # Ok::<(), dotstore::Error>(())
//! ```

pub use dotstore_core::*;

pub mod json {
    pub use dotstore_json::{
        from_value, json_to_value, map_to_json, to_json, to_json_string, to_map, to_value,
        value_to_json, JsonExporter, JsonImporter, SerdeImporter, TypedStore,
    };
}
