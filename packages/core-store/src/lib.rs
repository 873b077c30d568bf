//! Core dotstore: a dot-path addressable configuration tree
//!
//! This layer holds the whole addressing and mutation engine:
//! - `Path`: a tokenized dot path (`"server.http.port"`)
//! - `Value`: the tree node, where `Value::Map` is a branch and everything else a leaf
//! - `Policy`: collision handling on write
//! - `PathStore`: the tree and every operation on it
//! - `Importer` / `Exporter`: the boundary to external representations
//!
//! The core does no I/O. Serde and JSON adapters live in `dotstore-json`.
//!
//! # Example
//!
//! ```rust
//! use dotstore_core::{PathStore, Error};
//!
//! fn configure(store: &mut PathStore) -> Result<(), Error> {
//!     store.set("log.level", "debug")?.set("log.targets.stderr", true)?;
//!     Ok(())
//! }
//! ```

mod error;
mod options;
mod path;
mod store;
mod traits;
mod value;

pub use error::{Error, Result};
pub use options::{DescentConflict, Policy, ProtectTrigger, StoreOptions};
pub use path::{Path, SEPARATOR};
pub use store::PathStore;
pub use traits::{Exporter, Importer, SnapshotExporter};
pub use value::{Map, Value};
