//! Typed access to a PathStore via serde.

use serde::de::DeserializeOwned;
use serde::Serialize;

use dotstore_core::{Error, Importer, Map, Path, PathStore, Policy};

use crate::convert::{from_value, map_to_json, to_map, to_value};

/// Imports any serializable value whose serde form is an object.
///
/// # Example
///
/// ```rust
/// use dotstore_core::PathStore;
/// use dotstore_json::SerdeImporter;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Defaults {
///     workers: u32,
///     verbose: bool,
/// }
///
/// let store = PathStore::from_importer(&mut SerdeImporter::new(Defaults {
///     workers: 4,
///     verbose: false,
/// }))
/// .unwrap();
/// assert_eq!(store.get("workers").unwrap().as_i64(), Some(4));
/// ```
pub struct SerdeImporter<T> {
    data: T,
}

impl<T: Serialize> SerdeImporter<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }

    pub fn into_inner(self) -> T {
        self.data
    }
}

impl<T: Serialize> Importer for SerdeImporter<T> {
    fn import(&mut self) -> Result<Map, Error> {
        to_map(&self.data)
    }
}

/// Extension trait for typed reads and writes.
///
/// Implemented for [`PathStore`].
pub trait TypedStore {
    /// Read the value at `path` and deserialize it.
    fn get_as<T: DeserializeOwned>(&self, path: impl Into<Path>) -> Result<T, Error>;

    /// Serialize `data` and write it at `path` under the default policy.
    fn set_as<T: Serialize + ?Sized>(
        &mut self,
        path: impl Into<Path>,
        data: &T,
    ) -> Result<&mut Self, Error>;

    /// Serialize `data` and write it at `path` under `policy`.
    fn set_as_with_policy<T: Serialize + ?Sized>(
        &mut self,
        path: impl Into<Path>,
        data: &T,
        policy: Policy,
    ) -> Result<&mut Self, Error>;

    /// Deserialize the whole tree.
    fn to_typed<T: DeserializeOwned>(&self) -> Result<T, Error>;
}

impl TypedStore for PathStore {
    fn get_as<T: DeserializeOwned>(&self, path: impl Into<Path>) -> Result<T, Error> {
        let value = self.get(path)?.clone();
        from_value(value)
    }

    fn set_as<T: Serialize + ?Sized>(
        &mut self,
        path: impl Into<Path>,
        data: &T,
    ) -> Result<&mut Self, Error> {
        self.set_as_with_policy(path, data, Policy::Override)
    }

    fn set_as_with_policy<T: Serialize + ?Sized>(
        &mut self,
        path: impl Into<Path>,
        data: &T,
        policy: Policy,
    ) -> Result<&mut Self, Error> {
        let value = to_value(data)?;
        self.set_with_policy(path, value, policy)
    }

    fn to_typed<T: DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_value(map_to_json(self.tree().clone()))
            .map_err(|e| Error::decode(e.to_string()))
    }
}

/// The whole store as a JSON document, key order preserved.
pub fn to_json(store: &PathStore) -> serde_json::Value {
    map_to_json(store.tree().clone())
}

/// The whole store as JSON text.
pub fn to_json_string(store: &PathStore, pretty: bool) -> Result<String, Error> {
    let rendered = if pretty {
        serde_json::to_string_pretty(store)
    } else {
        serde_json::to_string(store)
    };
    rendered.map_err(|e| Error::encode(e.to_string()))
}
