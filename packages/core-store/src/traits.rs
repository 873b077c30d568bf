//! Collaborator traits: Importer, Exporter.
//!
//! These are the store's only boundary with the outside world. The store
//! itself never performs I/O; whatever a deployment needs (files, environment,
//! a database) lives behind one of these.

use crate::{Map, Result};

/// Produce a full tree from some external representation.
///
/// Called exactly once per construction, `import_from` or `set_from`.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn Importer>`.
pub trait Importer {
    fn import(&mut self) -> Result<Map>;
}

/// Consume a full tree for some external representation.
///
/// Called exactly once per `export`. The tree is lent, not copied; an
/// exporter that needs to keep it must clone.
pub trait Exporter {
    fn export(&mut self, tree: &Map) -> Result<()>;
}

/// A literal tree is its own importer.
impl Importer for Map {
    fn import(&mut self) -> Result<Map> {
        Ok(self.clone())
    }
}

impl<T: Importer + ?Sized> Importer for &mut T {
    fn import(&mut self) -> Result<Map> {
        (**self).import()
    }
}

impl<T: Importer + ?Sized> Importer for Box<T> {
    fn import(&mut self) -> Result<Map> {
        (**self).import()
    }
}

impl<T: Exporter + ?Sized> Exporter for &mut T {
    fn export(&mut self, tree: &Map) -> Result<()> {
        (**self).export(tree)
    }
}

impl<T: Exporter + ?Sized> Exporter for Box<T> {
    fn export(&mut self, tree: &Map) -> Result<()> {
        (**self).export(tree)
    }
}

/// An exporter that keeps a copy of the last tree it was given.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SnapshotExporter {
    pub snapshot: Option<Map>,
}

impl Exporter for SnapshotExporter {
    fn export(&mut self, tree: &Map) -> Result<()> {
        self.snapshot = Some(tree.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, Value};

    struct Failing;

    impl Importer for Failing {
        fn import(&mut self) -> Result<Map> {
            Err(Error::import("source unavailable"))
        }
    }

    #[test]
    fn map_imports_itself() {
        let mut map = Map::new();
        map.insert("k".to_string(), Value::from(1));
        assert_eq!(map.import().unwrap(), map);
    }

    #[test]
    fn boxed_dyn_importer() {
        let mut boxed: Box<dyn Importer> = Box::new(Failing);
        assert!(matches!(boxed.import(), Err(Error::Import { .. })));
    }

    #[test]
    fn snapshot_exporter_keeps_copy() {
        let mut map = Map::new();
        map.insert("k".to_string(), Value::from("v"));
        let mut sink = SnapshotExporter::default();
        sink.export(&map).unwrap();
        assert_eq!(sink.snapshot, Some(map));
    }
}
