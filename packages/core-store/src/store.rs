//! PathStore: a mutable tree addressed by dot paths.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    DescentConflict, Error, Exporter, Importer, Map, Path, Policy, ProtectTrigger, Result,
    StoreOptions, Value,
};

/// A tree of insertion-ordered branches with scalar leaves.
///
/// The store owns its tree outright. Construction and `import_*` move a tree
/// in, `export` lends it out, and nothing else can hold a reference into it
/// while it is being mutated.
///
/// # Example
///
/// ```rust
/// use dotstore_core::{PathStore, Policy};
///
/// let mut store = PathStore::default();
/// store
///     .set("database.primary.host", "db1.internal")?
///     .set("database.primary.port", 5432)?;
///
/// assert_eq!(store.get("database.primary.port")?.as_i64(), Some(5432));
/// assert!(store.exists("database.primary"));
///
/// // An existing key is left alone under the silent policy.
/// store.set_with_policy("database.primary.port", 6543, Policy::ProtectSilent)?;
/// assert_eq!(store.get("database.primary.port")?.as_i64(), Some(5432));
/// # Ok::<(), dotstore_core::Error>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathStore {
    tree: Map,
    options: StoreOptions,
}

impl PathStore {
    /// Create a store that takes ownership of `tree`.
    ///
    /// The tree is not validated: scalar-leaf checking only applies to `set`.
    pub fn new(tree: Map) -> Self {
        Self::with_options(tree, StoreOptions::default())
    }

    /// Create a store that takes ownership of `tree` and uses `options`.
    pub fn with_options(tree: Map, options: StoreOptions) -> Self {
        Self { tree, options }
    }

    /// Create a store from whatever `importer` produces.
    pub fn from_importer<I: Importer + ?Sized>(importer: &mut I) -> Result<Self> {
        Ok(Self::new(importer.import()?))
    }

    /// The behaviour switches in effect.
    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// Replace the behaviour switches. Applies to subsequent calls only.
    pub fn set_options(&mut self, options: StoreOptions) -> &mut Self {
        self.options = options;
        self
    }

    /// Replace the whole tree.
    pub fn import_map(&mut self, tree: Map) -> &mut Self {
        log::debug!("importing tree with {} top-level keys", tree.len());
        self.tree = tree;
        self
    }

    /// Replace the whole tree with whatever `importer` produces.
    ///
    /// On failure the current tree is kept.
    pub fn import_from<I: Importer + ?Sized>(&mut self, importer: &mut I) -> Result<&mut Self> {
        let tree = importer.import()?;
        Ok(self.import_map(tree))
    }

    /// Hand the current tree to `exporter`.
    pub fn export<E: Exporter + ?Sized>(&mut self, exporter: &mut E) -> Result<&mut Self> {
        log::debug!("exporting tree with {} top-level keys", self.tree.len());
        exporter.export(&self.tree)?;
        Ok(self)
    }

    /// Write `value` at `path`, overriding anything already there.
    pub fn set(&mut self, path: impl Into<Path>, value: impl Into<Value>) -> Result<&mut Self> {
        self.set_with_policy(path, value, Policy::Override)
    }

    /// Write the tree produced by `importer` at `path`.
    pub fn set_from<I: Importer + ?Sized>(
        &mut self,
        path: impl Into<Path>,
        importer: &mut I,
        policy: Policy,
    ) -> Result<&mut Self> {
        let value = Value::Map(importer.import()?);
        self.set_with_policy(path, value, policy)
    }

    /// Write `value` at `path` under the given collision policy.
    ///
    /// Missing intermediate segments are created as empty branches. All
    /// checks run before the tree is touched, so a failed call leaves the
    /// store exactly as it was.
    pub fn set_with_policy(
        &mut self,
        path: impl Into<Path>,
        value: impl Into<Value>,
        policy: Policy,
    ) -> Result<&mut Self> {
        let path = path.into();
        let value = value.into();

        if let Some(location) = value.find_non_scalar_leaf() {
            return Err(Error::InvalidProperty {
                path: path.to_string(),
                message: format!("non-scalar leaf at '{}'", location),
            });
        }

        if self.options.descent_conflict == DescentConflict::Fail {
            self.check_descent(&path)?;
        }

        if policy != Policy::Override && self.protects(&path) {
            if policy == Policy::ProtectException {
                return Err(Error::PropertyOverride {
                    path: path.to_string(),
                });
            }
            log::trace!("set '{}' skipped: protected", path);
            return Ok(self);
        }

        log::trace!("set '{}'", path);
        let (parents, last) = path.parent_and_last();
        let mut cursor = &mut self.tree;
        for (depth, segment) in parents.iter().enumerate() {
            let slot = cursor.entry(segment.clone()).or_insert_with(Value::map);
            if !slot.is_map() {
                log::debug!(
                    "replacing leaf at '{}' with a branch while setting '{}'",
                    path.prefix_string(depth + 1),
                    path
                );
            }
            cursor = ensure_branch(slot);
        }
        cursor.insert(last.to_string(), value);
        Ok(self)
    }

    /// Read the value at `path`.
    ///
    /// Fails with `PropertyNotExist` when any segment is absent or an
    /// intermediate segment is not a branch.
    pub fn get(&self, path: impl Into<Path>) -> Result<&Value> {
        let path = path.into();
        self.lookup(&path).ok_or_else(|| Error::PropertyNotExist {
            path: path.to_string(),
        })
    }

    /// Read the value at `path`, or `default` when it does not exist.
    pub fn get_or(&self, path: impl Into<Path>, default: impl Into<Value>) -> Value {
        let path = path.into();
        match self.lookup(&path) {
            Some(value) => value.clone(),
            None => default.into(),
        }
    }

    /// Remove the entry at `path`.
    ///
    /// Removing an absent terminal key is a no-op; an absent intermediate
    /// segment fails with `PropertyNotExist`.
    pub fn delete(&mut self, path: impl Into<Path>) -> Result<&mut Self> {
        let path = path.into();
        let (parents, last) = path.parent_and_last();
        let mut cursor = &mut self.tree;
        for segment in parents {
            cursor = cursor
                .get_mut(segment.as_str())
                .and_then(Value::as_map_mut)
                .ok_or_else(|| Error::PropertyNotExist {
                    path: path.to_string(),
                })?;
        }
        if cursor.shift_remove(last).is_some() {
            log::trace!("deleted '{}'", path);
        }
        Ok(self)
    }

    /// True when the terminal key of `path` is present, even if its value is null.
    pub fn exists(&self, path: impl Into<Path>) -> bool {
        self.lookup(&path.into()).is_some()
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// True when the tree has no top-level keys.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Top-level entries in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.tree.iter()
    }

    /// The full tree.
    pub fn tree(&self) -> &Map {
        &self.tree
    }

    /// Consume the store and return its tree.
    pub fn into_tree(self) -> Map {
        self.tree
    }

    /// Bracket-style read; same as [`get`](Self::get).
    pub fn read(&self, key: &str) -> Result<&Value> {
        self.get(key)
    }

    /// Bracket-style write; same as [`set`](Self::set) with the default policy.
    pub fn write(&mut self, key: &str, value: impl Into<Value>) -> Result<&mut Self> {
        self.set(key, value)
    }

    /// Bracket-style delete; same as [`delete`](Self::delete).
    pub fn remove(&mut self, key: &str) -> Result<&mut Self> {
        self.delete(key)
    }

    /// Shallow existence: is `key` a top-level key?
    ///
    /// The key is not tokenized, so `contains_key("a.b")` looks for a
    /// top-level key literally named `a.b`. Use [`exists`](Self::exists)
    /// for dotted paths.
    pub fn contains_key(&self, key: &str) -> bool {
        self.tree.contains_key(key)
    }

    fn lookup(&self, path: &Path) -> Option<&Value> {
        let (parents, last) = path.parent_and_last();
        let mut cursor = &self.tree;
        for segment in parents {
            cursor = cursor.get(segment.as_str())?.as_map()?;
        }
        cursor.get(last)
    }

    /// Whether a protecting policy applies to `path` right now.
    fn protects(&self, path: &Path) -> bool {
        match self.options.protect_trigger {
            ProtectTrigger::Always => true,
            ProtectTrigger::WhenPresent => self.lookup(path).is_some(),
        }
    }

    fn check_descent(&self, path: &Path) -> Result<()> {
        let (parents, _) = path.parent_and_last();
        let mut cursor = &self.tree;
        for (depth, segment) in parents.iter().enumerate() {
            match cursor.get(segment.as_str()) {
                None => return Ok(()),
                Some(Value::Map(map)) => cursor = map,
                Some(_) => {
                    return Err(Error::PathConflict {
                        path: path.to_string(),
                        segment: path.prefix_string(depth + 1),
                    })
                }
            }
        }
        Ok(())
    }
}

/// Turn `slot` into a branch if it is a leaf and return the branch.
fn ensure_branch(slot: &mut Value) -> &mut Map {
    if !slot.is_map() {
        *slot = Value::map();
    }
    match slot {
        Value::Map(map) => map,
        _ => unreachable!("slot was just replaced with a branch"),
    }
}

impl From<Map> for PathStore {
    fn from(tree: Map) -> Self {
        Self::new(tree)
    }
}

impl<'a> IntoIterator for &'a PathStore {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.tree.iter()
    }
}

impl IntoIterator for PathStore {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.tree.into_iter()
    }
}

impl Serialize for PathStore {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.tree.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PathStore {
    fn deserialize<D>(deserializer: D) -> std::result::Result<PathStore, D::Error>
    where
        D: Deserializer<'de>,
    {
        Map::deserialize(deserializer).map(PathStore::new)
    }
}
