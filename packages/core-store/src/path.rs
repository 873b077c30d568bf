//! Dot-separated paths into a store tree.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Separator between path segments.
pub const SEPARATOR: char = '.';

/// A tokenized dot path.
///
/// A path always has at least one segment. Segments are kept verbatim, so
/// `""` is a single empty segment and `"a..b"` has an empty middle segment.
/// There is no escaping: a segment can never contain the separator.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    /// Tokenize a path string.
    ///
    /// ```rust
    /// use dotstore_core::Path;
    ///
    /// let path = Path::parse("database.primary.host");
    /// assert_eq!(path.len(), 3);
    ///
    /// assert_eq!(Path::parse("").len(), 1);
    /// ```
    pub fn parse(s: &str) -> Self {
        Path {
            segments: s.split(SEPARATOR).map(str::to_string).collect(),
        }
    }

    /// Number of segments. Never zero.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false: a path has at least one segment.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }

    /// Split into the intermediate segments and the terminal segment.
    pub fn parent_and_last(&self) -> (&[String], &str) {
        match self.segments.split_last() {
            Some((last, parents)) => (parents, last.as_str()),
            None => (&[], ""),
        }
    }

    /// The path made of the first `n` segments, rendered as a string.
    ///
    /// Used to name the exact point of failure in diagnostics.
    pub fn prefix_string(&self, n: usize) -> String {
        self.segments[..n.min(self.segments.len())].join(".")
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl FromStr for Path {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Path::parse(s))
    }
}

impl From<&str> for Path {
    fn from(s: &str) -> Self {
        Path::parse(s)
    }
}

impl From<String> for Path {
    fn from(s: String) -> Self {
        Path::parse(&s)
    }
}

impl From<&Path> for Path {
    fn from(p: &Path) -> Self {
        p.clone()
    }
}

impl Serialize for Path {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Path {
    fn deserialize<D>(deserializer: D) -> Result<Path, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = Deserialize::deserialize(deserializer)?;
        Ok(Path::parse(&s))
    }
}

/// Build a [`Path`] from a literal.
#[macro_export]
macro_rules! path {
    ($s:expr) => {
        $crate::Path::parse($s)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basic_paths() {
        assert_eq!(Path::parse("foo").len(), 1);
        assert_eq!(Path::parse("foo.bar").len(), 2);
        assert_eq!(Path::parse("foo.bar.baz").len(), 3);
    }

    #[test]
    fn empty_string_is_one_empty_segment() {
        let path = Path::parse("");
        assert_eq!(path.len(), 1);
        assert_eq!(path.iter().collect::<Vec<_>>(), vec![""]);
        assert!(!path.is_empty());
    }

    #[test]
    fn empty_segments_are_kept() {
        let path = Path::parse("a..b.");
        assert_eq!(path.iter().collect::<Vec<_>>(), vec!["a", "", "b", ""]);
    }

    #[test]
    fn parent_and_last() {
        let path = path!("a.b.c");
        let (parents, last) = path.parent_and_last();
        assert_eq!(parents, &["a".to_string(), "b".to_string()]);
        assert_eq!(last, "c");

        let single = path!("solo");
        let (parents, last) = single.parent_and_last();
        assert!(parents.is_empty());
        assert_eq!(last, "solo");
    }

    #[test]
    fn display_round_trips() {
        for s in ["a", "a.b.c", "", "x..y"] {
            assert_eq!(Path::parse(s).to_string(), s);
        }
    }

    #[test]
    fn prefix_string_clamps() {
        let path = path!("a.b.c");
        assert_eq!(path.prefix_string(2), "a.b");
        assert_eq!(path.prefix_string(10), "a.b.c");
    }

    #[test]
    fn serde_uses_string_form() {
        let path = path!("server.port");
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, "\"server.port\"");
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
    }
}
