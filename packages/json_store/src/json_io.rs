//! JSON importer and exporter.
//!
//! These bridge a [`PathStore`](dotstore_core::PathStore) to JSON text. They
//! read from and write to anything implementing `io::Read` / `io::Write`;
//! choosing where the bytes live is left to the caller.

use std::io::{self, Write};

use dotstore_core::{Error, Exporter, Importer, Map};

use crate::convert::{json_to_value, kind, map_to_json};

/// Where a [`JsonImporter`] gets its document from.
enum Source {
    Value(serde_json::Value),
    Text(String),
    Reader(Box<dyn io::Read>),
}

/// Produces a tree from a JSON document whose root is an object.
pub struct JsonImporter {
    source: Option<Source>,
}

impl JsonImporter {
    pub fn from_value(value: serde_json::Value) -> Self {
        Self {
            source: Some(Source::Value(value)),
        }
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            source: Some(Source::Text(text.into())),
        }
    }

    pub fn from_reader(reader: impl io::Read + 'static) -> Self {
        Self {
            source: Some(Source::Reader(Box::new(reader))),
        }
    }
}

impl Importer for JsonImporter {
    /// Parse the document. A reader-backed importer can only be consumed once.
    fn import(&mut self) -> Result<Map, Error> {
        let json = match self.source.take() {
            Some(Source::Value(value)) => {
                self.source = Some(Source::Value(value.clone()));
                value
            }
            Some(Source::Text(text)) => {
                let parsed: serde_json::Result<serde_json::Value> = serde_json::from_str(&text);
                self.source = Some(Source::Text(text));
                parsed.map_err(|e| Error::import(format!("invalid JSON: {}", e)))?
            }
            Some(Source::Reader(reader)) => serde_json::from_reader::<_, serde_json::Value>(reader)
                .map_err(|e| Error::import(format!("invalid JSON: {}", e)))?,
            None => return Err(Error::import("JSON reader already consumed")),
        };

        log::debug!("parsed JSON document for import");
        match json_to_value(json) {
            dotstore_core::Value::Map(map) => Ok(map),
            other => Err(Error::import(format!(
                "JSON root must be an object, got {}",
                kind(&other)
            ))),
        }
    }
}

/// Consumes a tree as JSON.
///
/// Without a writer the exporter only keeps the last exported document,
/// available through [`document`](Self::document). With a writer the
/// document is also encoded to it on every export.
pub struct JsonExporter {
    writer: Option<Box<dyn io::Write>>,
    pretty: bool,
    document: Option<serde_json::Value>,
}

impl JsonExporter {
    pub fn new() -> Self {
        Self {
            writer: None,
            pretty: false,
            document: None,
        }
    }

    pub fn to_writer(writer: impl io::Write + 'static) -> Self {
        Self {
            writer: Some(Box::new(writer)),
            ..Self::new()
        }
    }

    #[must_use]
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// The last exported document.
    pub fn document(&self) -> Option<&serde_json::Value> {
        self.document.as_ref()
    }

    pub fn into_document(self) -> Option<serde_json::Value> {
        self.document
    }

    /// The last exported document rendered as text.
    pub fn to_text(&self) -> Option<String> {
        let document = self.document.as_ref()?;
        let rendered = if self.pretty {
            serde_json::to_string_pretty(document)
        } else {
            serde_json::to_string(document)
        };
        rendered.ok()
    }
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for JsonExporter {
    fn export(&mut self, tree: &Map) -> Result<(), Error> {
        let document = map_to_json(tree.clone());

        if let Some(writer) = self.writer.as_mut() {
            log::debug!("writing JSON document ({} top-level keys)", tree.len());
            let written = if self.pretty {
                serde_json::to_writer_pretty(&mut *writer, &document)
            } else {
                serde_json::to_writer(&mut *writer, &document)
            };
            written.map_err(|e| Error::export(e.to_string()))?;
            writer.flush().map_err(|e| Error::export(e.to_string()))?;
        }

        self.document = Some(document);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotstore_core::Value;
    use serde_json::json;

    #[test]
    fn import_from_text() {
        let mut importer = JsonImporter::from_text(r#"{"b": 1, "a": {"c": "x"}}"#);
        let map = importer.import().unwrap();
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(map["b"], Value::from(1));

        // Text and value sources can be imported again.
        assert_eq!(importer.import().unwrap(), map);
    }

    #[test]
    fn import_rejects_non_object_root() {
        let mut importer = JsonImporter::from_value(json!([1, 2, 3]));
        let err = importer.import().unwrap_err();
        assert!(matches!(err, Error::Import { .. }));
        assert!(err.to_string().contains("an array"));
    }

    #[test]
    fn import_rejects_malformed_text() {
        let mut importer = JsonImporter::from_text("{not json");
        assert!(importer
            .import()
            .unwrap_err()
            .to_string()
            .contains("invalid JSON"));
    }

    #[test]
    fn reader_source_is_consumed_once() {
        let mut importer = JsonImporter::from_reader(io::Cursor::new(br#"{"k": true}"#.to_vec()));
        assert_eq!(importer.import().unwrap()["k"], Value::from(true));
        assert!(importer.import().is_err());
    }

    #[test]
    fn export_keeps_document() {
        let mut tree = Map::new();
        tree.insert("z".to_string(), Value::from(1));
        tree.insert("a".to_string(), Value::from("two"));

        let mut exporter = JsonExporter::new();
        exporter.export(&tree).unwrap();
        assert_eq!(exporter.document(), Some(&json!({"z": 1, "a": "two"})));
        assert_eq!(exporter.to_text().unwrap(), r#"{"z":1,"a":"two"}"#);
    }
}
