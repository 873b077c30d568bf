//! Error types for store operations.
//!
//! Every variant names the path that was being addressed so a caller can
//! report it without extra bookkeeping. Nothing here is retried internally.

/// Errors raised by [`PathStore`](crate::PathStore) and its collaborators.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A value being written contains a non-scalar leaf.
    #[error("invalid property '{path}': {message}")]
    InvalidProperty { path: String, message: String },

    /// A read or delete addressed a segment that is absent.
    #[error("property '{path}' does not exist")]
    PropertyNotExist { path: String },

    /// A write under `Policy::ProtectException` was rejected.
    #[error("property '{path}' is protected against override")]
    PropertyOverride { path: String },

    /// A write had to descend through a leaf and the store is configured to refuse.
    #[error("cannot descend into '{segment}' while setting '{path}': not a branch")]
    PathConflict { path: String, segment: String },

    /// An importer failed to produce a tree.
    #[error("import failed: {message}")]
    Import { message: String },

    /// An exporter failed to consume a tree.
    #[error("export failed: {message}")]
    Export { message: String },

    /// A stored value could not be decoded into the requested type.
    #[error("decode error: {message}")]
    Decode { message: String },

    /// A typed value could not be encoded into a tree value.
    #[error("encode error: {message}")]
    Encode { message: String },
}

impl Error {
    pub fn import(message: impl Into<String>) -> Self {
        Error::Import {
            message: message.into(),
        }
    }

    pub fn export(message: impl Into<String>) -> Self {
        Error::Export {
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Error::Decode {
            message: message.into(),
        }
    }

    pub fn encode(message: impl Into<String>) -> Self {
        Error::Encode {
            message: message.into(),
        }
    }

    /// The path this error refers to, if any.
    pub fn path(&self) -> Option<&str> {
        match self {
            Error::InvalidProperty { path, .. }
            | Error::PropertyNotExist { path }
            | Error::PropertyOverride { path }
            | Error::PathConflict { path, .. } => Some(path),
            Error::Import { .. }
            | Error::Export { .. }
            | Error::Decode { .. }
            | Error::Encode { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
