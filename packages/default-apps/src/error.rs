//! Error types for the default applications loader.
//!
//! The loader itself never hands these to its caller: every failure while
//! reading a directory or document degrades into "fewer entries". They are
//! used internally to describe why something was skipped, and by the CLI.

use thiserror::Error;

use crate::category::Category;
use crate::items::ItemKind;

/// Main error type for the default applications library.
#[derive(Debug, Error)]
pub enum DefaultAppsError {
    /// IO error (unreadable directory or document).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// The XML declaration names an encoding that is not supported.
    #[error("Unsupported document encoding: {0}")]
    UnknownEncoding(String),

    /// The document bytes are not valid in the detected encoding.
    #[error("Document is not valid {encoding}")]
    Decode { encoding: &'static str },

    /// A record was offered to a collection that holds another kind.
    #[error("Cannot store a {kind} item in {category}")]
    KindMismatch { category: Category, kind: ItemKind },

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for default applications operations.
pub type Result<T> = std::result::Result<T, DefaultAppsError>;
