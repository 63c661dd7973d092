//! Error taxonomy shared by loading, resolution and ambient access.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::format::FormatError;

/// Errors surfaced by locale loading and lookups.
///
/// Missing keys are never reported here: lookups degrade to an empty string.
/// Only structurally invalid requests and load failures become errors.
#[derive(Error, Debug)]
pub enum I18nError {
    /// The locale source file could not be read.
    #[error("The locale file was not found: {}", path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The locale source could not be deserialized into a message tree.
    #[error("Failed to parse locale file {}: {message}", path.display())]
    MalformedSource { path: PathBuf, message: String },

    /// Ambient access was attempted before any locale was created.
    #[error("must create an instance at least once")]
    NoInstanceYet,

    /// A group was requested on a path that resolves to a text leaf.
    #[error("'{path}' is a message, not a group")]
    NotAGroup { path: String },

    /// The path tries to descend below a text leaf.
    #[error("cannot resolve '{path}': '{segment}' is a message, not a group")]
    LeafDescent { path: String, segment: String },

    /// Formatting was requested on a group node.
    #[error("'{path}' is a group and cannot be formatted")]
    FormatOnNonLeaf { path: String },

    /// The arguments do not fit the template's placeholders.
    #[error("Failed to format '{path}': {source}")]
    FormatMismatch {
        path: String,
        #[source]
        source: FormatError,
    },

    /// The process-wide cache was initialized twice.
    #[error("the global locale cache is already initialized")]
    AlreadyInitialized,

    /// Invalid settings.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Crate result alias.
pub type Result<T, E = I18nError> = std::result::Result<T, E>;
