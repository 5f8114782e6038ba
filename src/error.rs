//! Error types for the generator.
//!
//! Every failure is fatal to the run. Variants carry the path that caused
//! them so the message printed by the binary is enough to locate the problem.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while scanning, loading, rendering or writing an icon set.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to scan {}: {source}", .dir.display())]
    Scan {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot derive an icon name from {}", .path.display())]
    EmptyName { path: PathBuf },

    #[error("malformed icon {}: {source}", .path.display())]
    Markup {
        path: PathBuf,
        #[source]
        source: MarkupError,
    },

    #[error("`{name}` is not a valid identifier")]
    InvalidIdentifier { name: String },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

/// Reasons the inner markup of an icon could not be located.
#[derive(Error, Debug)]
pub enum MarkupError {
    #[error("not well-formed XML: {0}")]
    Parse(#[from] roxmltree::Error),

    #[error("expected an <svg> root element, found <{0}>")]
    UnexpectedRoot(String),

    #[error("no <title> element")]
    MissingTitle,

    #[error("no content inside the root element")]
    Empty,
}
