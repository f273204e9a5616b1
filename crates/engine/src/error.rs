//! Error type shared by the engine's fallible operations.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse YAML site config {}: {source}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("failed to parse JSON site config {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// A page template lacks a `<head>`/`<body>` section (or its closing tag).
    #[error("page template is missing the '{tag}' line")]
    MissingSection { tag: String },
    /// A part file's generated page would replace the master template.
    #[error("{} would be written over the master page {}", .part.display(), .master.display())]
    OverwritesMaster { part: PathBuf, master: PathBuf },
    #[error("unknown placeholder '${{{{ {expression} }}}}'")]
    UnknownPlaceholder { expression: String },
}

impl SiteError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
