//! Error taxonomy for the editor shell
//!
//! Typed errors live here; the binary and the App propagate them through
//! `anyhow` the same way the rest of the application does.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the shell and its collaborators
#[derive(Debug, Error)]
pub enum ShellError {
    /// A selection or network stream errored or completed unexpectedly
    #[error("{stream} stream stopped: {reason}")]
    UpstreamStreamFailure { stream: &'static str, reason: String },

    /// A selection event arrived before the properties panel was bound
    #[error("properties panel is not bound; selection event cannot be applied")]
    MissingPanelView,

    #[error("failed to read network file {path}: {source}")]
    NetworkIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse network file {path}: {reason}")]
    NetworkParse { path: PathBuf, reason: String },

    #[error("invalid network: {0}")]
    InvalidNetwork(String),

    #[error("unsupported network format '{0}' (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),

    #[error("no network file to reload")]
    NothingToReload,
}
