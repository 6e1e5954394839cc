//! Network loading and the active-network source
//!
//! The service is the single source of truth for the network being edited.
//! Every activation (including clearing it) is emitted on the network stream.

use super::stream::{StreamSource, Subject};
use crate::error::ShellError;
use crate::model::Network;
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

/// Load, parse and validate a network document (`.json`, `.yaml`, `.yml`)
pub fn load_network<P: AsRef<Path>>(path: P) -> Result<Network, ShellError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let contents = fs::read_to_string(path).map_err(|source| ShellError::NetworkIo {
        path: path.to_path_buf(),
        source,
    })?;

    let network: Network = match extension.as_str() {
        "json" => serde_json::from_str(&contents).map_err(|e| ShellError::NetworkParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?,
        "yaml" | "yml" => serde_yaml::from_str(&contents).map_err(|e| ShellError::NetworkParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?,
        other => return Err(ShellError::UnsupportedFormat(other.to_string())),
    };

    network.validate().map_err(ShellError::InvalidNetwork)?;
    Ok(network)
}

/// Holds the active network and broadcasts changes to it
#[derive(Default)]
pub struct NetworkService {
    active: Option<Network>,
    source_path: Option<PathBuf>,
    loaded_at: Option<DateTime<Local>>,
    subject: Subject<Option<Network>>,
}

impl NetworkService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self) -> StreamSource<Option<Network>> {
        self.subject.subscribe()
    }

    pub fn active(&self) -> Option<&Network> {
        self.active.as_ref()
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub fn loaded_at(&self) -> Option<DateTime<Local>> {
        self.loaded_at
    }

    /// Load a network file and make it active. On failure the current
    /// network stays active.
    pub fn open<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ShellError> {
        let path = path.as_ref();
        let network = load_network(path)?;
        log::info!(
            "loaded network '{}' from {} ({} nodes, {} edges)",
            network.name(),
            path.display(),
            network.nodes.len(),
            network.edges.len()
        );
        self.source_path = Some(path.to_path_buf());
        self.set_active(Some(network));
        Ok(())
    }

    /// Re-read the network file the active network came from
    pub fn reload(&mut self) -> Result<(), ShellError> {
        let path = self.source_path.clone().ok_or(ShellError::NothingToReload)?;
        self.open(path)
    }

    /// Replace the active network and notify subscribers
    pub fn set_active(&mut self, network: Option<Network>) {
        self.loaded_at = network.as_ref().map(|_| Local::now());
        self.active = network;
        self.subject.next(self.active.clone());
    }

    /// Mutate the active network in place. Subscribers are notified only when
    /// `edit` reports a change.
    pub fn update<F>(&mut self, edit: F) -> bool
    where
        F: FnOnce(&mut Network) -> bool,
    {
        let Some(network) = self.active.as_mut() else {
            return false;
        };
        if !edit(network) {
            return false;
        }
        self.subject.next(self.active.clone());
        true
    }
}
