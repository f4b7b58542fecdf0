//! Host list persistence.
//!
//! The list is loaded fully, mutated in memory and written back in full.
//! There is no locking across processes.

use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::config::Config;
use crate::error_handling::StoreError;
use crate::models::Host;

use super::write::write_atomic;

/// Reads and writes the ordered host list as a JSON array.
#[derive(Debug, Clone)]
pub struct HostStore {
    path: PathBuf,
}

impl HostStore {
    /// Creates a store backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store backed by the configured `hosts.json`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.hosts_path())
    }

    /// Backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the host list.
    ///
    /// A missing, unreadable or malformed file yields an empty list.
    pub fn load(&self) -> Vec<Host> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                debug!("No host list at {} ({e})", self.path.display());
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<Host>>(&contents) {
            Ok(hosts) => hosts,
            Err(e) => {
                warn!(
                    "Ignoring malformed host list {}: {e}",
                    self.path.display()
                );
                Vec::new()
            }
        }
    }

    /// Overwrites the host list.
    pub fn save(&self, hosts: &[Host]) -> Result<(), StoreError> {
        let json = serde_json::to_vec(hosts)?;
        write_atomic(&self.path, &json)
    }

    /// Appends a newly created host for `endpoint` and saves.
    ///
    /// Duplicates are not rejected.
    pub fn add(&self, endpoint: &str) -> Result<Host, StoreError> {
        let mut hosts = self.load();
        let host = Host::new(endpoint);
        hosts.push(host.clone());
        self.save(&hosts)?;
        info!("Added {}", host.endpoint);
        Ok(host)
    }

    /// Removes the first host whose endpoint equals `endpoint` exactly and saves.
    ///
    /// The list is saved even when nothing matched. Returns whether a host was
    /// removed.
    pub fn remove(&self, endpoint: &str) -> Result<bool, StoreError> {
        let mut hosts = self.load();
        let removed = match hosts.iter().position(|h| h.endpoint == endpoint) {
            Some(index) => {
                hosts.remove(index);
                true
            }
            None => false,
        };
        self.save(&hosts)?;
        if removed {
            info!("Removed {endpoint}");
        } else {
            debug!("{endpoint} is not monitored; nothing removed");
        }
        Ok(removed)
    }
}
