//! Email credential persistence.

use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::config::Config;
use crate::error_handling::StoreError;
use crate::models::EmailCredentials;

use super::write::write_atomic;

/// Reads and writes the SMTP credentials file.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// Creates a store backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store backed by the configured `email.json`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.credentials_path())
    }

    /// Backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads stored credentials; `None` when absent or malformed.
    pub fn load(&self) -> Option<EmailCredentials> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                debug!("No credentials at {} ({e})", self.path.display());
                return None;
            }
        };
        serde_json::from_str(&contents)
            .map_err(|e| warn!("Ignoring malformed credentials {}: {e}", self.path.display()))
            .ok()
    }

    /// Overwrites stored credentials.
    pub fn save(&self, credentials: &EmailCredentials) -> Result<(), StoreError> {
        let json = serde_json::to_vec(credentials)?;
        write_atomic(&self.path, &json)
    }
}
