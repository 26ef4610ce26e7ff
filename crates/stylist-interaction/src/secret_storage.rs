//! Secret configuration file storage.
//!
//! Provides loading of secret configuration from ~/.config/stylist/secret.json.

use std::fs;
use std::path::{Path, PathBuf};
use stylist_core::config::SecretConfig;
use thiserror::Error;

/// Errors that can occur during secret storage operations.
#[derive(Debug, Error)]
pub enum SecretStorageError {
    /// Configuration file not found.
    #[error("Configuration file not found at: {}", .0.display())]
    NotFound(PathBuf),
    /// File I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    ParseError(#[from] serde_json::Error),
    /// Config directory not found.
    #[error("Could not determine home directory")]
    ConfigDirNotFound,
}

/// Storage for the secret configuration file (secret.json).
///
/// Read-only: the program never writes credentials to disk. The file should
/// have restrictive permissions (e.g. 600).
pub struct SecretStorage {
    path: PathBuf,
}

impl SecretStorage {
    /// Creates a new SecretStorage with the default path (~/.config/stylist/secret.json).
    pub fn new() -> Result<Self, SecretStorageError> {
        let path = Self::default_path()?;
        Ok(Self { path })
    }

    /// Creates a new SecretStorage with a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the secret configuration from the JSON file.
    ///
    /// # Returns
    ///
    /// - `Ok(SecretConfig)`: Successfully loaded and parsed
    /// - `Err(SecretStorageError::NotFound)`: File doesn't exist
    /// - `Err(SecretStorageError::IoError)`: Failed to read file
    /// - `Err(SecretStorageError::ParseError)`: Invalid JSON format
    pub fn load(&self) -> Result<SecretConfig, SecretStorageError> {
        if !self.path.exists() {
            return Err(SecretStorageError::NotFound(self.path.clone()));
        }

        let content = fs::read_to_string(&self.path)?;
        let config = serde_json::from_str(&content)?;

        Ok(config)
    }

    /// Returns the path to the secret file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn default_path() -> Result<PathBuf, SecretStorageError> {
        let home = dirs::home_dir().ok_or(SecretStorageError::ConfigDirNotFound)?;
        Ok(home.join(".config").join("stylist").join("secret.json"))
    }
}
