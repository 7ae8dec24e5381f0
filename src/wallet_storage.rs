//! Wallet storage
//!
//! Persists the most recently generated keypair. [`FileWalletStore`] writes
//! the whole file to a uniquely named sibling temp file and renames it over
//! the target, so a reader never sees a half-written wallet.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use uuid::Uuid;
use zeroize::Zeroizing;

use crate::blockchain::models::StoredWallet;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("wallet file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode wallet file: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StorageError {
    fn io(path: &Path, source: io::Error) -> Self {
        StorageError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Destination for generated keypairs
pub trait WalletStore: Send + Sync {
    /// Replace the stored wallet with `wallet`
    fn save(&self, wallet: &StoredWallet) -> Result<(), StorageError>;

    /// Read the stored wallet back, `None` if nothing was saved yet
    fn load(&self) -> Result<Option<StoredWallet>, StorageError>;

    /// Human readable location, for logs
    fn location(&self) -> String;
}

/// Stores the wallet as a single JSON file
#[derive(Debug, Clone)]
pub struct FileWalletStore {
    path: PathBuf,
}

impl FileWalletStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "wallet".to_string());
        self.path
            .with_file_name(format!(".{}.{}.tmp", file_name, Uuid::new_v4()))
    }

    fn write_atomically(&self, contents: &[u8]) -> Result<(), StorageError> {
        // Create parent directories if they don't exist
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
            }
        }

        let temp_path = self.temp_path();
        let result = (|| {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(contents)?;
            file.sync_all()?;
            fs::rename(&temp_path, &self.path)
        })();

        if let Err(e) = result {
            let _ = fs::remove_file(&temp_path);
            return Err(StorageError::io(&self.path, e));
        }
        Ok(())
    }
}

impl WalletStore for FileWalletStore {
    fn save(&self, wallet: &StoredWallet) -> Result<(), StorageError> {
        let contents = Zeroizing::new(serde_json::to_vec(wallet)?);
        self.write_atomically(&contents)
    }

    fn load(&self) -> Result<Option<StoredWallet>, StorageError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io(&self.path, e)),
        }
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
