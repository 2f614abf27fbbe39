// Flat key-value slot storage: one file per key, full-document replace

use eyre::{Context, Result, eyre};
use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Flat key-value store where each key addresses one document slot.
///
/// A slot is a single file under the base directory; a write replaces the
/// whole document. There is no partial update and no versioning.
pub struct SlotStorage {
    base_dir: PathBuf,
}

impl SlotStorage {
    /// Open a store rooted at the given directory, creating it if needed.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let base_dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).context("Failed to create storage directory")?;
        Ok(Self { base_dir })
    }

    /// Per-user default location for this application's slots.
    pub fn default_dir() -> Result<PathBuf> {
        let base = dirs::data_dir().ok_or_else(|| eyre!("No user data directory available"))?;
        Ok(base.join("taskpad"))
    }

    /// Base directory of this store
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Read the full document stored under `key`.
    ///
    /// Returns `None` if the slot has never been written.
    pub fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key)?;
        if !path.exists() {
            return Ok(None);
        }

        let document = fs::read_to_string(&path).context("Failed to read slot file")?;
        Ok(Some(document))
    }

    /// Replace the document stored under `key` in full.
    ///
    /// Takes an exclusive lock on the slot file, truncates it, and flushes
    /// the new document to disk before returning.
    pub fn write(&self, key: &str, document: &str) -> Result<()> {
        let path = self.slot_path(key)?;

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .open(&path)
            .context("Failed to open slot file for writing")?;

        // Acquire exclusive lock before truncating
        file.lock_exclusive().context("Failed to acquire slot file lock")?;
        file.set_len(0).context("Failed to truncate slot file")?;

        use std::io::Write;
        file.write_all(document.as_bytes()).context("Failed to write slot file")?;
        file.sync_all()?;

        debug!(key, bytes = document.len(), "Replaced slot document");

        // Lock is automatically released when file is dropped
        Ok(())
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf> {
        Self::validate_key(key)?;
        Ok(self.base_dir.join(format!("{}.json", key)))
    }

    fn validate_key(key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(eyre!("Slot key cannot be empty"));
        }
        if key.len() > 64 {
            return Err(eyre!("Slot key too long: {} (max 64 chars)", key));
        }
        if !key.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '-') {
            return Err(eyre!("Invalid slot key: {} (must be alphanumeric with _/-)", key));
        }
        Ok(())
    }
}
