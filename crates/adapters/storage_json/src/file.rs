//! Backing-file access and adapter configuration.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use contactbook_domain::contact_list::ContactList;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::StorageError;

/// Configuration for the JSON storage adapter.
pub struct Config {
    /// Location of the contacts document (e.g. `database.json`).
    pub path: PathBuf,
    /// Write the demo contacts when the file does not exist yet.
    pub seed_demo: bool,
}

impl Config {
    /// Build a [`JsonFile`] from this configuration.
    ///
    /// Creates the parent directory if missing and, when `seed_demo` is set,
    /// writes the demo contacts to a file that does not exist yet. An
    /// existing file is never touched.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the directory or seed file cannot be written.
    pub async fn build(self) -> Result<JsonFile, StorageError> {
        let file = JsonFile::new(self.path);

        if let Some(parent) = file.path().parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| file.io_error(source))?;
        }

        if self.seed_demo {
            let exists = tokio::fs::try_exists(file.path())
                .await
                .map_err(|source| file.io_error(source))?;
            if !exists {
                let demo = crate::seed::demo_contacts()?;
                file.store(&demo).await?;
                tracing::info!(path = %file.path().display(), contacts = demo.len(), "seeded demo contacts");
            }
        }

        Ok(file)
    }
}

/// Handle on the JSON document holding every contact.
///
/// Cloning is cheap; clones point at the same file.
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: Arc<Path>,
}

impl JsonFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path: PathBuf = path.into();
        Self {
            path: Arc::from(path),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole document. A missing file reads as an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the file exists but cannot be read,
    /// or [`StorageError::Json`] if it is not a valid contacts document.
    pub async fn load(&self) -> Result<ContactList, StorageError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "contacts file missing, starting empty");
                return Ok(ContactList::default());
            }
            Err(source) => return Err(self.io_error(source)),
        };

        let list: ContactList =
            serde_json::from_slice(&bytes).map_err(|source| StorageError::Json {
                path: self.path.to_path_buf(),
                source,
            })?;
        tracing::debug!(path = %self.path.display(), contacts = list.len(), "contacts loaded");
        Ok(list)
    }

    /// Overwrite the whole document, pretty-printed with four-space indentation.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the file cannot be written.
    pub async fn store(&self, list: &ContactList) -> Result<(), StorageError> {
        let mut bytes = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut bytes, PrettyFormatter::with_indent(b"    "));
        list.serialize(&mut serializer)
            .map_err(|source| StorageError::Json {
                path: self.path.to_path_buf(),
                source,
            })?;

        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|source| self.io_error(source))?;
        tracing::debug!(path = %self.path.display(), contacts = list.len(), "contacts written");
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.to_path_buf(),
            source,
        }
    }
}
