//! JSON document storage for the contact collection.
//!
//! The whole collection is one pretty-printed JSON array on disk. Every
//! operation re-reads the document and every mutation rewrites it, so the
//! file is always the single source of truth and stays hand-editable.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use tracing::debug;

use crate::contact::{Contact, ContactDraft};
use crate::error::{Error, Result};

use super::ContactStore;

/// Contact store backed by a single JSON document.
///
/// Mutations follow a read-modify-write cycle under an internal lock, so
/// concurrent requests within one process cannot lose updates. The document
/// is replaced atomically on write (temp file plus rename), so readers never
/// observe a half-written file.
#[derive(Debug)]
pub struct JsonFileStore {
    /// Path to the contact document.
    path: PathBuf,
    /// Serializes read-modify-write cycles.
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Create a store over the given document path.
    ///
    /// The document does not need to exist yet; it is created on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Get the path to the contact document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gather statistics about the document and the collection it holds.
    ///
    /// # Errors
    ///
    /// Returns an error if the document exists but cannot be read or parsed.
    pub async fn stats(&self) -> Result<StoreStats> {
        let total_contacts = self.load().await?.len();

        let (document_exists, document_size_bytes) = match tokio::fs::metadata(&self.path).await {
            Ok(meta) => (true, meta.len()),
            Err(err) if err.kind() == ErrorKind::NotFound => (false, 0),
            Err(source) => {
                return Err(Error::DocumentRead {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        Ok(StoreStats {
            total_contacts,
            document_exists,
            document_size_bytes,
        })
    }

    /// Read and parse the whole collection.
    ///
    /// A missing document and an empty (or whitespace-only) document both
    /// read as the empty collection.
    async fn load(&self) -> Result<Vec<Contact>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(Error::DocumentRead {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&raw).map_err(|source| Error::DocumentParse {
            path: self.path.clone(),
            source,
        })
    }

    /// Write the whole collection back out, pretty-printed.
    ///
    /// The document is written to a temporary file beside the target and
    /// renamed into place.
    async fn persist(&self, contacts: &[Contact]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|source| Error::DirectoryCreate {
                        path: parent.to_path_buf(),
                        source,
                    })?;
            }
        }

        let body = serde_json::to_string_pretty(contacts)?;
        let tmp = self.path.with_extension("json.tmp");

        tokio::fs::write(&tmp, body.as_bytes())
            .await
            .map_err(|source| Error::DocumentWrite {
                path: tmp.clone(),
                source,
            })?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|source| Error::DocumentWrite {
                path: self.path.clone(),
                source,
            })?;

        debug!("wrote {} contacts to {}", contacts.len(), self.path.display());
        Ok(())
    }

    /// Pick an identifier for a new contact.
    ///
    /// Identifiers are the creation time in milliseconds. When that value is
    /// already taken (rapid successive creates land in the same millisecond),
    /// the id advances until it is unused.
    fn next_id(contacts: &[Contact]) -> i64 {
        let mut id = Utc::now().timestamp_millis();
        while contacts.iter().any(|c| c.id == id) {
            id += 1;
        }
        id
    }
}

#[async_trait]
impl ContactStore for JsonFileStore {
    async fn list(&self) -> Result<Vec<Contact>> {
        self.load().await
    }

    async fn get(&self, id: &str) -> Result<Option<Contact>> {
        let contacts = self.load().await?;
        Ok(contacts.into_iter().find(|c| c.id_matches(id)))
    }

    async fn create(&self, draft: ContactDraft) -> Result<Contact> {
        let _guard = self.write_lock.lock().await;

        let mut contacts = self.load().await?;
        let contact = Contact::new(Self::next_id(&contacts), draft.into_fields());
        contacts.push(contact.clone());
        self.persist(&contacts).await?;

        debug!("created contact {}", contact.id);
        Ok(contact)
    }

    async fn update(&self, id: &str, draft: ContactDraft) -> Result<Option<Contact>> {
        let _guard = self.write_lock.lock().await;

        let mut contacts = self.load().await?;
        let Some(contact) = contacts.iter_mut().find(|c| c.id_matches(id)) else {
            return Ok(None);
        };
        contact.merge(draft);
        let updated = contact.clone();
        self.persist(&contacts).await?;

        debug!("updated contact {}", updated.id);
        Ok(Some(updated))
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let _guard = self.write_lock.lock().await;

        let mut contacts = self.load().await?;
        let before = contacts.len();
        contacts.retain(|c| !c.id_matches(id));
        let removed = contacts.len() != before;

        // The document is rewritten even when nothing matched, so a no-op
        // delete still materializes an empty collection file.
        self.persist(&contacts).await?;

        if removed {
            debug!("removed contact {}", id);
        }
        Ok(removed)
    }
}

/// Statistics about the contact document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreStats {
    /// Number of contacts in the collection.
    pub total_contacts: usize,
    /// Whether the document file exists on disk.
    pub document_exists: bool,
    /// Size of the document file in bytes.
    pub document_size_bytes: u64,
}
