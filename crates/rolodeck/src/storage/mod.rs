//! Storage layer for rolodeck.
//!
//! The contact collection lives behind the [`ContactStore`] trait so the HTTP
//! service and the CLI stay independent of how records are persisted. The
//! shipped implementation, [`JsonFileStore`], keeps the whole collection in a
//! single JSON document on disk.

pub mod json_file;

use async_trait::async_trait;

use crate::contact::{Contact, ContactDraft};
use crate::error::Result;

pub use json_file::{JsonFileStore, StoreStats};

/// Persistent storage for the contact collection.
///
/// Identifiers are matched against their decimal string rendering, mirroring
/// how they appear in request paths: `"007"` never matches the contact with
/// id `7`.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// List the full collection in document order.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read.
    async fn list(&self) -> Result<Vec<Contact>>;

    /// Get a single contact by identifier.
    ///
    /// Returns `None` when no contact matches.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read.
    async fn get(&self, id: &str) -> Result<Option<Contact>>;

    /// Create a contact from the draft, assigning it a fresh identifier.
    ///
    /// The new record is appended to the end of the collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read or written.
    async fn create(&self, draft: ContactDraft) -> Result<Contact>;

    /// Shallow-merge the draft over an existing contact.
    ///
    /// Returns the merged record, or `None` when no contact matches; in that
    /// case nothing is written.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read or written.
    async fn update(&self, id: &str, draft: ContactDraft) -> Result<Option<Contact>>;

    /// Remove a contact, reporting whether anything was removed.
    ///
    /// Removing an absent contact is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read or written.
    async fn delete(&self, id: &str) -> Result<bool>;
}
