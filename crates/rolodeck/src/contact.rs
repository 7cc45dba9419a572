//! Core contact types for rolodeck.
//!
//! This module defines the contact record stored in the collection document
//! and the draft payload submitted by clients when creating or editing one.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single contact record.
///
/// Only the identifier has a fixed shape; every other field is an arbitrary
/// JSON value preserved exactly as it was submitted. `name`, `email`, and
/// `phone` are conventionally strings, but nothing enforces that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Unique identifier, assigned by the store at creation time.
    pub id: i64,

    /// All remaining fields, preserved verbatim.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Contact {
    /// Create a contact with the given identifier and fields.
    #[must_use]
    pub fn new(id: i64, fields: Map<String, Value>) -> Self {
        Self { id, fields }
    }

    /// Get a named field as a string, if present and actually a string.
    #[must_use]
    pub fn field_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// The contact's name, or the empty string if unset.
    #[must_use]
    pub fn name(&self) -> &str {
        self.field_str("name").unwrap_or("")
    }

    /// The contact's email address, or the empty string if unset.
    #[must_use]
    pub fn email(&self) -> &str {
        self.field_str("email").unwrap_or("")
    }

    /// The contact's phone number, or the empty string if unset.
    #[must_use]
    pub fn phone(&self) -> &str {
        self.field_str("phone").unwrap_or("")
    }

    /// Whether the given path segment identifies this contact.
    ///
    /// Identifiers are compared by their decimal rendering, so `"007"` does
    /// not match the contact with id `7`.
    #[must_use]
    pub fn id_matches(&self, id: &str) -> bool {
        self.id.to_string() == id
    }

    /// Case-insensitive substring match against the contact's name and email.
    ///
    /// An empty query matches every contact.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name().to_lowercase().contains(&query)
            || self.email().to_lowercase().contains(&query)
    }

    /// Shallow-merge the draft's fields over this contact.
    ///
    /// Keys present in the draft overwrite the contact's values, keys absent
    /// from the draft are kept, and the identifier is never affected.
    pub fn merge(&mut self, draft: ContactDraft) {
        for (key, value) in draft.into_fields() {
            self.fields.insert(key, value);
        }
    }
}

/// A client-submitted contact payload: any JSON object.
///
/// Drafts carry no identifier of their own. An `id` key, if submitted, is
/// discarded when the draft is consumed; identifiers are always assigned by
/// the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactDraft {
    fields: Map<String, Value>,
}

impl ContactDraft {
    /// Create an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field on the draft.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Whether the draft carries no fields at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Consume the draft, yielding its fields with any `id` key removed.
    #[must_use]
    pub fn into_fields(mut self) -> Map<String, Value> {
        self.fields.remove("id");
        self.fields
    }
}
