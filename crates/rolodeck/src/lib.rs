//! `rolodeck` - A minimal contact manager with a REST API and web client
//!
//! This library provides the core functionality for keeping contact records
//! in a single JSON document and exposing them over HTTP to a browser page
//! and to the `rolo` command-line client.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod contact;
pub mod error;
pub mod http;
pub mod logging;
pub mod storage;

pub use config::Config;
pub use contact::{Contact, ContactDraft};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use storage::{ContactStore, JsonFileStore, StoreStats};
