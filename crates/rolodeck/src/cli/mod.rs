//! Command-line interface for rolodeck.
//!
//! This module provides the CLI structure and command definitions for the
//! `rolo` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    parse_field, AddCommand, ConfigCommand, EditCommand, ListCommand, OutputFormat, RemoveCommand,
    SearchCommand, ServeCommand, ShowCommand, StatusCommand,
};

/// rolo - Keep a contact list in one JSON file
///
/// Serves a small REST API with a browser page for managing contacts, and
/// offers the same operations directly from the command line.
#[derive(Debug, Parser)]
#[command(name = "rolo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP service and web client
    Serve(ServeCommand),

    /// List all contacts
    List(ListCommand),

    /// Search contacts by name or email
    Search(SearchCommand),

    /// Show a single contact
    Show(ShowCommand),

    /// Add a new contact
    Add(AddCommand),

    /// Edit an existing contact
    Edit(EditCommand),

    /// Remove a contact
    Remove(RemoveCommand),

    /// Show contact document status
    Status(StatusCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}
