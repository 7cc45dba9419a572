//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Serve command arguments.
#[derive(Debug, Args)]
pub struct ServeCommand {
    /// Address to listen on (overrides configuration)
    #[arg(short, long, value_name = "ADDR")]
    pub bind: Option<SocketAddr>,

    /// Path to the contact document (overrides configuration)
    #[arg(short, long, value_name = "FILE")]
    pub data_file: Option<PathBuf>,
}

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Search command arguments.
#[derive(Debug, Args)]
pub struct SearchCommand {
    /// The search query (matches name and email, case-insensitive)
    pub query: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Show command arguments.
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Identifier of the contact to show
    pub id: String,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Add command arguments.
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Contact name
    #[arg(short, long)]
    pub name: String,

    /// Contact email address
    #[arg(short, long)]
    pub email: String,

    /// Contact phone number
    #[arg(short, long)]
    pub phone: Option<String>,

    /// Additional fields as KEY=VALUE pairs (values are stored as strings)
    #[arg(short, long, value_name = "KEY=VALUE")]
    pub field: Vec<String>,
}

/// Edit command arguments.
#[derive(Debug, Args)]
pub struct EditCommand {
    /// Identifier of the contact to edit
    pub id: String,

    /// New contact name
    #[arg(short, long)]
    pub name: Option<String>,

    /// New email address
    #[arg(short, long)]
    pub email: Option<String>,

    /// New phone number
    #[arg(short, long)]
    pub phone: Option<String>,

    /// Fields to set, as KEY=VALUE pairs (values are stored as strings)
    #[arg(short, long, value_name = "KEY=VALUE")]
    pub field: Vec<String>,
}

/// Remove command arguments.
#[derive(Debug, Args)]
pub struct RemoveCommand {
    /// Identifier of the contact to remove
    pub id: String,

    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Status command arguments.
#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    Plain,
    /// Formatted table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Parse a `KEY=VALUE` argument into a field assignment.
///
/// Returns `None` when the argument has no `=` or an empty key.
#[must_use]
pub fn parse_field(raw: &str) -> Option<(String, String)> {
    let (key, value) = raw.split_once('=')?;
    if key.is_empty() {
        return None;
    }
    Some((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field() {
        assert_eq!(
            parse_field("company=Initech"),
            Some(("company".to_string(), "Initech".to_string()))
        );
    }

    #[test]
    fn test_parse_field_keeps_later_equals_signs() {
        assert_eq!(
            parse_field("note=a=b"),
            Some(("note".to_string(), "a=b".to_string()))
        );
    }

    #[test]
    fn test_parse_field_allows_empty_value() {
        assert_eq!(
            parse_field("nickname="),
            Some(("nickname".to_string(), String::new()))
        );
    }

    #[test]
    fn test_parse_field_rejects_malformed() {
        assert_eq!(parse_field("no-equals"), None);
        assert_eq!(parse_field("=value"), None);
        assert_eq!(parse_field(""), None);
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
    }

    #[test]
    fn test_output_format_debug() {
        let format = OutputFormat::Json;
        let debug_str = format!("{format:?}");
        assert_eq!(debug_str, "Json");
    }

    #[test]
    fn test_serve_command_debug() {
        let cmd = ServeCommand {
            bind: None,
            data_file: Some(PathBuf::from("/tmp/contacts.json")),
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("data_file"));
    }

    #[test]
    fn test_add_command_debug() {
        let cmd = AddCommand {
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            phone: None,
            field: vec![],
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Ann"));
        assert!(debug_str.contains("email"));
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Show"));
    }
}
