//! `rolo` - CLI for rolodeck
//!
//! This binary provides the command-line interface for serving the contact
//! API and for working with the contact collection directly.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::Write;
use std::sync::Arc;

use anyhow::bail;
use clap::Parser;

use rolodeck::cli::{
    parse_field, AddCommand, Cli, Command, ConfigCommand, EditCommand, ListCommand, OutputFormat,
    RemoveCommand, SearchCommand, ServeCommand, ShowCommand, StatusCommand,
};
use rolodeck::contact::{Contact, ContactDraft};
use rolodeck::storage::ContactStore;
use rolodeck::{init_logging, Config, Error, JsonFileStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    // Execute the command
    match cli.command {
        Command::Serve(cmd) => handle_serve(&config, &cmd).await,
        Command::List(cmd) => handle_list(&config, &cmd).await,
        Command::Search(cmd) => handle_search(&config, &cmd).await,
        Command::Show(cmd) => handle_show(&config, &cmd).await,
        Command::Add(cmd) => handle_add(&config, &cmd).await,
        Command::Edit(cmd) => handle_edit(&config, &cmd).await,
        Command::Remove(cmd) => handle_remove(&config, &cmd).await,
        Command::Status(cmd) => handle_status(&config, &cmd).await,
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

fn store_from(config: &Config) -> JsonFileStore {
    JsonFileStore::new(config.contacts_path())
}

async fn handle_serve(config: &Config, cmd: &ServeCommand) -> anyhow::Result<()> {
    let addr = cmd.bind.unwrap_or(config.server.bind);
    let path = cmd
        .data_file
        .clone()
        .unwrap_or_else(|| config.contacts_path());
    let store = Arc::new(JsonFileStore::new(path));

    println!("Contact document: {}", store.path().display());
    println!("Listening on http://{addr}");

    rolodeck::http::serve(addr, store).await?;
    Ok(())
}

async fn handle_list(config: &Config, cmd: &ListCommand) -> anyhow::Result<()> {
    let store = store_from(config);
    let contacts = store.list().await?;
    print_contacts(&contacts, cmd.format)?;
    Ok(())
}

async fn handle_search(config: &Config, cmd: &SearchCommand) -> anyhow::Result<()> {
    let store = store_from(config);
    let mut contacts = store.list().await?;
    contacts.retain(|contact| contact.matches(&cmd.query));

    if contacts.is_empty() {
        println!("No contacts match \"{}\".", cmd.query);
        return Ok(());
    }
    print_contacts(&contacts, cmd.format)?;
    Ok(())
}

async fn handle_show(config: &Config, cmd: &ShowCommand) -> anyhow::Result<()> {
    let store = store_from(config);
    let contact = store
        .get(&cmd.id)
        .await?
        .ok_or_else(|| Error::not_found(&cmd.id))?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&contact)?);
    } else {
        println!("Id:     {}", contact.id);
        println!("Name:   {}", contact.name());
        println!("Email:  {}", contact.email());
        println!("Phone:  {}", contact.phone());
        for (key, value) in &contact.fields {
            if matches!(key.as_str(), "name" | "email" | "phone") {
                continue;
            }
            println!("{key}: {value}");
        }
    }
    Ok(())
}

async fn handle_add(config: &Config, cmd: &AddCommand) -> anyhow::Result<()> {
    if cmd.name.trim().is_empty() || cmd.email.trim().is_empty() {
        bail!("name and email must not be empty");
    }

    let mut draft = ContactDraft::new();
    draft.set("name", cmd.name.clone());
    draft.set("email", cmd.email.clone());
    if let Some(phone) = &cmd.phone {
        draft.set("phone", phone.clone());
    }
    apply_fields(&mut draft, &cmd.field)?;

    let store = store_from(config);
    let contact = store.create(draft).await?;
    println!("Added contact {} ({})", contact.id, contact.name());
    Ok(())
}

async fn handle_edit(config: &Config, cmd: &EditCommand) -> anyhow::Result<()> {
    let mut draft = ContactDraft::new();
    if let Some(name) = &cmd.name {
        draft.set("name", name.clone());
    }
    if let Some(email) = &cmd.email {
        draft.set("email", email.clone());
    }
    if let Some(phone) = &cmd.phone {
        draft.set("phone", phone.clone());
    }
    apply_fields(&mut draft, &cmd.field)?;

    if draft.is_empty() {
        bail!("nothing to change; pass --name, --email, --phone, or --field");
    }

    let store = store_from(config);
    let contact = store
        .update(&cmd.id, draft)
        .await?
        .ok_or_else(|| Error::not_found(&cmd.id))?;
    println!("Updated contact {} ({})", contact.id, contact.name());
    Ok(())
}

async fn handle_remove(config: &Config, cmd: &RemoveCommand) -> anyhow::Result<()> {
    if !cmd.yes && !confirm(&format!("Remove contact {}?", cmd.id))? {
        println!("Aborted.");
        return Ok(());
    }

    let store = store_from(config);
    if store.delete(&cmd.id).await? {
        println!("Removed contact {}.", cmd.id);
    } else {
        println!("No contact {} found; nothing removed.", cmd.id);
    }
    Ok(())
}

async fn handle_status(config: &Config, cmd: &StatusCommand) -> anyhow::Result<()> {
    let store = store_from(config);
    let stats = store.stats().await?;

    if cmd.json {
        let status = serde_json::json!({
            "document": store.path(),
            "exists": stats.document_exists,
            "contacts": stats.total_contacts,
            "size_bytes": stats.document_size_bytes,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("rolodeck status");
        println!("---------------");
        println!("Document:   {}", store.path().display());
        println!(
            "Exists:     {}",
            if stats.document_exists { "yes" } else { "no" }
        );
        println!("Contacts:   {}", stats.total_contacts);
        println!("Size:       {} bytes", stats.document_size_bytes);
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Server]");
                println!("  Bind address:  {}", config.server.bind);
                println!();
                println!("[Storage]");
                println!("  Document:      {}", config.contacts_path().display());
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}

fn apply_fields(draft: &mut ContactDraft, fields: &[String]) -> anyhow::Result<()> {
    for raw in fields {
        let Some((key, value)) = parse_field(raw) else {
            bail!("invalid field '{raw}': expected KEY=VALUE");
        };
        draft.set(key, value);
    }
    Ok(())
}

fn confirm(prompt: &str) -> anyhow::Result<bool> {
    print!("{prompt} [y/N] ");
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}

fn print_contacts(contacts: &[Contact], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(contacts)?),
        OutputFormat::Table => {
            println!("{:<15} {:<24} {:<28} {}", "ID", "NAME", "EMAIL", "PHONE");
            for contact in contacts {
                println!(
                    "{:<15} {:<24} {:<28} {}",
                    contact.id,
                    contact.name(),
                    contact.email(),
                    contact.phone()
                );
            }
        }
        OutputFormat::Plain => {
            for contact in contacts {
                println!(
                    "{}  {} <{}> {}",
                    contact.id,
                    contact.name(),
                    contact.email(),
                    contact.phone()
                );
            }
        }
    }
    Ok(())
}
