//! Command-line front end for the contact store.
//!
//! # Responsibility
//! - Map subcommands onto `ContactService` lifecycle requests.
//! - Render outcomes as text or JSON and turn them into exit codes.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use contactform_core::{
    default_log_level, init_logging, Contact, ContactForm, ContactId, ContactService, Outcome,
    OutcomeLevel, SqliteConnectionProvider, StoreConfig,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "contactform")]
#[command(about = "Manage contact form submissions", long_about = None)]
#[command(version)]
struct Cli {
    /// SQLite database file (defaults to $DB_NAME)
    #[arg(long, global = true)]
    db: Option<PathBuf>,
    /// Directory for rolling log files; logging is off when unset
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    /// trace|debug|info|warn|error
    #[arg(long, global = true)]
    log_level: Option<String>,
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all contacts
    List,
    /// Add a contact
    Add {
        #[arg(short, long, default_value = "")]
        name: String,
        #[arg(short, long, default_value = "")]
        email: String,
        #[arg(short, long, default_value = "")]
        message: String,
    },
    /// Show one contact for editing
    Show { id: ContactId },
    /// Replace name, email and message of a contact
    Update {
        id: ContactId,
        #[arg(short, long, default_value = "")]
        name: String,
        #[arg(short, long, default_value = "")]
        email: String,
        #[arg(short, long, default_value = "")]
        message: String,
    },
    /// Delete a contact
    Delete { id: ContactId },
    /// Print the built-in demo contacts
    Demo,
    /// Replace all contacts with sample data
    PopulateSample,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    setup_logging(&cli)?;

    let config = StoreConfig::from_env().override_database(cli.db.as_deref());
    let service = ContactService::new(SqliteConnectionProvider::new(&config));

    let ok = match cli.command {
        Commands::List => {
            let view = service.handle_list();
            if cli.json {
                print_json(&view)?;
            } else {
                print_contacts(&view.contacts);
                if let Some(notice) = &view.notice {
                    print_outcome(notice);
                }
            }
            view.notice.is_none()
        }
        Commands::Add {
            name,
            email,
            message,
        } => report(&service.handle_create(&ContactForm::new(name, email, message)), cli.json)?,
        Commands::Show { id } => match service.handle_edit(id) {
            Ok(contact) => {
                if cli.json {
                    print_json(&contact)?;
                } else {
                    print_contacts(std::slice::from_ref(&contact));
                }
                true
            }
            Err(outcome) => report(&outcome, cli.json)?,
        },
        Commands::Update {
            id,
            name,
            email,
            message,
        } => report(
            &service.handle_update(id, &ContactForm::new(name, email, message)),
            cli.json,
        )?,
        Commands::Delete { id } => report(&service.handle_delete(id), cli.json)?,
        Commands::Demo => {
            let contacts = service.demo();
            if cli.json {
                print_json(&contacts)?;
            } else {
                println!("Sample contacts");
                print_contacts(&contacts);
            }
            true
        }
        Commands::PopulateSample => report(&service.handle_populate_sample(), cli.json)?,
    };

    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn setup_logging(cli: &Cli) -> Result<()> {
    let Some(log_dir) = &cli.log_dir else {
        return Ok(());
    };
    let log_dir = if log_dir.is_absolute() {
        log_dir.clone()
    } else {
        std::env::current_dir()
            .context("failed to resolve current directory")?
            .join(log_dir)
    };
    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    let log_dir = log_dir
        .to_str()
        .ok_or_else(|| anyhow!("log directory must be valid UTF-8"))?;
    init_logging(level, log_dir).map_err(|err| anyhow!(err))
}

fn report(outcome: &Outcome, json: bool) -> Result<bool> {
    if json {
        print_json(outcome)?;
    } else {
        print_outcome(outcome);
    }
    Ok(outcome.is_success())
}

fn print_outcome(outcome: &Outcome) {
    match outcome.level {
        OutcomeLevel::Success => println!("{}", outcome.message),
        OutcomeLevel::Error => eprintln!("error: {}", outcome.message),
    }
}

fn print_contacts(contacts: &[Contact]) {
    if contacts.is_empty() {
        println!("No contacts yet.");
        return;
    }
    for contact in contacts {
        println!(
            "{:>4}  {:<20} {:<30} {}",
            contact.id, contact.name, contact.email, contact.message
        );
    }
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("failed to encode JSON output")?;
    println!("{text}");
    Ok(())
}
