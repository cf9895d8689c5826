use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tally_core::{FieldValue, Record, format_currency, format_date};
use tally_finance::{all_categories, backfill_suggestions, suggest_category};
use tally_ingest::{FileSink, export_to_csv, read_csv_file};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod config;
mod state;

#[derive(Parser, Debug)]
#[command(
    name = "tally",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("TALLY_BUILD_SHA"), ")"),
    about = "Transaction CSV import/export and category suggestions"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Suggest a category for a transaction description
    Suggest {
        description: String,
    },

    /// List every known category
    Categories,

    /// Parse a transaction CSV and print it
    Import {
        csv: PathBuf,

        /// Do not backfill suggested categories
        #[arg(long)]
        no_suggest: bool,

        /// Print rows as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Parse a transaction CSV and save it back out in export format
    Export {
        csv: PathBuf,

        /// Output directory (default: [export].dir from config)
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Output file name (default: [export].filename from config)
        #[arg(long)]
        filename: Option<String>,

        /// Do not backfill suggested categories
        #[arg(long)]
        no_suggest: bool,
    },

    /// Format values for display
    Format {
        #[command(subcommand)]
        command: FormatCommand,
    },

    /// Manage ~/.tally/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum FormatCommand {
    /// Format an amount as USD
    Currency {
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },
    /// Format a date as M/D/YYYY
    Date { text: String },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config if none exists
    Init,
    /// Print the effective config
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr).compact())
        .init();

    match cli.command {
        Command::Suggest { description } => match suggest_category(&description) {
            Some(category) => println!("{category}"),
            None => println!("(no suggestion)"),
        },

        Command::Categories => {
            for category in all_categories() {
                println!("{category}");
            }
        }

        Command::Import { csv, no_suggest, json } => {
            let cfg = config::load_config()?;
            let rows = load_rows(&csv, cfg.import.suggest_categories && !no_suggest)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                print_rows(&rows);
            }
        }

        Command::Export {
            csv,
            out_dir,
            filename,
            no_suggest,
        } => {
            let cfg = config::load_config()?;
            let rows = load_rows(&csv, cfg.import.suggest_categories && !no_suggest)?;
            let dir = out_dir.unwrap_or(cfg.export.dir);
            let filename = filename.unwrap_or(cfg.export.filename);
            let saved = export_rows(&rows, dir, &filename)?;

            match saved {
                Some(path) => println!("Exported {} rows to {}", rows.len(), path.display()),
                None => println!("(no rows)"),
            }
        }

        Command::Format { command } => match command {
            FormatCommand::Currency { amount } => println!("{}", format_currency(amount)),
            FormatCommand::Date { text } => println!("{}", format_date(&text)),
        },

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                let cfg = config::load_config()?;
                debug!(path = %config::config_path()?.display(), "loaded config");
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

fn load_rows(csv: &Path, suggest: bool) -> Result<Vec<Record>> {
    if !csv.exists() {
        bail!("CSV not found: {}", csv.display());
    }

    let mut rows = read_csv_file(csv).with_context(|| format!("parsing {}", csv.display()))?;
    info!(rows = rows.len(), path = %csv.display(), "imported csv");

    if suggest {
        let filled = backfill_suggestions(&mut rows);
        info!(filled, "suggested categories");
    }
    Ok(rows)
}

/// Export through a [`FileSink`]; `None` when there was nothing to write.
fn export_rows(rows: &[Record], dir: PathBuf, filename: &str) -> Result<Option<PathBuf>> {
    let mut sink = FileSink::new(dir);
    export_to_csv(rows, filename, &mut sink)?;
    Ok(sink.saved().last().cloned())
}

fn print_rows(rows: &[Record]) {
    if rows.is_empty() {
        println!("(no rows)");
        return;
    }

    for row in rows {
        let date = row.text("date").map(format_date).unwrap_or_default();
        let description = row.text("description").unwrap_or("");
        let amount = match row.get("amount") {
            Some(FieldValue::Number(n)) => format_currency(*n),
            Some(other) => other.to_string(),
            None => String::new(),
        };
        let category = match (row.text("category"), row.text("categorySuggested")) {
            (Some(c), Some("true")) if !c.is_empty() => format!("{c} (suggested)"),
            (Some(c), _) if !c.is_empty() => c.to_string(),
            _ => "-".to_string(),
        };

        println!("{:<10} | {:<40} | {:>12} | {}", date, description, amount, category);
    }
    println!("\n{} rows", rows.len());
}
