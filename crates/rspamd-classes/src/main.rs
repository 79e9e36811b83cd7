mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rspamd-classes")]
#[command(author, version, about = "Manage per-recipient rspamd score classes")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the classes file (default: rspamd_classes.json in the current directory)
    #[arg(short, long, global = true, env = "RSPAMD_CLASSES_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print class lists
    Show {
        /// Only show this key (provisioned from the defaults if missing)
        key: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List every key in the classes file
    Users,

    /// Classify a score for the first known key
    Classify {
        /// Spam score to classify
        #[arg(allow_negative_numbers = true)]
        score: f32,

        /// Candidate keys, most specific first (falls back to the default list)
        keys: Vec<String>,
    },

    /// Print one threshold
    Get {
        key: String,
        name: String,
    },

    /// Add or update a threshold
    Set {
        key: String,
        name: String,

        #[arg(allow_negative_numbers = true)]
        score: f32,

        /// Print the resulting file instead of writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Delete one class, or the whole key when no class is given
    Delete {
        key: String,
        name: Option<String>,

        /// Print the resulting file instead of writing it
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let path = commands::resolve_classes_path(cli.file)?;

    match cli.command {
        Commands::Show { key, json } => commands::show(&path, key.as_deref(), json),
        Commands::Users => commands::users(&path),
        Commands::Classify { score, keys } => commands::classify(&path, &keys, score),
        Commands::Get { key, name } => commands::get(&path, &key, &name),
        Commands::Set {
            key,
            name,
            score,
            dry_run,
        } => commands::set(&path, &key, &name, score, dry_run),
        Commands::Delete { key, name, dry_run } => {
            commands::delete(&path, &key, name.as_deref(), dry_run)
        }
    }
}
