//! Blueprint CLI
//!
//! Developer tool for validating automation blueprints and converting
//! them into platform-native workflow documents.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

/// Automation Blueprints - one DSL, many automation platforms
#[derive(Parser)]
#[command(name = "blueprint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a starter blueprint project
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: String,

        /// Blueprint name (defaults to directory name)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Validate a blueprint against the schema
    Validate {
        /// Blueprint file (.json, .yaml, or .yml)
        file: String,
    },

    /// Convert a blueprint to one platform's native format
    Convert {
        /// Blueprint file (.json, .yaml, or .yml)
        file: String,

        /// Target platform (see `blueprint platforms`)
        #[arg(short, long)]
        target: String,

        /// Write the document to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Export a blueprint for every registered platform
    Export {
        /// Blueprint file (.json, .yaml, or .yml)
        file: String,

        /// Output directory for the exported documents
        #[arg(short, long, default_value = "exports")]
        dir: String,
    },

    /// List registered target platforms
    Platforms,

    /// Print the blueprint schema
    Schema {
        /// Print only the schema id, title, and required fields
        #[arg(long)]
        summary: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Init { path, name } => {
            commands::init::run(&path, name.as_deref())?;
        }
        Commands::Validate { file } => {
            commands::validate::run(&file)?;
        }
        Commands::Convert {
            file,
            target,
            output,
        } => {
            commands::convert::run(&file, &target, output.as_deref())?;
        }
        Commands::Export { file, dir } => {
            commands::export::run(&file, &dir)?;
        }
        Commands::Platforms => {
            commands::platforms::run()?;
        }
        Commands::Schema { summary } => {
            commands::schema::run(summary)?;
        }
    }

    Ok(())
}
