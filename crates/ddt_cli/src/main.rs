//! DDT CLI - Command-line interface for the data-driven login test harness.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "ddt")]
#[command(about = "Data-driven login test harness", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default ddt.toml to the current directory
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
    /// Generate the scenario workbook from the canonical dataset
    Prepare {
        /// Workbook path (defaults to the configured data file)
        #[arg(long)]
        data: Option<PathBuf>,
        /// Sheet name (defaults to the configured sheet)
        #[arg(long)]
        sheet: Option<String>,
        /// Overwrite an existing workbook
        #[arg(long)]
        force: bool,
    },
    /// Execute the suite and write results back into the workbook
    Run {
        /// Workbook path (defaults to the configured data file)
        #[arg(long)]
        data: Option<PathBuf>,
        /// Sheet name (defaults to the configured sheet)
        #[arg(long)]
        sheet: Option<String>,
        /// Emit the report as JSON on stdout
        #[arg(long)]
        json: bool,
    },
    /// Validate a single credential pair
    Check {
        /// Username to validate
        username: String,
        /// Password to validate
        password: String,
    },
    /// Show the configured cross-browser matrix
    Matrix {
        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

fn main() -> Result<()> {
    // Initialize tracing subscriber
    // Respects RUST_LOG environment variable (e.g., RUST_LOG=debug)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { force } => commands::init::run(force),
        Commands::Prepare { data, sheet, force } => commands::prepare::run(data, sheet, force),
        Commands::Run { data, sheet, json } => commands::run::run(data, sheet, json),
        Commands::Check { username, password } => commands::check::run(&username, &password),
        Commands::Matrix { format } => commands::matrix::run(&format),
    }
}
