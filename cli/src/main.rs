//! # ReelRec Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the ReelRec CLI
//! application. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to appropriate command handlers
//!
//! ## Architecture
//!
//! The application follows a modular command structure:
//! - Each top-level command (`catalog`, `recommend`, etc.) is defined as a variant in the `Commands` enum
//! - Commands are mapped to handler functions in their respective modules
//! - All errors are propagated to this level for consistent handling
//!
//! ## Examples
//!
//! Basic ReelRec usage:
//!
//! ```bash
//! # Get help
//! reelrec --help
//!
//! # Run a command with increased verbosity
//! reelrec -vv recommend --rate 1=5
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Route to appropriate command handler
//! 4. Format and display any errors that occur
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

// Declare the top-level modules of the CLI crate.
mod commands; // Handles specific command logic (catalog, recommend, etc.)
mod common; // Contains shared domain code (engine, ui)
mod core; // Core infrastructure (errors, config)

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "reelrec",
    about = "🎬 ReelRec 🍿: Content-Based Movie Recommendations",
    long_about = "Browse a movie catalog, rate what you've seen, and get deterministic,\n\
                  explainable recommendations ranked by weighted content similarity.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "c")]
    Catalog(commands::catalog::CatalogArgs),
    #[command(alias = "r")]
    Recommend(commands::recommend::RecommendArgs),
    #[command(alias = "p")]
    Profile(commands::profile::ProfileArgs),
    Shell(commands::shell::ShellArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Use anyhow::Result directly
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Catalog(args) => commands::catalog::handle_catalog(args).await,
        Commands::Recommend(args) => commands::recommend::handle_recommend(args).await,
        Commands::Profile(args) => commands::profile::handle_profile(args).await,
        Commands::Shell(args) => commands::shell::handle_shell(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
