//! Shelf CLI - Render and exercise the storefront from the command line.
//!
//! Commands:
//! - `shelf render` - Emit the full page HTML for the initial state
//! - `shelf replay` - Run a scripted sequence of gestures and clock ticks
//! - `shelf catalog` - List the catalog
//! - `shelf config` - Show the effective configuration

mod commands;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{RenderArgs, ReplayArgs};

/// Shelf CLI - Render and replay the Shelf storefront widget
#[derive(Parser)]
#[command(name = "shelf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the storefront page as HTML
    Render(RenderArgs),

    /// Replay a gesture script against a fresh storefront
    Replay(ReplayArgs),

    /// List the product catalog
    Catalog,

    /// Show the effective configuration
    Config,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Render(args) => commands::render::run(args, &ctx),
        Commands::Replay(args) => commands::replay::run(args, &ctx),
        Commands::Catalog => commands::catalog::run(&ctx),
        Commands::Config => commands::config::run(&ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
