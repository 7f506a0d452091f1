//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod render;
pub mod replay;

use clap::Args;

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Viewport width in pixels.
    #[arg(short, long, default_value_t = 1280)]
    pub width: u32,

    /// Write the page to a file instead of stdout.
    #[arg(short, long)]
    pub out: Option<String>,
}

/// Arguments for the replay command.
#[derive(Args)]
pub struct ReplayArgs {
    /// Script file (TOML, or JSON by extension).
    pub script: String,

    /// Also write the final page HTML to this file.
    #[arg(long)]
    pub page: Option<String>,
}
