//! Show the effective configuration.

use anyhow::Result;

use crate::context::Context;

/// Run the config command.
pub fn run(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    match &ctx.config_path {
        Some(path) => ctx.output.info(&format!("Loaded from {}", path.display())),
        None => ctx.output.info("No config file found, using defaults"),
    }
    println!();
    print!("{}", ctx.config.to_toml_string()?);

    Ok(())
}
