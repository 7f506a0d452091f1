//! Render the initial storefront page.

use std::fs;

use anyhow::{Context as _, Result};
use shelf_view::{render_page, MemoryDocument, Storefront};

use super::RenderArgs;
use crate::context::Context;

/// Run the render command.
pub fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let storefront = Storefront::new(&ctx.config, MemoryDocument::new(), args.width)?;
    let page = render_page(&ctx.config.title, storefront.document());

    match args.out {
        Some(out) => {
            let path = ctx.resolve_path(&out);
            fs::write(&path, &page)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            ctx.output
                .success(&format!("Wrote {} ({} bytes)", path.display(), page.len()));
        }
        None => print!("{}", page),
    }

    Ok(())
}
