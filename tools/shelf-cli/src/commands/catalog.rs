//! List the product catalog.

use anyhow::Result;

use crate::context::Context;

/// Run the catalog command.
pub fn run(ctx: &Context) -> Result<()> {
    let catalog = ctx.config.catalog()?;

    if ctx.output.is_json() {
        ctx.output.json(&catalog.products());
        return Ok(());
    }

    ctx.output.header(&format!("Catalog ({} products)", catalog.len()));
    let widths = [4, 36, 9];
    ctx.output.table_row(&["ID", "NAME", "PRICE"], &widths);
    for product in catalog.iter() {
        let id = product.id.to_string();
        let price = product.price.display();
        ctx.output
            .table_row(&[id.as_str(), product.name.as_str(), price.as_str()], &widths);
    }

    Ok(())
}
