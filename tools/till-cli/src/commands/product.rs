//! Manage the product catalog.

use std::fs;

use anyhow::{Context as _, Result};
use dialoguer::Input;
use till_core::catalog;

use super::{ProductArgs, ProductCommand};
use crate::auth;
use crate::context::Context;

/// Run the product command.
pub fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ProductCommand::List => list(ctx),
        ProductCommand::Add { name, price } => add(name, price, ctx),
        ProductCommand::Import { file } => import(&file, ctx),
        ProductCommand::Export { file } => export(&file, ctx),
    }
}

fn list(ctx: &Context) -> Result<()> {
    let state = auth::login(ctx)?;

    if state.catalog.is_empty() {
        ctx.output
            .info("No products yet. Add one with `till product add`.");
        return Ok(());
    }

    ctx.output.header("Catalog");
    for product in state.catalog.products() {
        ctx.output.plain(&format!(
            "{:<30} {:>10}",
            product.name,
            product.price.display_amount()
        ));
    }
    Ok(())
}

fn add(name: Option<String>, price: Option<f64>, ctx: &Context) -> Result<()> {
    let mut state = auth::login(ctx)?;

    // Collect both inputs before touching the catalog, so an abort at the
    // price prompt leaves nothing half-written.
    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Product name").interact_text()?,
    };
    let price = match price {
        Some(p) => p,
        None => Input::new()
            .with_prompt("Unit price (e.g., 49.90)")
            .interact_text()?,
    };

    state.catalog.upsert(&name, price)?;
    ctx.persist(&state);

    if let Some(product) = state.catalog.get(&name) {
        ctx.output.success(&format!(
            "Saved {} at {}",
            product.name,
            product.price.display_amount()
        ));
    }
    Ok(())
}

fn import(file: &str, ctx: &Context) -> Result<()> {
    let mut state = auth::login(ctx)?;

    let raw = fs::read_to_string(file).with_context(|| format!("Failed to read {file}"))?;
    let entries = catalog::parse_import(&raw)?;
    let count = entries.len();
    state.catalog.replace_all(entries)?;
    ctx.persist(&state);

    ctx.output
        .success(&format!("Imported {count} products (catalog replaced)"));
    Ok(())
}

fn export(file: &str, ctx: &Context) -> Result<()> {
    let state = auth::login(ctx)?;

    fs::write(file, state.catalog.export_json())
        .with_context(|| format!("Failed to write {file}"))?;
    ctx.output.success(&format!(
        "Exported {} products to {file}",
        state.catalog.len()
    ));
    Ok(())
}
