//! Browse and manage completed sales.

use std::fs;

use anyhow::{bail, Context as _, Result};
use dialoguer::Confirm;

use super::{HistoryArgs, HistoryCommand};
use crate::auth;
use crate::context::Context;

/// Run the history command.
pub fn run(args: HistoryArgs, ctx: &Context) -> Result<()> {
    match args.command {
        HistoryCommand::List { limit } => list(limit, ctx),
        HistoryCommand::Receipt {
            order_id,
            out,
            print,
        } => receipt(&order_id, out.as_deref(), print, ctx),
        HistoryCommand::Clear { yes } => clear(yes, ctx),
    }
}

fn list(limit: Option<usize>, ctx: &Context) -> Result<()> {
    let state = auth::login(ctx)?;

    if state.ledger.is_empty() {
        ctx.output.info("No sales yet.");
        return Ok(());
    }

    ctx.output.header("Sales history");
    let shown = limit.unwrap_or(usize::MAX);
    for sale in state.ledger.recent().take(shown) {
        ctx.output.plain(&format!(
            "{}  {}  {:<8} {:>10}",
            sale.order_id,
            sale.date,
            sale.payment,
            sale.total().display_amount()
        ));
    }
    Ok(())
}

fn receipt(order_id: &str, out: Option<&str>, print: bool, ctx: &Context) -> Result<()> {
    let state = auth::login(ctx)?;

    let Some(sale) = state.ledger.find(order_id) else {
        bail!("No sale with order id '{order_id}'");
    };

    if print {
        ctx.output.plain(&sale.receipt);
        return Ok(());
    }

    let path = out
        .map(str::to_string)
        .unwrap_or_else(|| format!("receipt_{order_id}.txt"));
    fs::write(&path, &sale.receipt).with_context(|| format!("Failed to write {path}"))?;
    ctx.output.success(&format!("Receipt written to {path}"));
    Ok(())
}

fn clear(yes: bool, ctx: &Context) -> Result<()> {
    let mut state = auth::login(ctx)?;

    if state.ledger.is_empty() {
        ctx.output.info("No sales to delete.");
        return Ok(());
    }

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Delete all {} sales? This cannot be undone.",
                state.ledger.len()
            ))
            .default(false)
            .interact_opt()?;
        if confirmed != Some(true) {
            ctx.output.info("Nothing deleted.");
            return Ok(());
        }
    }

    state.ledger.clear();
    ctx.persist(&state);
    ctx.output.success("Sales history cleared.");
    Ok(())
}
