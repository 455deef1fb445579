//! Interactive till session.
//!
//! One cart lives for the length of the session. Every prompt can be
//! aborted, and an abort leaves catalog, cart, and ledger exactly as they
//! were; the checkout request is collected in full before the engine runs.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use dialoguer::{Confirm, Input, Select};
use till_core::checkout::{complete_order, CheckoutRequest};
use till_core::state::AppState;

use super::SellArgs;
use crate::auth;
use crate::context::Context;

/// Run the sell command.
pub fn run(args: SellArgs, ctx: &Context) -> Result<()> {
    let mut state = auth::login(ctx)?;
    ctx.output.header("Till session");

    loop {
        let status = format!(
            "Cart: {} lines, total {}",
            state.cart.len(),
            state.cart.total().display_amount()
        );
        let choice = Select::new()
            .with_prompt(status)
            .items(&["Add item", "Remove line", "Show cart", "Checkout", "Log out"])
            .default(0)
            .interact_opt()?;

        match choice {
            Some(0) => add_item(&mut state, ctx)?,
            Some(1) => remove_line(&mut state, ctx)?,
            Some(2) => show_cart(&state, ctx),
            Some(3) => checkout(&mut state, ctx, &args)?,
            _ => {
                state.end_session();
                ctx.output.info("Logged out.");
                break;
            }
        }
    }
    Ok(())
}

fn add_item(state: &mut AppState, ctx: &Context) -> Result<()> {
    if state.catalog.is_empty() {
        ctx.output
            .info("The catalog is empty. Add products with `till product add`.");
        return Ok(());
    }

    let labels: Vec<String> = state
        .catalog
        .products()
        .iter()
        .map(|p| format!("{} ({})", p.name, p.price.display_amount()))
        .collect();
    let Some(index) = Select::new()
        .with_prompt("Product")
        .items(&labels)
        .default(0)
        .interact_opt()?
    else {
        return Ok(());
    };
    let count: u32 = Input::new().with_prompt("Count").default(1).interact_text()?;

    let product = state.catalog.products()[index].clone();
    match state.cart.add_line(&product, count) {
        Ok(()) => ctx
            .output
            .success(&format!("Added {} x{}", product.name, count)),
        Err(e) => ctx.output.error(&e.to_string()),
    }
    Ok(())
}

fn remove_line(state: &mut AppState, ctx: &Context) -> Result<()> {
    if state.cart.is_empty() {
        ctx.output.info("The cart is empty.");
        return Ok(());
    }

    let labels: Vec<String> = state
        .cart
        .lines()
        .iter()
        .map(|l| format!("{} x{} = {}", l.name, l.count, l.subtotal().display_amount()))
        .collect();
    let Some(index) = Select::new()
        .with_prompt("Remove which line?")
        .items(&labels)
        .default(0)
        .interact_opt()?
    else {
        return Ok(());
    };

    match state.cart.remove_at(index) {
        Ok(line) => ctx
            .output
            .success(&format!("Removed {} x{}", line.name, line.count)),
        Err(e) => ctx.output.error(&e.to_string()),
    }
    Ok(())
}

fn show_cart(state: &AppState, ctx: &Context) {
    if state.cart.is_empty() {
        ctx.output.info("The cart is empty.");
        return;
    }
    for (i, line) in state.cart.lines().iter().enumerate() {
        ctx.output.plain(&format!(
            "{:>2}. {} x{} = {}",
            i,
            line.name,
            line.count,
            line.subtotal().display_amount()
        ));
    }
    ctx.output
        .plain(&format!("Total: {}", state.cart.total().display_amount()));
}

fn checkout(state: &mut AppState, ctx: &Context, args: &SellArgs) -> Result<()> {
    if state.cart.is_empty() {
        ctx.output.info("The cart is empty.");
        return Ok(());
    }

    let payment: String = Input::new()
        .with_prompt("Payment (Cash/Card)")
        .default("Cash".to_string())
        .interact_text()?;
    let discount: f64 = Input::new()
        .with_prompt("Discount %")
        .default(0.0)
        .interact_text()?;
    let note: String = Input::new()
        .with_prompt("Note")
        .allow_empty(true)
        .interact_text()?;

    let confirmed = Confirm::new()
        .with_prompt("Complete the sale?")
        .default(true)
        .interact_opt()?;
    if confirmed != Some(true) {
        ctx.output.info("Checkout cancelled, cart unchanged.");
        return Ok(());
    }

    let request = CheckoutRequest {
        payment,
        discount,
        note,
    };
    let outcome = match complete_order(state, &ctx.store, &request) {
        Ok(outcome) => outcome,
        Err(e) => {
            // Validation errors are recoverable; the session continues.
            ctx.output.error(&e.to_string());
            return Ok(());
        }
    };

    if let Some(warning) = &outcome.persist_warning {
        ctx.output
            .warn(&format!("{warning}; the sale is recorded in memory only"));
    }
    ctx.output.success(&format!(
        "Sale {} recorded, total {}",
        outcome.order_id,
        outcome.total.display_amount()
    ));

    let save = Confirm::new()
        .with_prompt("Save the receipt as a text file?")
        .default(false)
        .interact_opt()?;
    if save == Some(true) {
        let dir = args.receipt_dir.as_deref().unwrap_or(".");
        let path = PathBuf::from(dir).join(format!("receipt_{}.txt", outcome.order_id));
        match fs::write(&path, &outcome.receipt) {
            Ok(()) => ctx
                .output
                .success(&format!("Receipt written to {}", path.display())),
            Err(e) => ctx
                .output
                .warn(&format!("Could not write {}: {e}", path.display())),
        }
    } else {
        ctx.output.plain(&outcome.receipt);
    }
    Ok(())
}
