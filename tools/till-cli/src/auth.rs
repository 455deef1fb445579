//! Login gate for data-touching commands.
//!
//! The gate is opaque pass/fail: on pass the durable data is loaded into a
//! fresh session state; on fail the command never runs. The stored
//! credential is a casual gate, not real access control.

use anyhow::{bail, Result};
use dialoguer::{Input, Password};
use till_core::state::AppState;

use crate::context::Context;

/// Prompt for credentials, verify them, and start a session.
pub fn login(ctx: &Context) -> Result<AppState> {
    let Some(cred) = ctx.store.load_credential() else {
        bail!("No account exists yet. Run `till account setup` first.");
    };

    let username: String = Input::new().with_prompt("Username").interact_text()?;
    let password = Password::new().with_prompt("Password").interact()?;
    if !cred.verify(username.trim(), &password) {
        bail!("Invalid username or password");
    }

    let (state, warning) = AppState::load_session(&ctx.store);
    if let Some(e) = warning {
        ctx.output
            .warn(&format!("{e}; starting with an empty catalog and history"));
    }
    ctx.output.debug(&format!(
        "Loaded {} products, {} sales",
        state.catalog.len(),
        state.ledger.len()
    ));
    Ok(state)
}
