//! Manage the login account.

use anyhow::{bail, Result};
use dialoguer::{Confirm, Input, Password};
use till_core::store::Credential;

use super::{AccountArgs, AccountCommand};
use crate::context::Context;

/// Run the account command.
pub fn run(args: AccountArgs, ctx: &Context) -> Result<()> {
    match args.command {
        AccountCommand::Setup => setup(ctx),
    }
}

fn setup(ctx: &Context) -> Result<()> {
    ctx.output.header("Account setup");

    if ctx.store.load_credential().is_some() {
        let replace = Confirm::new()
            .with_prompt("An account already exists. Replace it?")
            .default(false)
            .interact_opt()?;
        if replace != Some(true) {
            ctx.output.info("Nothing changed.");
            return Ok(());
        }
    }

    let username: String = Input::new().with_prompt("Username").interact_text()?;
    let username = username.trim().to_string();
    if username.is_empty() {
        bail!("Username must not be empty");
    }
    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()?;
    if password.is_empty() {
        bail!("Password must not be empty");
    }

    ctx.store.save_credential(&Credential { username, password })?;
    ctx.output.success("Account created. You can now log in.");
    Ok(())
}
