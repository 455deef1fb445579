//! Till CLI - a single-till retail checkout.
//!
//! Commands:
//! - `till account setup` - create the login credential
//! - `till product` - manage the catalog (list, add, import, export)
//! - `till sell` - run an interactive till session
//! - `till history` - browse and manage completed sales

mod auth;
mod commands;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{AccountArgs, HistoryArgs, ProductArgs, SellArgs};

/// Till - single-till retail checkout
#[derive(Parser)]
#[command(name = "till")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Data directory (default: ~/.local/share/till)
    #[arg(short, long, global = true)]
    data_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the login account
    Account(AccountArgs),

    /// Manage the product catalog
    Product(ProductArgs),

    /// Run an interactive till session
    Sell(SellArgs),

    /// Browse and manage completed sales
    History(HistoryArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose);
    let ctx = context::Context::load(cli.data_dir.as_deref(), output)?;

    let result = match cli.command {
        Commands::Account(args) => commands::account::run(args, &ctx),
        Commands::Product(args) => commands::product::run(args, &ctx),
        Commands::Sell(args) => commands::sell::run(args, &ctx),
        Commands::History(args) => commands::history::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
