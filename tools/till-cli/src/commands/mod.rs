//! CLI command implementations.

pub mod account;
pub mod history;
pub mod product;
pub mod sell;

use clap::{Args, Subcommand};

/// Arguments for the account command.
#[derive(Args)]
pub struct AccountArgs {
    #[command(subcommand)]
    pub command: AccountCommand,
}

#[derive(Subcommand)]
pub enum AccountCommand {
    /// Create or replace the login credential
    Setup,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    #[command(subcommand)]
    pub command: ProductCommand,
}

#[derive(Subcommand)]
pub enum ProductCommand {
    /// List the catalog
    List,

    /// Add a product or update its price
    Add {
        /// Product name.
        #[arg(short, long)]
        name: Option<String>,

        /// Unit price (e.g., 49.90).
        #[arg(short, long)]
        price: Option<f64>,
    },

    /// Replace the whole catalog from a JSON file
    Import {
        /// Path to a JSON array of {"name", "price"} entries.
        file: String,
    },

    /// Export the catalog to a JSON file
    Export {
        /// Output path.
        #[arg(default_value = "products_export.json")]
        file: String,
    },
}

/// Arguments for the sell command.
#[derive(Args)]
pub struct SellArgs {
    /// Directory for saved receipt files (default: current directory).
    #[arg(long)]
    pub receipt_dir: Option<String>,
}

/// Arguments for the history command.
#[derive(Args)]
pub struct HistoryArgs {
    #[command(subcommand)]
    pub command: HistoryCommand,
}

#[derive(Subcommand)]
pub enum HistoryCommand {
    /// List completed sales, most recent first
    List {
        /// Show only the last N sales.
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Export the receipt for one sale
    Receipt {
        /// Order id (as shown by `history list`).
        order_id: String,

        /// Output file (default: receipt_<order_id>.txt).
        #[arg(short, long)]
        out: Option<String>,

        /// Print to stdout instead of writing a file.
        #[arg(long)]
        print: bool,
    },

    /// Delete the entire sales history
    Clear {
        /// Skip confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}
