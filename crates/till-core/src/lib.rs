//! Transaction and persistence model for a single-till retail checkout.
//!
//! This crate provides the core types for building a local point-of-sale tool:
//!
//! - **Catalog**: named, priced products with upsert and all-or-nothing import
//! - **Cart**: the in-progress sale, positional line items
//! - **Checkout**: validation, discount totals, order ids, receipts
//! - **Ledger**: append-only history of completed, immutable sales
//! - **Store**: durable JSON records plus a single credential slot
//!
//! # Example
//!
//! ```rust,ignore
//! use till_core::prelude::*;
//!
//! let store = Store::open("/var/lib/till")?;
//! let (mut state, _warning) = AppState::load_session(&store);
//!
//! state.catalog.upsert("Bread", 25.0)?;
//! let bread = state.catalog.get("Bread").unwrap().clone();
//! state.cart.add_line(&bread, 3)?;
//!
//! let outcome = complete_order(
//!     &mut state,
//!     &store,
//!     &CheckoutRequest {
//!         payment: "Cash".to_string(),
//!         discount: 10.0,
//!         note: String::new(),
//!     },
//! )?;
//! println!("{}", outcome.receipt);
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod ledger;
pub mod money;
pub mod receipt;
pub mod state;
pub mod store;

pub use error::TillError;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{Cart, CartLine};
    pub use crate::catalog::{Catalog, Product};
    pub use crate::checkout::{complete_order, CheckoutOutcome, CheckoutRequest};
    pub use crate::error::TillError;
    pub use crate::ledger::{Ledger, Sale};
    pub use crate::money::Money;
    pub use crate::state::AppState;
    pub use crate::store::{Credential, Store};
}
