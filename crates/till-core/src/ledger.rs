//! Append-only history of completed sales.

use crate::cart::CartLine;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// An immutable record of one completed sale.
///
/// `items` is a deep copy of the cart lines at checkout time; mutating the
/// cart afterwards cannot change a recorded sale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sale {
    /// Unique, time-ordered order id (e.g., "ORD-1735000000-3").
    pub order_id: String,
    /// Formatted timestamp of completion.
    pub date: String,
    /// Snapshot of the cart lines at checkout.
    pub items: Vec<CartLine>,
    /// The rendered receipt document.
    pub receipt: String,
    /// Payment label (e.g., "Cash").
    pub payment: String,
    /// Percentage discount applied, in `[0, 100]`.
    pub discount: f64,
    /// Free-form note, possibly empty.
    pub note: String,
}

impl Sale {
    /// Total charged for this sale, recomputed from the recorded items.
    pub fn total(&self) -> Money {
        let subtotal: Money = self.items.iter().map(CartLine::subtotal).sum();
        subtotal.with_discount(self.discount)
    }
}

/// Append-only collection of finalized sales, stored oldest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Ledger {
    sales: Vec<Sale>,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finalized sale. The only writer is the checkout engine.
    pub fn append(&mut self, sale: Sale) {
        self.sales.push(sale);
    }

    /// Sales in chronological (storage) order.
    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    /// Sales most recent first, for display.
    pub fn recent(&self) -> impl Iterator<Item = &Sale> {
        self.sales.iter().rev()
    }

    /// Look up a sale by order id.
    pub fn find(&self, order_id: &str) -> Option<&Sale> {
        self.sales.iter().find(|s| s.order_id == order_id)
    }

    /// Empty the ledger entirely. Irreversible; confirmation is the
    /// boundary's concern, not re-validated here.
    pub fn clear(&mut self) {
        self.sales.clear();
    }

    pub fn len(&self) -> usize {
        self.sales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sales.is_empty()
    }
}
