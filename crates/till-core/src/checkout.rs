//! Checkout engine.
//!
//! The single synchronous transition from a working cart to a recorded
//! sale: validate, compute the discounted total, render the receipt, append
//! to the ledger, clear the cart, persist. No intermediate state survives a
//! validation failure.

use crate::error::TillError;
use crate::ledger::Sale;
use crate::money::Money;
use crate::receipt;
use crate::state::AppState;
use crate::store::Store;
use chrono::{DateTime, Local};
use std::sync::atomic::{AtomicU64, Ordering};

/// A fully populated checkout request.
///
/// Input collection happens before the engine runs; an aborted collection
/// produces no request at all, so a half-answered prompt chain can never
/// reach the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutRequest {
    /// Payment label (e.g., "Cash", "Card"). Must be non-empty.
    pub payment: String,
    /// Percentage discount in `[0, 100]`.
    pub discount: f64,
    /// Free-form note, possibly empty.
    pub note: String,
}

/// The result of a successful checkout.
#[derive(Debug)]
pub struct CheckoutOutcome {
    /// Order id of the recorded sale.
    pub order_id: String,
    /// Total charged after the discount.
    pub total: Money,
    /// The rendered receipt document.
    pub receipt: String,
    /// Set when the sale was recorded in memory but the durable save
    /// failed. The sale stands either way; the caller decides how loudly
    /// to warn.
    pub persist_warning: Option<TillError>,
}

/// Complete the order in the cart.
///
/// On success the sale is appended to the ledger, the cart is cleared, and
/// the state is persisted. A persistence failure does not roll back the
/// in-memory sale; it is surfaced through [`CheckoutOutcome::persist_warning`].
/// On a validation error nothing is touched.
pub fn complete_order(
    state: &mut AppState,
    store: &Store,
    request: &CheckoutRequest,
) -> Result<CheckoutOutcome, TillError> {
    if state.cart.is_empty() {
        return Err(TillError::EmptyCart);
    }
    if request.payment.trim().is_empty() {
        return Err(TillError::InvalidInput(
            "payment label must not be empty".to_string(),
        ));
    }
    if !request.discount.is_finite() || !(0.0..=100.0).contains(&request.discount) {
        return Err(TillError::InvalidDiscount(request.discount));
    }

    let now = Local::now();
    let order_id = next_order_id(&now);
    let date = now.format("%d.%m.%Y %H:%M").to_string();
    let total = state.cart.total().with_discount(request.discount);
    let items = state.cart.lines().to_vec();
    let doc = receipt::render(
        &order_id,
        &date,
        &request.payment,
        request.discount,
        &request.note,
        &items,
        total,
    );

    state.ledger.append(Sale {
        order_id: order_id.clone(),
        date,
        items,
        receipt: doc.clone(),
        payment: request.payment.clone(),
        discount: request.discount,
        note: request.note.clone(),
    });
    state.cart.clear();

    let persist_warning = state.persist(store).err();

    Ok(CheckoutOutcome {
        order_id,
        total,
        receipt: doc,
        persist_warning,
    })
}

/// Generate an order id from the seconds timestamp plus a process-wide
/// counter, so two sales completed within the same second still get
/// distinct ids.
fn next_order_id(now: &DateTime<Local>) -> String {
    static SEQ: AtomicU64 = AtomicU64::new(0);
    let seq = SEQ.fetch_add(1, Ordering::SeqCst);
    format!("ORD-{}-{}", now.timestamp(), seq)
}
