//! Owned application state.

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::error::TillError;
use crate::ledger::Ledger;
use crate::store::Store;

/// The till's in-memory working state.
///
/// Constructed empty at process start and populated from the store once the
/// auth gate passes. There is exactly one logical actor, so no locking: all
/// mutations run to completion before the next event is processed.
#[derive(Debug, Default)]
pub struct AppState {
    pub catalog: Catalog,
    pub cart: Cart,
    pub ledger: Ledger,
}

impl AppState {
    /// Create empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session: load catalog and ledger from the store.
    ///
    /// A malformed durable record degrades to empty collections rather than
    /// blocking the user; the read error comes back alongside the state so
    /// the caller can report it.
    pub fn load_session(store: &Store) -> (Self, Option<TillError>) {
        match store.load_data() {
            Ok((catalog, ledger)) => (
                Self {
                    catalog,
                    cart: Cart::new(),
                    ledger,
                },
                None,
            ),
            Err(e) => (Self::new(), Some(e)),
        }
    }

    /// Persist catalog and ledger to the store.
    pub fn persist(&self, store: &Store) -> Result<(), TillError> {
        store.save_data(&self.catalog, &self.ledger)
    }

    /// End the session: only the cart is dropped, catalog and ledger
    /// persist across logins.
    pub fn end_session(&mut self) {
        self.cart.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::money::Money;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_session_round_trip() {
        let tmp = TempDir::new().unwrap();
        let store = Store::open(tmp.path()).unwrap();

        let mut state = AppState::new();
        state.catalog.upsert("Bread", 25.0).unwrap();
        state.persist(&store).unwrap();

        let (loaded, warning) = AppState::load_session(&store);
        assert!(warning.is_none());
        assert_eq!(loaded.catalog, state.catalog);
        assert!(loaded.cart.is_empty());
    }

    #[test]
    fn test_corrupt_record_degrades_to_empty_state() {
        let tmp = TempDir::new().unwrap();
        let store = Store::open(tmp.path()).unwrap();
        fs::write(tmp.path().join(crate::store::DATA_FILE), "][").unwrap();

        let (state, warning) = AppState::load_session(&store);
        assert!(warning.is_some());
        assert!(state.catalog.is_empty());
        assert!(state.ledger.is_empty());
    }

    #[test]
    fn test_end_session_clears_only_the_cart() {
        let mut state = AppState::new();
        state.catalog.upsert("Bread", 25.0).unwrap();
        let product = Product {
            name: "Bread".to_string(),
            price: Money::from_cents(2500),
        };
        state.cart.add_line(&product, 1).unwrap();

        state.end_session();
        assert!(state.cart.is_empty());
        assert_eq!(state.catalog.len(), 1);
    }
}
