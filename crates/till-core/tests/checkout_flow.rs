//! End-to-end flow: catalog -> cart -> checkout -> persist -> reload.

use std::fs;
use tempfile::TempDir;
use till_core::prelude::*;

fn checkout(state: &mut AppState, store: &Store, discount: f64) -> CheckoutOutcome {
    complete_order(
        state,
        store,
        &CheckoutRequest {
            payment: "Cash".to_string(),
            discount,
            note: "counter 1".to_string(),
        },
    )
    .unwrap()
}

#[test]
fn sale_survives_a_process_restart() {
    let tmp = TempDir::new().unwrap();
    let store = Store::open(tmp.path()).unwrap();

    let (mut state, warning) = AppState::load_session(&store);
    assert!(warning.is_none());

    state.catalog.upsert("Bread", 25.0).unwrap();
    state.catalog.upsert("Milk", 30.0).unwrap();
    state.persist(&store).unwrap();

    let bread = state.catalog.get("Bread").unwrap().clone();
    state.cart.add_line(&bread, 3).unwrap();
    assert_eq!(state.cart.total().cents(), 7500);

    let outcome = checkout(&mut state, &store, 10.0);
    assert_eq!(outcome.total.cents(), 6750);

    // Fresh session over the same store, as after a restart.
    let (reloaded, warning) = AppState::load_session(&store);
    assert!(warning.is_none());
    assert_eq!(reloaded.catalog, state.catalog);
    assert_eq!(reloaded.ledger, state.ledger);
    assert!(reloaded.cart.is_empty());

    let sale = reloaded.ledger.find(&outcome.order_id).unwrap();
    assert_eq!(sale.total().cents(), 6750);
    assert_eq!(sale.receipt, outcome.receipt);
}

#[test]
fn failed_save_keeps_the_sale_in_memory() {
    let tmp = TempDir::new().unwrap();
    let store = Store::open(tmp.path()).unwrap();

    let (mut state, _) = AppState::load_session(&store);
    state.catalog.upsert("Bread", 25.0).unwrap();
    let bread = state.catalog.get("Bread").unwrap().clone();
    state.cart.add_line(&bread, 1).unwrap();

    // A directory where the record should be makes the write fail.
    fs::create_dir(tmp.path().join(till_core::store::DATA_FILE)).unwrap();

    let outcome = checkout(&mut state, &store, 0.0);
    assert!(outcome.persist_warning.is_some());
    assert_eq!(state.ledger.len(), 1);
    assert!(state.cart.is_empty());
}

#[test]
fn import_then_sell_uses_imported_prices() {
    let tmp = TempDir::new().unwrap();
    let store = Store::open(tmp.path()).unwrap();
    let (mut state, _) = AppState::load_session(&store);

    let imported =
        till_core::catalog::parse_import(r#"[{"name":"Milk","price":30},{"name":"Eggs","price":4.5}]"#)
            .unwrap();
    state.catalog.replace_all(imported).unwrap();
    state.persist(&store).unwrap();

    let eggs = state.catalog.get("Eggs").unwrap().clone();
    state.cart.add_line(&eggs, 10).unwrap();
    let outcome = checkout(&mut state, &store, 0.0);
    assert_eq!(outcome.total.cents(), 4500);
}
