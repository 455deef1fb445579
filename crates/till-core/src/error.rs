//! Till error types.

use thiserror::Error;

/// Errors that can occur in till operations.
///
/// Validation errors are recoverable and reported to the immediate caller;
/// persistence read errors degrade to empty collections at the session
/// boundary; persistence write errors never roll back a completed sale.
/// No variant is fatal to the process.
#[derive(Error, Debug)]
pub enum TillError {
    /// Bad name, price, count, or payment label.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Checkout attempted with an empty cart.
    #[error("The cart is empty")]
    EmptyCart,

    /// Cart line index out of bounds.
    #[error("Line {index} is out of range (cart has {len} lines)")]
    OutOfRange { index: usize, len: usize },

    /// Discount outside the `[0, 100]` range.
    #[error("Discount must be between 0 and 100, got {0}")]
    InvalidDiscount(f64),

    /// Import file rejected as a whole; the catalog is untouched.
    #[error("Import rejected: {0}")]
    ImportFormat(String),

    /// Durable record could not be read or parsed.
    #[error("Failed to read stored data: {0}")]
    PersistenceRead(String),

    /// Durable record could not be written; in-memory state is retained.
    #[error("Failed to write stored data: {0}")]
    PersistenceWrite(String),
}
