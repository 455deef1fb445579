//! The working cart for the sale being built.

use crate::catalog::Product;
use crate::error::TillError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A line in the working cart.
///
/// `price` is a snapshot of the product price at add time, not a live
/// reference into the catalog; a later price change does not affect lines
/// already in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Product name at add time.
    pub name: String,
    /// Unit price at add time.
    pub price: Money,
    /// Number of units, always at least 1.
    pub count: u32,
}

impl CartLine {
    /// Line subtotal: `price * count`, exact in cents.
    pub fn subtotal(&self) -> Money {
        self.price.multiply(self.count as i64)
    }
}

/// The mutable, in-progress list of items for the sale being built.
///
/// Lines are positional: removing a line shifts later indices down by one,
/// and identical products are never merged into a single line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new line snapshotting the product's current name and price.
    ///
    /// Rejects a zero count; each call creates a new line even if an equal
    /// one already exists.
    pub fn add_line(&mut self, product: &Product, count: u32) -> Result<(), TillError> {
        if count == 0 {
            return Err(TillError::InvalidInput(
                "count must be a positive integer".to_string(),
            ));
        }
        self.lines.push(CartLine {
            name: product.name.clone(),
            price: product.price,
            count,
        });
        Ok(())
    }

    /// Remove the line at `index`, returning it.
    ///
    /// Indices are positional, not stable identifiers; a caller holding an
    /// index from before a removal must re-resolve it.
    pub fn remove_at(&mut self, index: usize) -> Result<CartLine, TillError> {
        if index >= self.lines.len() {
            return Err(TillError::OutOfRange {
                index,
                len: self.lines.len(),
            });
        }
        Ok(self.lines.remove(index))
    }

    /// Sum of `price * count` over all lines, exact in cents.
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Empty the cart. Used by the checkout engine on success and on logout.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// The current lines, in add order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bread() -> Product {
        Product {
            name: "Bread".to_string(),
            price: Money::from_cents(2500),
        }
    }

    fn milk() -> Product {
        Product {
            name: "Milk".to_string(),
            price: Money::from_cents(3000),
        }
    }

    #[test]
    fn test_add_line_snapshots_product() {
        let mut cart = Cart::new();
        cart.add_line(&bread(), 3).unwrap();

        assert_eq!(cart.len(), 1);
        let line = &cart.lines()[0];
        assert_eq!(line.name, "Bread");
        assert_eq!(line.price.cents(), 2500);
        assert_eq!(line.count, 3);
    }

    #[test]
    fn test_add_line_rejects_zero_count() {
        let mut cart = Cart::new();
        assert!(matches!(
            cart.add_line(&bread(), 0),
            Err(TillError::InvalidInput(_))
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_identical_lines_are_not_merged() {
        let mut cart = Cart::new();
        cart.add_line(&bread(), 1).unwrap();
        cart.add_line(&bread(), 1).unwrap();

        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_total_is_exact_sum() {
        let mut cart = Cart::new();
        cart.add_line(&bread(), 3).unwrap();
        cart.add_line(&milk(), 2).unwrap();

        assert_eq!(cart.total().cents(), 3 * 2500 + 2 * 3000);
    }

    #[test]
    fn test_remove_at_removes_that_line() {
        let mut cart = Cart::new();
        cart.add_line(&bread(), 1).unwrap();
        cart.add_line(&milk(), 1).unwrap();

        let removed = cart.remove_at(0).unwrap();
        assert_eq!(removed.name, "Bread");
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].name, "Milk");
    }

    #[test]
    fn test_remove_at_out_of_range_leaves_cart_unchanged() {
        let mut cart = Cart::new();
        cart.add_line(&bread(), 1).unwrap();
        cart.add_line(&milk(), 1).unwrap();

        let result = cart.remove_at(5);
        assert!(matches!(
            result,
            Err(TillError::OutOfRange { index: 5, len: 2 })
        ));
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_cart_price_unaffected_by_catalog_change() {
        let mut cart = Cart::new();
        let mut product = bread();
        cart.add_line(&product, 1).unwrap();

        product.price = Money::from_cents(9900);
        assert_eq!(cart.lines()[0].price.cents(), 2500);
    }
}
