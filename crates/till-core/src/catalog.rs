//! Product catalog.
//!
//! Products are keyed by name and kept in insertion order. There is no
//! per-product delete; the catalog changes through upsert or a bulk,
//! all-or-nothing replace.

use crate::error::TillError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A sellable product with its current price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Product name (unique key within the catalog).
    pub name: String,
    /// Current unit price.
    pub price: Money,
}

/// The set of sellable products, in insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a product, or replace the price of the existing product with
    /// the same name. The price is rounded to 2 decimals on write.
    pub fn upsert(&mut self, name: &str, price: f64) -> Result<(), TillError> {
        if name.is_empty() {
            return Err(TillError::InvalidInput(
                "product name must not be empty".to_string(),
            ));
        }
        let price = validate_price(price)?;
        if let Some(existing) = self.products.iter_mut().find(|p| p.name == name) {
            existing.price = price;
        } else {
            self.products.push(Product {
                name: name.to_string(),
                price,
            });
        }
        Ok(())
    }

    /// Atomically replace the entire catalog.
    ///
    /// Every entry is validated before anything is mutated; on error the
    /// existing catalog is left untouched.
    pub fn replace_all(&mut self, entries: Vec<Product>) -> Result<(), TillError> {
        for entry in &entries {
            if entry.name.is_empty() {
                return Err(TillError::InvalidInput(
                    "product name must not be empty".to_string(),
                ));
            }
            if entry.price.is_negative() {
                return Err(TillError::InvalidInput(format!(
                    "price for '{}' must not be negative",
                    entry.name
                )));
            }
        }
        self.products = entries;
        Ok(())
    }

    /// Read-only view of the catalog, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by name.
    pub fn get(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Render the catalog as a pretty-printed JSON array for export.
    pub fn export_json(&self) -> String {
        serde_json::to_string_pretty(&self.products).unwrap_or_else(|_| "[]".to_string())
    }
}

/// Parse an import file: a JSON array of `{"name": ..., "price": ...}`.
///
/// Any entry missing a name, with an empty name, or with a non-numeric
/// price rejects the entire file; there is no partial import.
pub fn parse_import(json: &str) -> Result<Vec<Product>, TillError> {
    let entries: Vec<Product> =
        serde_json::from_str(json).map_err(|e| TillError::ImportFormat(e.to_string()))?;
    for entry in &entries {
        if entry.name.is_empty() {
            return Err(TillError::ImportFormat(
                "entry with empty product name".to_string(),
            ));
        }
        if entry.price.is_negative() {
            return Err(TillError::ImportFormat(format!(
                "negative price for '{}'",
                entry.name
            )));
        }
    }
    Ok(entries)
}

fn validate_price(price: f64) -> Result<Money, TillError> {
    match Money::from_decimal(price) {
        Some(p) if !p.is_negative() => Ok(p),
        _ => Err(TillError::InvalidInput(format!(
            "price must be a finite non-negative number, got {price}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_inserts() {
        let mut catalog = Catalog::new();
        catalog.upsert("Bread", 25.0).unwrap();

        assert_eq!(catalog.len(), 1);
        let p = catalog.get("Bread").unwrap();
        assert_eq!(p.price.cents(), 2500);
    }

    #[test]
    fn test_upsert_replaces_price_not_duplicates() {
        let mut catalog = Catalog::new();
        catalog.upsert("Bread", 25.0).unwrap();
        catalog.upsert("Bread", 27.5).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("Bread").unwrap().price.cents(), 2750);
    }

    #[test]
    fn test_upsert_rounds_price() {
        let mut catalog = Catalog::new();
        catalog.upsert("Cheese", 49.999).unwrap();
        assert_eq!(catalog.get("Cheese").unwrap().price.cents(), 5000);
    }

    #[test]
    fn test_upsert_rejects_bad_input() {
        let mut catalog = Catalog::new();
        assert!(matches!(
            catalog.upsert("", 10.0),
            Err(TillError::InvalidInput(_))
        ));
        assert!(matches!(
            catalog.upsert("Bread", -1.0),
            Err(TillError::InvalidInput(_))
        ));
        assert!(matches!(
            catalog.upsert("Bread", f64::NAN),
            Err(TillError::InvalidInput(_))
        ));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut catalog = Catalog::new();
        catalog.upsert("Bread", 25.0).unwrap();
        catalog.upsert("Milk", 30.0).unwrap();
        catalog.upsert("Bread", 26.0).unwrap();

        let names: Vec<&str> = catalog.products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Bread", "Milk"]);
    }

    #[test]
    fn test_parse_import() {
        let products =
            parse_import(r#"[{"name":"Milk","price":30}, {"name":"Eggs","price":4.5}]"#).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].price.cents(), 3000);
    }

    #[test]
    fn test_import_rejects_whole_file_on_missing_price() {
        let result = parse_import(r#"[{"name":"Milk","price":30}, {"name":"Eggs"}]"#);
        assert!(matches!(result, Err(TillError::ImportFormat(_))));
    }

    #[test]
    fn test_import_rejects_non_numeric_price() {
        let result = parse_import(r#"[{"name":"Milk","price":"30"}]"#);
        assert!(matches!(result, Err(TillError::ImportFormat(_))));
    }

    #[test]
    fn test_replace_all_is_all_or_nothing() {
        let mut catalog = Catalog::new();
        catalog.upsert("Bread", 25.0).unwrap();

        let bad = vec![
            Product {
                name: "Milk".to_string(),
                price: Money::from_cents(3000),
            },
            Product {
                name: String::new(),
                price: Money::from_cents(100),
            },
        ];
        assert!(catalog.replace_all(bad).is_err());

        // Failed replace leaves the previous catalog intact.
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("Bread").is_some());
    }

    #[test]
    fn test_export_json_is_array() {
        let mut catalog = Catalog::new();
        catalog.upsert("Bread", 25.0).unwrap();

        let exported = catalog.export_json();
        let parsed: Vec<Product> = serde_json::from_str(&exported).unwrap();
        assert_eq!(parsed, catalog.products().to_vec());
    }
}
