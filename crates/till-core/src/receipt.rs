//! Plain-text receipt rendering.

use crate::cart::CartLine;
use crate::money::Money;
use std::fmt::Write as _;

/// Render the receipt document for one sale.
///
/// Contains the header, order id, formatted date, payment label, discount,
/// note, one `name xCount = subtotal` line per item, and the final
/// discounted total. Amounts are rounded to 2 decimals here and nowhere
/// earlier.
pub fn render(
    order_id: &str,
    date: &str,
    payment: &str,
    discount: f64,
    note: &str,
    items: &[CartLine],
    total: Money,
) -> String {
    let mut doc = String::new();
    let _ = writeln!(doc, "--- RECEIPT ---");
    let _ = writeln!(doc, "Order: {order_id}");
    let _ = writeln!(doc, "Date: {date}");
    let _ = writeln!(doc, "Payment: {payment}");
    let _ = writeln!(doc, "Discount: {discount}%");
    let _ = writeln!(doc, "Note: {note}");
    let _ = writeln!(doc);
    for item in items {
        let _ = writeln!(
            doc,
            "{} x{} = {}",
            item.name,
            item.count,
            item.subtotal().display_amount()
        );
    }
    let _ = writeln!(doc);
    let _ = writeln!(doc, "TOTAL: {}", total.display_amount());
    doc.push_str("---------------");
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_contains_every_field() {
        let items = vec![
            CartLine {
                name: "Bread".to_string(),
                price: Money::from_cents(2500),
                count: 3,
            },
            CartLine {
                name: "Milk".to_string(),
                price: Money::from_cents(3000),
                count: 1,
            },
        ];
        let doc = render(
            "ORD-1735000000-0",
            "01.01.2026 12:00",
            "Cash",
            10.0,
            "regular customer",
            &items,
            Money::from_cents(9450),
        );

        assert!(doc.contains("ORD-1735000000-0"));
        assert!(doc.contains("01.01.2026 12:00"));
        assert!(doc.contains("Payment: Cash"));
        assert!(doc.contains("Discount: 10%"));
        assert!(doc.contains("Note: regular customer"));
        assert!(doc.contains("Bread x3 = 75.00"));
        assert!(doc.contains("Milk x1 = 30.00"));
        assert!(doc.contains("TOTAL: 94.50"));
    }
}
