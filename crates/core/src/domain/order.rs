use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::menu::MenuItem;
use crate::errors::{OrderError, QuantityFault};
use crate::pricing;

/// One entry in an order: a menu item and its cumulative quantity.
/// Invariant: `quantity >= 1`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub item: MenuItem,
    pub quantity: u32,
}

/// The running order. Lines keep insertion order of first addition; re-adding
/// an item accumulates onto its existing line.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    lines: Vec<OrderLine>,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Adds `quantity` of `item` and returns the item's new cumulative
    /// quantity. Non-positive quantities are rejected without touching the
    /// order.
    pub fn add(&mut self, item: MenuItem, quantity: i64) -> Result<u32, OrderError> {
        if quantity <= 0 {
            return Err(OrderError::InvalidQuantity(QuantityFault::NotPositive));
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);

        let key = item.key();
        match self.lines.iter_mut().find(|line| line.item.key() == key) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(quantity);
                Ok(line.quantity)
            }
            None => {
                self.lines.push(OrderLine { item, quantity });
                Ok(quantity)
            }
        }
    }

    pub fn total(&self) -> Decimal {
        pricing::order_total(&self.lines)
    }

    /// Human-readable summary: one padded line per entry plus the total, or
    /// an explicit empty-order notice.
    pub fn render_summary(&self) -> String {
        if self.lines.is_empty() {
            return "The order is empty.".to_owned();
        }

        let mut out = String::from("\n--- Your Order Summary ---\n");
        for line in &self.lines {
            out.push_str(&format!(
                "{:<15} x {:<2} @ ${:.2} = ${:.2}\n",
                line.item.name,
                line.quantity,
                line.item.price,
                pricing::line_total(line)
            ));
        }
        out.push_str(&format!("\n{:<20} ${:.2}\n", "Total Price:", self.total()));
        out.push_str("--------------------------");
        out
    }
}
