use rust_decimal::Decimal;

use crate::domain::order::OrderLine;

/// Price × quantity for a single order line.
pub fn line_total(line: &OrderLine) -> Decimal {
    line.item.price * Decimal::from(line.quantity)
}

/// Sum of all line totals; zero for an empty order.
pub fn order_total(lines: &[OrderLine]) -> Decimal {
    lines.iter().map(line_total).sum()
}
