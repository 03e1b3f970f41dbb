use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single item on the menu. The display-cased `name` is what users see;
/// identity for catalog and order keying is the lower-cased [`key`](Self::key).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: Decimal,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self { name: name.into(), price }
    }

    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (${:.2})", self.name, self.price)
    }
}
