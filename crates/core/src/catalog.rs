use rust_decimal::Decimal;

use crate::domain::menu::MenuItem;

/// The fixed menu the program ships with. Prices are in cents.
const BUILTIN_ITEMS: [(&str, i64); 5] = [
    ("Burger", 899),
    ("Fries", 349),
    ("Soda", 199),
    ("Salad", 750),
    ("Pizza Slice", 400),
];

/// Insertion-ordered menu catalog. Built once at startup and never mutated.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_ITEMS
                .iter()
                .map(|(name, cents)| MenuItem::new(*name, Decimal::new(*cents, 2)))
                .collect(),
        )
    }

    /// Case-insensitive lookup returning the canonical catalog item.
    pub fn find(&self, name: &str) -> Option<&MenuItem> {
        let key = name.to_lowercase();
        self.items.iter().find(|item| item.key() == key)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Menu listing with names left-aligned to a fixed column and prices to
    /// two decimals, in insertion order.
    pub fn render(&self) -> String {
        let mut out = String::from("\n--- Menu ---\n");
        for item in &self.items {
            out.push_str(&format!("{:<15} ${:.2}\n", item.name, item.price));
        }
        out.push_str("------------");
        out
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::Catalog;

    #[test]
    fn lookup_is_case_insensitive_and_returns_the_canonical_item() {
        let catalog = Catalog::builtin();
        for spelling in ["BURGER", "burger", "Burger", "bUrGeR"] {
            let item = catalog.find(spelling).expect("burger is on the menu");
            assert_eq!(item.name, "Burger");
            assert_eq!(item.price, Decimal::new(899, 2));
        }
    }

    #[test]
    fn multi_word_names_resolve() {
        let catalog = Catalog::builtin();
        let item = catalog.find("pizza slice").expect("pizza slice is on the menu");
        assert_eq!(item.name, "Pizza Slice");
    }

    #[test]
    fn absent_name_returns_none() {
        assert!(Catalog::builtin().find("Taco").is_none());
    }

    #[test]
    fn render_lists_items_in_menu_order_with_padded_columns() {
        let listing = Catalog::builtin().render();
        assert_eq!(
            listing,
            "\n--- Menu ---\n\
             Burger          $8.99\n\
             Fries           $3.49\n\
             Soda            $1.99\n\
             Salad           $7.50\n\
             Pizza Slice     $4.00\n\
             ------------"
        );
    }
}
