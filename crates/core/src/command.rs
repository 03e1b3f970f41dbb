use crate::errors::{OrderError, QuantityFault};

/// One parsed line of user input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Finish the session and print the order.
    Done,
    /// Reprint the menu listing.
    Menu,
    /// Add `quantity` of the named item. The name is resolved against the
    /// catalog at dispatch time; the quantity sign is checked by the order.
    Add { name: String, quantity: i64 },
}

/// Parses one input line. Keywords are case-insensitive after trimming; any
/// other line splits on its last whitespace into an item name and a quantity.
pub fn parse_line(input: &str) -> Result<Command, OrderError> {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("done") {
        return Ok(Command::Done);
    }
    if trimmed.eq_ignore_ascii_case("menu") {
        return Ok(Command::Menu);
    }

    let Some((name_part, quantity_part)) = trimmed.rsplit_once(char::is_whitespace) else {
        return Err(OrderError::InvalidFormat);
    };
    let quantity = quantity_part
        .parse::<i64>()
        .map_err(|_| OrderError::InvalidQuantity(QuantityFault::NotAnInteger))?;

    Ok(Command::Add { name: name_part.trim_end().to_owned(), quantity })
}

#[cfg(test)]
mod tests {
    use crate::errors::{OrderError, QuantityFault};

    use super::{parse_line, Command};

    #[test]
    fn keywords_match_case_insensitively_after_trimming() {
        for line in ["done", "DONE", "  Done  "] {
            assert_eq!(parse_line(line), Ok(Command::Done));
        }
        for line in ["menu", "MENU", "\tMenu\n"] {
            assert_eq!(parse_line(line), Ok(Command::Menu));
        }
    }

    #[test]
    fn splits_name_and_quantity_on_the_last_whitespace() {
        assert_eq!(
            parse_line("Burger 2"),
            Ok(Command::Add { name: "Burger".to_owned(), quantity: 2 })
        );
        assert_eq!(
            parse_line("Pizza Slice 2"),
            Ok(Command::Add { name: "Pizza Slice".to_owned(), quantity: 2 })
        );
    }

    #[test]
    fn extra_spacing_between_name_and_quantity_is_tolerated() {
        assert_eq!(
            parse_line("  Fries   1 \n"),
            Ok(Command::Add { name: "Fries".to_owned(), quantity: 1 })
        );
    }

    #[test]
    fn line_without_whitespace_is_an_invalid_format() {
        assert_eq!(parse_line("Soda"), Err(OrderError::InvalidFormat));
        assert_eq!(parse_line(""), Err(OrderError::InvalidFormat));
        assert_eq!(parse_line("   "), Err(OrderError::InvalidFormat));
    }

    #[test]
    fn non_integer_quantity_is_an_invalid_quantity() {
        for line in ["Burger two", "Burger 2.5", "Pizza Slice x"] {
            assert_eq!(
                parse_line(line),
                Err(OrderError::InvalidQuantity(QuantityFault::NotAnInteger))
            );
        }
    }

    #[test]
    fn negative_quantities_parse_and_are_left_to_the_order_guard() {
        assert_eq!(
            parse_line("Burger -3"),
            Ok(Command::Add { name: "Burger".to_owned(), quantity: -3 })
        );
    }
}
