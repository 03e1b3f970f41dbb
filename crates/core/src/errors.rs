use thiserror::Error;

/// Why a quantity was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuantityFault {
    /// The quantity text did not parse as a whole number.
    NotAnInteger,
    /// The quantity parsed but was zero or negative.
    NotPositive,
}

/// Everything that can go wrong while processing one command line. All
/// variants are recoverable: the session reports them and keeps reading.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    #[error("invalid quantity ({0:?})")]
    InvalidQuantity(QuantityFault),
    #[error("input line cannot be split into item name and quantity")]
    InvalidFormat,
    #[error("no menu entry for {name:?}")]
    ItemNotFound { name: String },
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl OrderError {
    /// Console-facing text, kept separate from the log-facing `Display` form.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidQuantity(QuantityFault::NotAnInteger) => {
                "Invalid quantity. Please enter a whole number for the quantity.".to_owned()
            }
            Self::InvalidQuantity(QuantityFault::NotPositive) => {
                "Quantity must be a positive number.".to_owned()
            }
            Self::InvalidFormat => {
                "Invalid input format. Please enter item name and quantity (e.g., 'Fries 1')."
                    .to_owned()
            }
            Self::ItemNotFound { name } => {
                format!("Item '{name}' not found on the menu. Please check the spelling.")
            }
            Self::Unexpected(detail) => format!("An unexpected error occurred: {detail}"),
        }
    }
}
