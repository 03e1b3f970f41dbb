pub mod catalog;
pub mod command;
pub mod domain;
pub mod errors;
pub mod pricing;

pub use catalog::Catalog;
pub use command::{parse_line, Command};
pub use domain::menu::MenuItem;
pub use domain::order::{Order, OrderLine};
pub use errors::{OrderError, QuantityFault};
