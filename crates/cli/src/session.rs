use std::io::{BufRead, Write};

use tracing::{debug, info};

use orderup_core::{parse_line, Catalog, Command, Order, OrderError};

/// The interactive ordering loop: read a line, parse it, dispatch against the
/// catalog and the running order, print feedback, repeat until `done` or end
/// of input. Generic over the streams so tests can drive it with buffers.
pub struct Session<R, W> {
    catalog: Catalog,
    order: Order,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(catalog: Catalog, input: R, output: W) -> Self {
        Self { catalog, order: Order::new(), input, output }
    }

    /// Runs the loop to completion and prints the finalized order. Only
    /// terminal I/O failures surface as errors; every command-level failure
    /// is reported to the user and the loop keeps going.
    pub fn run(&mut self) -> std::io::Result<()> {
        info!("starting interactive order session");
        writeln!(self.output, "Welcome to the food order system!")?;
        writeln!(self.output, "{}", self.catalog.render())?;

        loop {
            writeln!(
                self.output,
                "\nEnter an item name and quantity (e.g., 'Burger 2'), or 'done' to finish, or 'menu' to see the menu again."
            )?;
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                // End of input counts as an implicit 'done'.
                Ok(0) => {
                    debug!("input stream closed, finalizing order");
                    break;
                }
                Ok(_) => {}
                Err(error) => {
                    self.report(&OrderError::Unexpected(error.to_string()))?;
                    break;
                }
            }

            match parse_line(&line) {
                Ok(Command::Done) => break,
                Ok(Command::Menu) => writeln!(self.output, "{}", self.catalog.render())?,
                Ok(Command::Add { name, quantity }) => self.add_to_order(&name, quantity)?,
                Err(error) => self.report(&error)?,
            }
        }

        self.finalize()
    }

    fn add_to_order(&mut self, name: &str, quantity: i64) -> std::io::Result<()> {
        let Some(item) = self.catalog.find(name).cloned() else {
            return self.report(&OrderError::ItemNotFound { name: name.to_owned() });
        };
        match self.order.add(item.clone(), quantity) {
            Ok(cumulative) => {
                debug!(item = %item.name, quantity, cumulative, "order line updated");
                writeln!(self.output, "Added {} x {} to the order.", quantity, item.name)
            }
            Err(error) => self.report(&error),
        }
    }

    fn report(&mut self, error: &OrderError) -> std::io::Result<()> {
        debug!(error = %error, "command rejected");
        writeln!(self.output, "{}", error.user_message())
    }

    fn finalize(&mut self) -> std::io::Result<()> {
        info!(lines = self.order.lines().len(), total = %self.order.total(), "order finalized");
        writeln!(self.output, "\n--- Order Finalized ---")?;
        writeln!(self.output, "{}", self.order.render_summary())?;
        writeln!(self.output, "Total Price: ${:.2}", self.order.total())?;
        writeln!(self.output, "Thank you for your order!")
    }
}
