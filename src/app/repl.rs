use crate::app::render::{render_error, render_menu, render_order, render_receipt};
use crate::core::session::OrderSession;
use crate::core::ItemId;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};

/// Commands accepted inside an ordering session.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum SessionCommand {
    /// Show the menu
    Menu,
    /// Add one unit of a menu item
    Add { item_id: ItemId },
    /// Remove a line from the order
    Remove { line_id: ItemId },
    /// Set the quantity of a line
    #[command(alias = "quantity")]
    Qty {
        line_id: ItemId,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Increase a line's quantity by one
    Inc { line_id: ItemId },
    /// Decrease a line's quantity by one
    Dec { line_id: ItemId },
    /// Show the current order
    Cart,
    /// Print the current order as JSON
    Summary,
    /// Show the order total
    Total,
    /// Place the order
    Checkout,
    /// Empty the cart
    Clear,
    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, Parser)]
#[command(multicall = true)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

/// Parses one input line. Blank lines and `#` comments yield `None`.
pub fn parse_command(line: &str) -> std::result::Result<Option<SessionCommand>, clap::Error> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    SessionLine::try_parse_from(line.split_whitespace()).map(|parsed| Some(parsed.command))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub commands: usize,
    pub rejected: usize,
    pub orders_placed: usize,
}

enum Step {
    Continue(String),
    Quit,
}

pub struct Repl<'a> {
    session: &'a mut OrderSession,
    interactive: bool,
}

impl<'a> Repl<'a> {
    pub fn new(session: &'a mut OrderSession) -> Self {
        Self {
            session,
            interactive: false,
        }
    }

    /// Prints a prompt before each command.
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Runs commands until `quit` or end of input. Rejected commands are
    /// reported to `output` and the session carries on.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<SessionStats> {
        let mut stats = SessionStats::default();
        let placed_before = self.session.orders_placed();

        if self.interactive {
            writeln!(output, "Type 'help' for commands.")?;
            write!(output, "> ")?;
            output.flush()?;
        }

        for line in input.lines() {
            let line = line?;
            let step = match parse_command(&line) {
                Ok(None) => None,
                Ok(Some(command)) => {
                    stats.commands += 1;
                    tracing::debug!("Session command: {:?}", command);
                    match self.execute(command) {
                        Ok(step) => Some(step),
                        Err(e) => {
                            stats.rejected += 1;
                            tracing::warn!("Command rejected: {}", e);
                            Some(Step::Continue(render_error(&e)))
                        }
                    }
                }
                Err(e) => {
                    if !matches!(
                        e.kind(),
                        clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
                    ) {
                        stats.rejected += 1;
                    }
                    Some(Step::Continue(e.render().to_string()))
                }
            };

            match step {
                Some(Step::Quit) => break,
                Some(Step::Continue(text)) => write!(output, "{}", text)?,
                None => {}
            }
            if self.interactive {
                write!(output, "> ")?;
                output.flush()?;
            }
        }

        stats.orders_placed = self.session.orders_placed() - placed_before;
        Ok(stats)
    }

    fn execute(&mut self, command: SessionCommand) -> Result<Step> {
        let symbol = self.session.settings().currency_symbol.clone();
        let text = match command {
            SessionCommand::Menu => render_menu(
                self.session.catalog(),
                &self.session.settings().restaurant_name,
                &symbol,
            ),
            SessionCommand::Add { item_id } => {
                self.session.add_item(item_id)?;
                let name = self
                    .session
                    .catalog()
                    .find(item_id)
                    .map(|item| item.name.clone())
                    .unwrap_or_default();
                format!("Added {} ({})\n", name, self.total_line(&symbol)?)
            }
            SessionCommand::Remove { line_id } => match self.session.remove_line(line_id) {
                0 => format!("No line {} in the order\n", line_id),
                _ => format!("Removed line {} ({})\n", line_id, self.total_line(&symbol)?),
            },
            SessionCommand::Qty { line_id, quantity } => {
                let updated = self.session.set_quantity(line_id, quantity)?;
                self.updated_message(line_id, updated, &symbol)?
            }
            SessionCommand::Inc { line_id } => {
                let updated = self.session.increment(line_id)?;
                self.updated_message(line_id, updated, &symbol)?
            }
            SessionCommand::Dec { line_id } => {
                let updated = self.session.decrement(line_id)?;
                self.updated_message(line_id, updated, &symbol)?
            }
            SessionCommand::Cart => render_order(&self.session.summary()?, &symbol),
            SessionCommand::Summary => {
                format!("{}\n", serde_json::to_string_pretty(&self.session.summary()?)?)
            }
            SessionCommand::Total => format!("{}\n", self.total_line(&symbol)?),
            SessionCommand::Checkout => render_receipt(&self.session.place_order()?, &symbol),
            SessionCommand::Clear => {
                self.session.clear();
                "Cart cleared\n".to_string()
            }
            SessionCommand::Quit => return Ok(Step::Quit),
        };
        Ok(Step::Continue(text))
    }

    fn total_line(&self, symbol: &str) -> Result<String> {
        Ok(format!("Total: {}", self.session.cart().total()?.display_with(symbol)))
    }

    fn updated_message(&self, line_id: ItemId, updated: usize, symbol: &str) -> Result<String> {
        if updated == 0 {
            return Ok(format!("No line {} in the order\n", line_id));
        }
        let quantity = self
            .session
            .cart()
            .lines()
            .iter()
            .find(|l| l.id() == line_id)
            .map(|l| l.quantity())
            .unwrap_or_default();
        Ok(format!(
            "Line {} quantity is now {} ({})\n",
            line_id,
            quantity,
            self.total_line(symbol)?
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            parse_command("add 3").unwrap(),
            Some(SessionCommand::Add { item_id: ItemId(3) })
        );
        assert_eq!(
            parse_command("  qty 2 -1 ").unwrap(),
            Some(SessionCommand::Qty {
                line_id: ItemId(2),
                quantity: -1
            })
        );
        assert_eq!(parse_command("exit").unwrap(), Some(SessionCommand::Quit));
        assert_eq!(parse_command("# comment").unwrap(), None);
        assert_eq!(parse_command("   ").unwrap(), None);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse_command("add").is_err());
        assert!(parse_command("add garlic").is_err());
        assert!(parse_command("order pizza").is_err());
    }
}
