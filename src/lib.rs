pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use app::repl::{Repl, SessionCommand, SessionStats};
#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{MenuConfig, SampleMenu};
pub use crate::core::checkout::{checkout, Receipt};
pub use crate::core::session::{OrderSession, SessionSettings};
pub use crate::core::{Cart, CartLine, Catalog, Category, ItemId, LinePolicy, MenuItem, Money, OrderSummary};
pub use utils::error::{OrderError, Result};
