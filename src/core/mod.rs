pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod session;
pub mod summary;

pub use crate::core::cart::Cart;
pub use crate::core::catalog::Catalog;
pub use crate::core::summary::{OrderLine, OrderSummary};
pub use crate::domain::model::{CartLine, Category, ItemId, LinePolicy, MenuItem};
pub use crate::domain::money::Money;
pub use crate::domain::ports::{MenuSource, SettingsProvider};
pub use crate::utils::error::Result;
