use crate::domain::money::Money;
use crate::utils::error::{OrderError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable menu item identifier. Cart lines are addressed by it too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim().parse().map(ItemId)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Money,
}

impl MenuItem {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id: ItemId(id),
            name: name.into(),
            description: description.into(),
            price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

impl Category {
    pub fn new(name: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }
}

/// One entry of the order in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub item: MenuItem,
    quantity: u32,
}

impl CartLine {
    pub fn new(item: MenuItem) -> Self {
        Self { item, quantity: 1 }
    }

    pub fn id(&self) -> ItemId {
        self.item.id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Rejects anything below 1, leaving the line untouched.
    pub fn set_quantity(&mut self, quantity: i64) -> Result<()> {
        self.quantity = checked_quantity(self.id(), quantity)?;
        Ok(())
    }

    pub fn subtotal(&self) -> Result<Money> {
        self.item
            .price
            .checked_mul(self.quantity)
            .ok_or_else(|| OrderError::AmountOverflow {
                context: format!("subtotal of line {}", self.id()),
            })
    }
}

pub(crate) fn checked_quantity(line_id: ItemId, quantity: i64) -> Result<u32> {
    if quantity < 1 {
        return Err(OrderError::InvalidQuantity { line_id, quantity });
    }
    u32::try_from(quantity).map_err(|_| OrderError::AmountOverflow {
        context: format!("quantity of line {}", line_id),
    })
}

/// How repeated adds of the same item are recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum LinePolicy {
    /// Every add appends a separate line.
    Append,
    /// Adding an item already in the cart bumps that line's quantity.
    #[default]
    Merge,
}

impl fmt::Display for LinePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinePolicy::Append => write!(f, "append"),
            LinePolicy::Merge => write!(f, "merge"),
        }
    }
}
