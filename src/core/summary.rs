use crate::core::{Cart, CartLine, ItemId, Money};
use crate::utils::error::Result;
use serde::Serialize;

/// A cart line as the order panel shows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderLine {
    pub id: ItemId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub subtotal: Money,
}

impl OrderLine {
    pub fn from_line(line: &CartLine) -> Result<Self> {
        Ok(Self {
            id: line.id(),
            name: line.item.name.clone(),
            unit_price: line.item.price,
            quantity: line.quantity(),
            subtotal: line.subtotal()?,
        })
    }
}

/// Render inputs for the order panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub lines: Vec<OrderLine>,
    pub item_count: u64,
    pub total: Money,
}

impl OrderSummary {
    pub fn from_lines(lines: &[CartLine]) -> Result<Self> {
        let lines = lines
            .iter()
            .map(OrderLine::from_line)
            .collect::<Result<Vec<_>>>()?;
        let item_count = lines.iter().map(|l| u64::from(l.quantity)).sum();
        let total = Money::try_sum(lines.iter().map(|l| l.subtotal))?;
        Ok(Self {
            lines,
            item_count,
            total,
        })
    }

    pub fn from_cart(cart: &Cart) -> Result<Self> {
        Self::from_lines(cart.lines())
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
