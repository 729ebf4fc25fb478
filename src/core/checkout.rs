use crate::core::{Cart, Money, OrderSummary};
use crate::utils::error::{OrderError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A placed order.
#[derive(Debug, Clone, Serialize)]
pub struct Receipt {
    pub order_number: String,
    pub placed_at: DateTime<Utc>,
    #[serde(flatten)]
    pub order: OrderSummary,
}

impl Receipt {
    pub fn total(&self) -> Money {
        self.order.total
    }
}

/// Places the order held by `cart`.
///
/// An empty cart fails with [`OrderError::EmptyCart`]. The cart is cleared
/// only when a receipt is produced.
pub fn checkout(cart: &mut Cart) -> Result<Receipt> {
    if cart.is_empty() {
        tracing::warn!("Checkout attempted with an empty cart");
        return Err(OrderError::EmptyCart);
    }

    let order = OrderSummary::from_cart(cart)?;
    let placed_at = Utc::now();
    let receipt = Receipt {
        order_number: format!("ord_{}", placed_at.format("%Y%m%d_%H%M%S_%3f")),
        placed_at,
        order,
    };
    cart.clear();

    tracing::info!(
        "Order {} placed: {} line(s), total {}",
        receipt.order_number,
        receipt.order.lines.len(),
        receipt.total()
    );
    Ok(receipt)
}
