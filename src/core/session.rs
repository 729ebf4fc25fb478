use crate::core::checkout::{checkout, Receipt};
use crate::core::{Cart, Catalog, ItemId, LinePolicy, OrderSummary, SettingsProvider};
use crate::utils::error::{OrderError, Result};

/// Display settings carried by a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    pub restaurant_name: String,
    pub currency_symbol: String,
    pub line_policy: LinePolicy,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            restaurant_name: "Restaurant".to_string(),
            currency_symbol: "$".to_string(),
            line_policy: LinePolicy::default(),
        }
    }
}

impl SessionSettings {
    pub fn from_provider(provider: &dyn SettingsProvider) -> Self {
        Self {
            restaurant_name: provider.restaurant_name().to_string(),
            currency_symbol: provider.currency_symbol().to_string(),
            line_policy: provider.line_policy(),
        }
    }
}

/// One customer's ordering session: the menu plus the cart built from it.
#[derive(Debug, Clone)]
pub struct OrderSession {
    catalog: Catalog,
    cart: Cart,
    settings: SessionSettings,
    orders_placed: usize,
}

impl OrderSession {
    pub fn new(catalog: Catalog, settings: SessionSettings) -> Self {
        Self {
            cart: Cart::new(settings.line_policy),
            catalog,
            settings,
            orders_placed: 0,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn orders_placed(&self) -> usize {
        self.orders_placed
    }

    pub fn add_item(&mut self, item_id: ItemId) -> Result<()> {
        let item = self
            .catalog
            .find(item_id)
            .cloned()
            .ok_or(OrderError::UnknownItem { item_id })?;
        self.cart.add(item)
    }

    pub fn remove_line(&mut self, line_id: ItemId) -> usize {
        self.cart.remove(line_id)
    }

    pub fn set_quantity(&mut self, line_id: ItemId, quantity: i64) -> Result<usize> {
        self.cart.set_quantity(line_id, quantity)
    }

    pub fn increment(&mut self, line_id: ItemId) -> Result<usize> {
        self.cart.increment(line_id)
    }

    pub fn decrement(&mut self, line_id: ItemId) -> Result<usize> {
        self.cart.decrement(line_id)
    }

    pub fn clear(&mut self) {
        self.cart.clear();
    }

    pub fn summary(&self) -> Result<OrderSummary> {
        OrderSummary::from_cart(&self.cart)
    }

    /// Runs checkout; the cart is emptied only when an order is placed.
    pub fn place_order(&mut self) -> Result<Receipt> {
        let receipt = checkout(&mut self.cart)?;
        self.orders_placed += 1;
        Ok(receipt)
    }
}
