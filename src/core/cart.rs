use crate::core::{CartLine, ItemId, LinePolicy, MenuItem, Money};
use crate::domain::model::checked_quantity;
use crate::utils::error::{OrderError, Result};

/// The order in progress.
///
/// Lines are addressed by their item id. Under [`LinePolicy::Append`] the same
/// id can occur on several lines; `remove`, `set_quantity`, `increment` and
/// `decrement` then act on every matching line.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    policy: LinePolicy,
}

impl Cart {
    pub fn new(policy: LinePolicy) -> Self {
        Self {
            lines: Vec::new(),
            policy,
        }
    }

    pub fn policy(&self) -> LinePolicy {
        self.policy
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity())).sum()
    }

    pub fn add(&mut self, item: MenuItem) -> Result<()> {
        if self.policy == LinePolicy::Merge {
            if let Some(line) = self.lines.iter_mut().find(|l| l.id() == item.id) {
                let bumped = i64::from(line.quantity()) + 1;
                line.set_quantity(bumped)?;
                tracing::debug!("Merged {} into existing line (quantity {})", item.id, bumped);
                return Ok(());
            }
        }

        tracing::debug!("Appending line for item {} ({})", item.id, item.name);
        self.lines.push(CartLine::new(item));
        Ok(())
    }

    /// Returns the number of lines removed; zero when `line_id` is absent.
    pub fn remove(&mut self, line_id: ItemId) -> usize {
        let before = self.lines.len();
        self.lines.retain(|l| l.id() != line_id);
        let removed = before - self.lines.len();
        tracing::debug!("Removed {} line(s) for {}", removed, line_id);
        removed
    }

    /// Returns the number of lines updated. The cart is unchanged on error.
    pub fn set_quantity(&mut self, line_id: ItemId, quantity: i64) -> Result<usize> {
        let quantity = checked_quantity(line_id, quantity)?;

        let mut updated = 0;
        for line in self.lines.iter_mut().filter(|l| l.id() == line_id) {
            line.set_quantity(i64::from(quantity))?;
            updated += 1;
        }
        if updated > 1 {
            tracing::warn!(
                "Quantity update for {} touched {} lines sharing the same id",
                line_id,
                updated
            );
        }
        tracing::debug!("Set quantity of {} to {} on {} line(s)", line_id, quantity, updated);
        Ok(updated)
    }

    pub fn increment(&mut self, line_id: ItemId) -> Result<usize> {
        self.adjust(line_id, 1)
    }

    /// Fails with `InvalidQuantity` when any matching line is already at 1.
    pub fn decrement(&mut self, line_id: ItemId) -> Result<usize> {
        self.adjust(line_id, -1)
    }

    fn adjust(&mut self, line_id: ItemId, delta: i64) -> Result<usize> {
        // Validate every matching line before touching any of them.
        let mut targets = Vec::new();
        for (idx, line) in self.lines.iter().enumerate() {
            if line.id() == line_id {
                let next = i64::from(line.quantity()) + delta;
                targets.push((idx, checked_quantity(line_id, next)?));
            }
        }

        for &(idx, quantity) in &targets {
            self.lines[idx].set_quantity(i64::from(quantity))?;
        }
        tracing::debug!("Adjusted {} by {} on {} line(s)", line_id, delta, targets.len());
        Ok(targets.len())
    }

    pub fn total(&self) -> Result<Money> {
        let subtotals = self
            .lines
            .iter()
            .map(CartLine::subtotal)
            .collect::<Result<Vec<_>>>()?;
        Money::try_sum(subtotals).map_err(|_| OrderError::AmountOverflow {
            context: "cart total".to_string(),
        })
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, cents: u64) -> MenuItem {
        MenuItem::new(id, format!("Item {}", id), "", Money::from_minor(cents))
    }

    #[test]
    fn test_add_appends_under_append_policy() {
        let mut cart = Cart::new(LinePolicy::Append);
        cart.add(item(1, 499)).unwrap();
        cart.add(item(1, 499)).unwrap();

        assert_eq!(cart.len(), 2);
        assert!(cart.lines().iter().all(|l| l.quantity() == 1));
        assert_eq!(cart.total().unwrap(), Money::from_minor(998));
    }

    #[test]
    fn test_add_merges_under_merge_policy() {
        let mut cart = Cart::new(LinePolicy::Merge);
        cart.add(item(1, 499)).unwrap();
        cart.add(item(2, 699)).unwrap();
        cart.add(item(1, 499)).unwrap();

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.lines()[0].quantity(), 2);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total().unwrap(), Money::from_minor(1697));
    }

    #[test]
    fn test_remove_missing_line_is_noop() {
        let mut cart = Cart::default();
        cart.add(item(1, 499)).unwrap();

        assert_eq!(cart.remove(ItemId(99)), 0);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total().unwrap(), Money::from_minor(499));
    }

    #[test]
    fn test_set_quantity_below_one_leaves_cart_unchanged() {
        let mut cart = Cart::default();
        cart.add(item(2, 699)).unwrap();
        cart.set_quantity(ItemId(2), 3).unwrap();

        let err = cart.set_quantity(ItemId(2), 0).unwrap_err();
        assert!(matches!(err, OrderError::InvalidQuantity { line_id: ItemId(2), quantity: 0 }));
        assert_eq!(cart.lines()[0].quantity(), 3);
        assert_eq!(cart.total().unwrap(), Money::from_minor(2097));
    }

    #[test]
    fn test_set_quantity_on_unknown_line_updates_nothing() {
        let mut cart = Cart::default();
        cart.add(item(2, 699)).unwrap();
        assert_eq!(cart.set_quantity(ItemId(5), 4).unwrap(), 0);
        assert_eq!(cart.total().unwrap(), Money::from_minor(699));
    }

    #[test]
    fn test_decrement_stops_at_one() {
        let mut cart = Cart::default();
        cart.add(item(3, 799)).unwrap();
        cart.increment(ItemId(3)).unwrap();
        assert_eq!(cart.lines()[0].quantity(), 2);

        cart.decrement(ItemId(3)).unwrap();
        assert!(cart.decrement(ItemId(3)).is_err());
        assert_eq!(cart.lines()[0].quantity(), 1);
    }

    #[test]
    fn test_decrement_is_all_or_nothing_across_duplicate_lines() {
        let mut cart = Cart::new(LinePolicy::Append);
        cart.add(item(1, 100)).unwrap();
        cart.add(item(1, 100)).unwrap();
        cart.lines[0].set_quantity(2).unwrap();

        assert!(cart.decrement(ItemId(1)).is_err());
        let quantities: Vec<u32> = cart.lines().iter().map(CartLine::quantity).collect();
        assert_eq!(quantities, [2, 1]);
    }

    #[test]
    fn test_total_overflow_is_reported() {
        let mut cart = Cart::default();
        cart.add(item(1, u64::MAX / 2)).unwrap();
        cart.add(item(2, u64::MAX / 2)).unwrap();
        cart.add(item(3, 10)).unwrap();
        assert!(matches!(cart.total(), Err(OrderError::AmountOverflow { .. })));
    }
}
