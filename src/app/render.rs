//! Plain-text views of the menu, the order panel and checkout outcomes.

use crate::core::checkout::Receipt;
use crate::core::{Catalog, OrderSummary};
use crate::utils::error::OrderError;
use std::fmt::Write;

pub fn render_menu(catalog: &Catalog, restaurant_name: &str, symbol: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", restaurant_name);
    for category in catalog.categories() {
        let _ = writeln!(out);
        let _ = writeln!(out, "== {} ==", category.name);
        for item in &category.items {
            let _ = writeln!(
                out,
                "  [{}] {:<24} {:>8}",
                item.id,
                item.name,
                item.price.display_with(symbol)
            );
            if !item.description.is_empty() {
                let _ = writeln!(out, "      {}", item.description);
            }
        }
    }
    out
}

pub fn render_order(summary: &OrderSummary, symbol: &str) -> String {
    let mut out = String::from("Your Order\n");
    if summary.is_empty() {
        out.push_str("  (no items yet)\n");
    }
    for line in &summary.lines {
        let _ = writeln!(
            out,
            "  [{}] {:<24} {} x {} = {}",
            line.id,
            line.name,
            line.unit_price.display_with(symbol),
            line.quantity,
            line.subtotal.display_with(symbol)
        );
    }
    let _ = writeln!(out, "Total: {}", summary.total.display_with(symbol));
    out
}

pub fn render_receipt(receipt: &Receipt, symbol: &str) -> String {
    format!(
        "Order Placed: Your order total is {}\nOrder number: {}\n",
        receipt.total().display_with(symbol),
        receipt.order_number
    )
}

/// The notification shown for a rejected action.
pub fn render_error(err: &OrderError) -> String {
    format!("{}: {}\n", err.user_friendly_message(), err.recovery_suggestion())
}
