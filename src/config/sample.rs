use crate::core::{Category, MenuItem, MenuSource, Money};
use crate::utils::error::Result;

/// The built-in menu used when no menu file is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleMenu;

fn item(id: u32, name: &str, description: &str, cents: u64) -> MenuItem {
    MenuItem::new(id, name, description, Money::from_minor(cents))
}

impl MenuSource for SampleMenu {
    fn categories(&self) -> Result<Vec<Category>> {
        Ok(vec![
            Category::new(
                "Appetizers",
                vec![
                    item(1, "Garlic Bread", "Toasted bread with garlic butter", 499),
                    item(2, "Bruschetta", "Toasted bread with tomato, basil, and balsamic", 699),
                    item(3, "Mozzarella Sticks", "Breaded and fried mozzarella cheese", 799),
                ],
            ),
            Category::new(
                "Entrees",
                vec![
                    item(4, "Spaghetti Bolognese", "Pasta with meat sauce", 1299),
                    item(5, "Chicken Parmesan", "Breaded chicken breast with marinara and mozzarella", 1599),
                    item(6, "Grilled Salmon", "Salmon fillet with lemon butter sauce", 1899),
                ],
            ),
            Category::new(
                "Desserts",
                vec![
                    item(7, "Tiramisu", "Classic Italian dessert with espresso and mascarpone", 699),
                    item(8, "Cheesecake", "Rich and creamy New York-style cheesecake", 799),
                    item(9, "Gelato", "Italian-style ice cream in various flavors", 499),
                ],
            ),
        ])
    }
}
