use crate::core::{Category, ItemId, MenuItem, MenuSource};
use crate::utils::error::{OrderError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_unique_names};
use serde::Serialize;
use std::collections::HashMap;

/// The orderable menu for one session. Built once, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    categories: Vec<Category>,
    #[serde(skip)]
    index: HashMap<ItemId, (usize, usize)>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        for category in &categories {
            validate_non_empty_string("categories.name", &category.name)?;
            for item in &category.items {
                validate_non_empty_string(&format!("categories.items[{}].name", item.id), &item.name)?;
            }
        }
        validate_unique_names("categories.name", categories.iter().map(|c| c.name.as_str()))?;

        let mut index: HashMap<ItemId, (usize, usize)> = HashMap::new();
        for (c, category) in categories.iter().enumerate() {
            for (i, item) in category.items.iter().enumerate() {
                if let Some(&(pc, pi)) = index.get(&item.id) {
                    return Err(OrderError::DuplicateItemId {
                        item_id: item.id,
                        first: categories[pc].items[pi].name.clone(),
                        second: item.name.clone(),
                    });
                }
                index.insert(item.id, (c, i));
            }
        }

        tracing::debug!(
            "Catalog built with {} categories and {} items",
            categories.len(),
            index.len()
        );

        Ok(Self { categories, index })
    }

    pub fn from_source(source: &dyn MenuSource) -> Result<Self> {
        Self::new(source.categories()?)
    }

    /// The built-in three-course menu.
    pub fn sample() -> Result<Self> {
        Self::from_source(&crate::config::sample::SampleMenu)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn find(&self, id: ItemId) -> Option<&MenuItem> {
        self.index
            .get(&id)
            .map(|&(c, i)| &self.categories[c].items[i])
    }

    /// All items in display order.
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.categories.iter().flat_map(|c| c.items.iter())
    }

    pub fn item_count(&self) -> usize {
        self.index.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::Money;

    fn item(id: u32, name: &str, cents: u64) -> MenuItem {
        MenuItem::new(id, name, "", Money::from_minor(cents))
    }

    #[test]
    fn test_find_and_enumerate_in_display_order() {
        let catalog = Catalog::new(vec![
            Category::new("Appetizers", vec![item(1, "Garlic Bread", 499), item(2, "Bruschetta", 699)]),
            Category::new("Desserts", vec![item(9, "Gelato", 499)]),
        ])
        .unwrap();

        assert_eq!(catalog.item_count(), 3);
        assert_eq!(catalog.find(ItemId(9)).unwrap().name, "Gelato");
        assert!(catalog.find(ItemId(4)).is_none());
        let names: Vec<&str> = catalog.items().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Garlic Bread", "Bruschetta", "Gelato"]);
        assert_eq!(catalog.category("Desserts").unwrap().items.len(), 1);
    }

    #[test]
    fn test_duplicate_ids_across_categories_are_rejected() {
        let err = Catalog::new(vec![
            Category::new("Appetizers", vec![item(1, "Garlic Bread", 499)]),
            Category::new("Desserts", vec![item(1, "Gelato", 499)]),
        ])
        .unwrap_err();

        match err {
            OrderError::DuplicateItemId { item_id, first, second } => {
                assert_eq!(item_id, ItemId(1));
                assert_eq!(first, "Garlic Bread");
                assert_eq!(second, "Gelato");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_duplicate_or_blank_category_names_are_rejected() {
        assert!(Catalog::new(vec![
            Category::new("Entrees", vec![]),
            Category::new("Entrees", vec![]),
        ])
        .is_err());
        assert!(Catalog::new(vec![Category::new(" ", vec![])]).is_err());
        assert!(Catalog::new(vec![Category::new("Entrees", vec![item(4, "", 1299)])]).is_err());
    }

    #[test]
    fn test_json_keeps_display_order_and_string_prices() {
        let json = serde_json::to_value(Catalog::sample().unwrap()).unwrap();

        let names: Vec<&str> = json["categories"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["Appetizers", "Entrees", "Desserts"]);

        let first = &json["categories"][0]["items"][0];
        assert_eq!(first["id"], serde_json::json!(1));
        assert_eq!(first["price"], serde_json::json!("4.99"));
        assert!(json.get("index").is_none());
    }
}
