use crate::core::{Category, LinePolicy, MenuSource, SettingsProvider};
use crate::utils::error::{OrderError, Result};
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_required_field, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_RESTAURANT_NAME: &str = "Restaurant";
const DEFAULT_CURRENCY_SYMBOL: &str = "$";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuConfig {
    pub restaurant: Option<RestaurantConfig>,
    pub display: Option<DisplayConfig>,
    pub cart: Option<CartConfig>,
    pub categories: Option<Vec<Category>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantConfig {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub currency_symbol: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartConfig {
    pub line_policy: Option<LinePolicy>,
}

impl MenuConfig {
    /// Loads a menu file from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses a menu from TOML text, substituting `${VAR}` first.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| OrderError::ConfigParseError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| OrderError::ConfigParseError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(restaurant) = &self.restaurant {
            validate_non_empty_string("restaurant.name", &restaurant.name)?;
        }

        if let Some(symbol) = self.display.as_ref().and_then(|d| d.currency_symbol.as_deref()) {
            validate_non_empty_string("display.currency_symbol", symbol)?;
        }

        let categories = validate_required_field("categories", &self.categories)?;
        // Item-level rules (unique ids, names) are enforced by `Catalog::new`.
        validate_non_empty_list("categories", categories)
    }

    /// Overrides the cart line policy, e.g. from a command-line flag.
    pub fn with_line_policy(mut self, policy: LinePolicy) -> Self {
        self.cart = Some(CartConfig {
            line_policy: Some(policy),
        });
        self
    }
}

impl MenuSource for MenuConfig {
    fn categories(&self) -> Result<Vec<Category>> {
        validate_required_field("categories", &self.categories).cloned()
    }
}

impl SettingsProvider for MenuConfig {
    fn restaurant_name(&self) -> &str {
        self.restaurant
            .as_ref()
            .map(|r| r.name.as_str())
            .unwrap_or(DEFAULT_RESTAURANT_NAME)
    }

    fn currency_symbol(&self) -> &str {
        self.display
            .as_ref()
            .and_then(|d| d.currency_symbol.as_deref())
            .unwrap_or(DEFAULT_CURRENCY_SYMBOL)
    }

    fn line_policy(&self) -> LinePolicy {
        self.cart
            .as_ref()
            .and_then(|c| c.line_policy)
            .unwrap_or_default()
    }
}

impl Validate for MenuConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ItemId, Money};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BASIC_MENU: &str = r#"
[restaurant]
name = "Trattoria"

[display]
currency_symbol = "€"

[cart]
line_policy = "append"

[[categories]]
name = "Appetizers"

[[categories.items]]
id = 1
name = "Garlic Bread"
description = "Toasted bread with garlic butter"
price = "4.99"

[[categories.items]]
id = 2
name = "Bruschetta"
price = 6.99
"#;

    #[test]
    fn test_parse_basic_menu() {
        let config = MenuConfig::from_toml_str(BASIC_MENU).unwrap();

        assert_eq!(config.restaurant_name(), "Trattoria");
        assert_eq!(config.currency_symbol(), "€");
        assert_eq!(config.line_policy(), LinePolicy::Append);

        let categories = config.categories().unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].items[0].price, Money::from_minor(499));
        assert_eq!(categories[0].items[1].id, ItemId(2));
        assert_eq!(categories[0].items[1].description, "");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_when_sections_missing() {
        let config = MenuConfig::from_toml_str(
            r#"
[[categories]]
name = "Desserts"
items = [{ id = 9, name = "Gelato", price = "4.99" }]
"#,
        )
        .unwrap();

        assert_eq!(config.restaurant_name(), "Restaurant");
        assert_eq!(config.currency_symbol(), "$");
        assert_eq!(config.line_policy(), LinePolicy::Merge);
        assert_eq!(
            config.with_line_policy(LinePolicy::Append).line_policy(),
            LinePolicy::Append
        );
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("MENU_TEST_RESTAURANT", "Osteria");

        let config = MenuConfig::from_toml_str(
            r#"
[restaurant]
name = "${MENU_TEST_RESTAURANT}"

[[categories]]
name = "Entrees"
"#,
        )
        .unwrap();
        assert_eq!(config.restaurant_name(), "Osteria");

        std::env::remove_var("MENU_TEST_RESTAURANT");
    }

    #[test]
    fn test_validation_failures() {
        let missing = MenuConfig::from_toml_str("[restaurant]\nname = \"X\"\n").unwrap();
        assert!(matches!(
            missing.validate(),
            Err(OrderError::MissingConfigError { .. })
        ));

        let duplicate = MenuConfig::from_toml_str(
            r#"
[[categories]]
name = "Appetizers"
items = [{ id = 1, name = "Garlic Bread", price = "4.99" }]

[[categories]]
name = "Desserts"
items = [{ id = 1, name = "Gelato", price = "4.99" }]
"#,
        )
        .unwrap();
        assert!(duplicate.validate().is_ok());
        assert!(matches!(
            crate::core::Catalog::from_source(&duplicate),
            Err(OrderError::DuplicateItemId { .. })
        ));
    }

    #[test]
    fn test_bad_price_is_a_parse_error() {
        let err = MenuConfig::from_toml_str(
            r#"
[[categories]]
name = "Desserts"
items = [{ id = 9, name = "Gelato", price = "-4.99" }]
"#,
        )
        .unwrap_err();
        assert!(matches!(err, OrderError::ConfigParseError { .. }));
    }

    #[test]
    fn test_menu_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(BASIC_MENU.as_bytes()).unwrap();

        let config = MenuConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.restaurant_name(), "Trattoria");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = MenuConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, OrderError::IoError(_)));
    }
}
