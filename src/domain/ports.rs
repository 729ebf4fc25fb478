use crate::domain::model::{Category, LinePolicy};
use crate::utils::error::Result;

/// Anything that can supply the categories a catalog is built from.
pub trait MenuSource {
    fn categories(&self) -> Result<Vec<Category>>;
}

pub trait SettingsProvider {
    fn restaurant_name(&self) -> &str;
    fn currency_symbol(&self) -> &str;
    fn line_policy(&self) -> LinePolicy;
}
