use crate::domain::model::ItemId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("Your cart is empty")]
    EmptyCart,

    #[error("Invalid quantity {quantity} for line {line_id}: quantity must be at least 1")]
    InvalidQuantity { line_id: ItemId, quantity: i64 },

    #[error("Unknown menu item: {item_id}")]
    UnknownItem { item_id: ItemId },

    #[error("Duplicate menu item id {item_id} ('{first}' and '{second}')")]
    DuplicateItemId {
        item_id: ItemId,
        first: String,
        second: String,
    },

    #[error("Invalid price '{value}': {reason}")]
    InvalidPrice { value: String, reason: String },

    #[error("Amount overflow while computing {context}")]
    AmountOverflow { context: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error in {field}: {message}")]
    ConfigParseError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Order,
    Menu,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl OrderError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            OrderError::EmptyCart
            | OrderError::InvalidQuantity { .. }
            | OrderError::UnknownItem { .. }
            | OrderError::AmountOverflow { .. } => ErrorCategory::Order,
            OrderError::DuplicateItemId { .. } | OrderError::InvalidPrice { .. } => {
                ErrorCategory::Menu
            }
            OrderError::ConfigParseError { .. }
            | OrderError::InvalidConfigValueError { .. }
            | OrderError::MissingConfigError { .. } => ErrorCategory::Configuration,
            OrderError::IoError(_) | OrderError::SerializationError(_) => ErrorCategory::System,
        }
    }

    /// Session errors are `Low` and never end the session.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            OrderError::EmptyCart
            | OrderError::InvalidQuantity { .. }
            | OrderError::UnknownItem { .. } => ErrorSeverity::Low,
            OrderError::AmountOverflow { .. } => ErrorSeverity::Medium,
            OrderError::DuplicateItemId { .. }
            | OrderError::InvalidPrice { .. }
            | OrderError::ConfigParseError { .. }
            | OrderError::InvalidConfigValueError { .. }
            | OrderError::MissingConfigError { .. } => ErrorSeverity::High,
            OrderError::IoError(_) | OrderError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            OrderError::EmptyCart => "Your cart is empty".to_string(),
            OrderError::InvalidQuantity { quantity, .. } => {
                format!("A quantity of {} is not allowed", quantity)
            }
            OrderError::UnknownItem { item_id } => {
                format!("There is no menu item with id {}", item_id)
            }
            OrderError::DuplicateItemId { item_id, .. } => {
                format!("The menu lists item id {} more than once", item_id)
            }
            OrderError::InvalidPrice { value, .. } => {
                format!("The menu contains an invalid price: {}", value)
            }
            OrderError::AmountOverflow { .. } => "The order total is too large".to_string(),
            OrderError::IoError(e) => format!("Could not read or write a file: {}", e),
            OrderError::SerializationError(e) => format!("Could not produce JSON output: {}", e),
            OrderError::ConfigParseError { field, .. } => {
                format!("The menu file could not be parsed ({})", field)
            }
            OrderError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting {}: {}", field, reason)
            }
            OrderError::MissingConfigError { field } => {
                format!("The menu file is missing {}", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            OrderError::EmptyCart => "Please add items to your order".to_string(),
            OrderError::InvalidQuantity { .. } => {
                "Use 'remove' to drop a line instead of lowering it below 1".to_string()
            }
            OrderError::UnknownItem { .. } => "Run 'menu' to list the available item ids".to_string(),
            OrderError::DuplicateItemId { .. } => {
                "Give every item in the menu file its own id".to_string()
            }
            OrderError::InvalidPrice { .. } => {
                "Write prices as non-negative decimals with at most two places, e.g. \"4.99\""
                    .to_string()
            }
            OrderError::AmountOverflow { .. } => "Lower the quantities in the cart".to_string(),
            OrderError::IoError(_) => "Check that the path exists and is readable".to_string(),
            OrderError::SerializationError(_) => "Retry without --json".to_string(),
            OrderError::ConfigParseError { .. } => {
                "Make sure the menu file is valid TOML".to_string()
            }
            OrderError::InvalidConfigValueError { field, .. }
            | OrderError::MissingConfigError { field } => {
                format!("Fix the '{}' entry in the menu file", field)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, OrderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_errors_are_low_severity() {
        assert_eq!(OrderError::EmptyCart.severity(), ErrorSeverity::Low);
        assert_eq!(
            OrderError::InvalidQuantity { line_id: ItemId(1), quantity: 0 }.severity(),
            ErrorSeverity::Low
        );
        assert_eq!(OrderError::UnknownItem { item_id: ItemId(42) }.category(), ErrorCategory::Order);
    }

    #[test]
    fn test_empty_cart_messages_match_notification() {
        let err = OrderError::EmptyCart;
        assert_eq!(err.to_string(), "Your cart is empty");
        assert_eq!(err.recovery_suggestion(), "Please add items to your order");
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = OrderError::MissingConfigError {
            field: "categories".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.recovery_suggestion().contains("categories"));
    }
}
