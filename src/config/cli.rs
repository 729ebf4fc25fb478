use crate::config::menu_config::MenuConfig;
use crate::config::sample::SampleMenu;
use crate::core::session::{OrderSession, SessionSettings};
use crate::core::{Catalog, LinePolicy};
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_path, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "restaurant-order")]
#[command(about = "Browse a restaurant menu and place an order from the terminal")]
pub struct CliConfig {
    /// Menu file (TOML). The built-in sample menu is used when omitted
    #[arg(long, global = true)]
    pub menu: Option<String>,

    /// How repeated adds of the same item are recorded
    #[arg(long, global = true, value_enum)]
    pub line_policy: Option<LinePolicy>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the menu grouped by category
    Menu {
        #[arg(long)]
        json: bool,
    },
    /// Start an ordering session (the default)
    Order {
        /// Read session commands from a file instead of stdin
        #[arg(long)]
        script: Option<String>,
    },
}

impl CliConfig {
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Order { script: None })
    }

    /// Builds the session from the menu file (or the sample menu) plus flag overrides.
    pub fn build_session(&self) -> Result<OrderSession> {
        if let Some(policy) = self.line_policy {
            tracing::info!("🔧 Line policy overridden to: {}", policy);
        }

        let (catalog, settings) = match &self.menu {
            Some(path) => {
                tracing::info!("📁 Loading menu from: {}", path);
                let mut config = MenuConfig::from_file(path)?;
                if let Some(policy) = self.line_policy {
                    config = config.with_line_policy(policy);
                }
                config.validate()?;
                (
                    Catalog::from_source(&config)?,
                    SessionSettings::from_provider(&config),
                )
            }
            None => {
                tracing::debug!("No menu file given, using the sample menu");
                let settings = SessionSettings {
                    line_policy: self.line_policy.unwrap_or_default(),
                    ..SessionSettings::default()
                };
                (Catalog::from_source(&SampleMenu)?, settings)
            }
        };

        tracing::info!(
            "Menu ready: {} categories, {} items (line policy: {})",
            catalog.categories().len(),
            catalog.item_count(),
            settings.line_policy
        );
        Ok(OrderSession::new(catalog, settings))
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(menu) = &self.menu {
            validate_path("menu", menu)?;
            validate_file_extension("menu", menu, &["toml"])?;
        }
        if let Some(Command::Order {
            script: Some(script),
        }) = &self.command
        {
            validate_path("script", script)?;
        }
        Ok(())
    }
}
