#[cfg(feature = "cli")]
pub mod cli;
pub mod menu_config;
pub mod sample;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
pub use menu_config::MenuConfig;
pub use sample::SampleMenu;
