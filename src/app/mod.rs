pub mod render;
#[cfg(feature = "cli")]
pub mod repl;
