//! Command implementations for the CLI

pub mod config;
pub mod page;

pub use config::{cmd_config_init, cmd_config_path, cmd_config_show};
pub use page::cmd_page;
