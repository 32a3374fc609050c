//! CLI command implementations

mod config;
mod view;

pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use view::cmd_view;
