//! Configuration commands for managing folio settings.
//!
//! - `config show`: Display current configuration
//! - `config get`: Print a single value
//! - `config set`: Set a configuration value

use owo_colors::OwoColorize;

use crate::config::Config;
use crate::error::Result;

/// Show current configuration
pub fn cmd_config_show() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Configuration:".cyan().bold());
    println!();
    println!("{}:", "api".cyan());
    println!("  base_url: {}", config.api_base_url);
    println!("  timeout: {}s", config.request_timeout);

    if let Ok(url) = std::env::var("FOLIO_API_URL") {
        if !url.is_empty() {
            println!();
            println!(
                "  {} FOLIO_API_URL overrides base_url: {}",
                "note:".yellow(),
                url
            );
        }
    }

    println!();
    println!(
        "{}: {}",
        "config_file".cyan(),
        Config::config_path().display()
    );

    Ok(())
}

/// Get a configuration value
pub fn cmd_config_get(key: &str) -> Result<()> {
    let config = Config::load()?;
    println!("{}", config.get_value(key)?);
    Ok(())
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set_value(key, value)?;
    config.save()?;

    println!("{} {} = {}", "Set".green(), key.cyan(), value);
    Ok(())
}
