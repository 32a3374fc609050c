use clap::{Parser, Subcommand};
use std::process::ExitCode;

use folio::commands::{cmd_config_get, cmd_config_set, cmd_config_show, cmd_view};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Browse a developer portfolio from the terminal")]
#[command(version)]
struct Cli {
    /// Override the portfolio API base URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the portfolio (default)
    View,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Get a configuration value (api.base_url, api.timeout)
    Get {
        /// Configuration key
        key: String,
    },
    /// Set a configuration value (api.base_url, api.timeout)
    Set {
        /// Configuration key
        key: String,
        /// Value to set
        value: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::View) {
        Commands::View => cmd_view(cli.api_url.as_deref()).await,

        Commands::Config { action } => match action {
            ConfigAction::Show => cmd_config_show(),
            ConfigAction::Get { key } => cmd_config_get(&key),
            ConfigAction::Set { key, value } => cmd_config_set(&key, &value),
        },
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
