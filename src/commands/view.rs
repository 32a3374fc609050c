//! Portfolio browser command (`folio view`)

use std::sync::Arc;

use iocraft::prelude::*;

use crate::api::{HttpPortfolioClient, PortfolioProvider};
use crate::config::Config;
use crate::error::{FolioError, Result};
use crate::tui::page::PortfolioPage;

/// Launch the portfolio browser TUI
pub async fn cmd_view(api_url: Option<&str>) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(url) = api_url {
        config.set_value("api.base_url", url)?;
    }

    let provider: Arc<dyn PortfolioProvider> = Arc::new(HttpPortfolioClient::from_config(&config)?);

    element!(PortfolioPage(provider: Some(provider)))
        .fullscreen()
        .await
        .map_err(|e| FolioError::Other(format!("TUI error: {}", e)))
}
