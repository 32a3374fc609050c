//! Reusable hooks for TUI components

use std::sync::Arc;

use iocraft::prelude::*;

use crate::api::{PortfolioProvider, load_collections};

use super::page::model::PageState;

/// Create an async handler for loading both remote collections.
///
/// The handler fetches projects and services concurrently and settles each
/// collection independently, so one failed fetch never blanks the other's
/// data. A minimum 100ms loading indicator display prevents UI flicker on
/// fast responses.
///
/// Call the returned handler with `()` to trigger the load. A missing
/// provider settles both collections with an error marker instead of
/// leaving them loading forever.
pub fn use_portfolio_loader(
    provider: Option<Arc<dyn PortfolioProvider>>,
    page: State<PageState>,
) -> impl Fn(()) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()> + Send>> + Clone {
    move |()| {
        let provider = provider.clone();
        let mut page = page;

        Box::pin(async move {
            let start = std::time::Instant::now();

            let (projects, services) = match &provider {
                Some(provider) => load_collections(provider.as_ref()).await,
                None => {
                    let message = "no API client configured".to_string();
                    (Err(message.clone()), Err(message))
                }
            };

            // Ensure minimum 100ms display time to prevent flicker
            let elapsed = start.elapsed();
            if elapsed < std::time::Duration::from_millis(100) {
                tokio::time::sleep(std::time::Duration::from_millis(100) - elapsed).await;
            }

            let mut state = page.read().clone();
            match projects {
                Ok(items) => state.projects.settle_ok(items),
                Err(error) => state.projects.settle_err(error),
            }
            match services {
                Ok(items) => state.services.settle_ok(items),
                Err(error) => state.services.settle_err(error),
            }
            page.set(state);
        })
    }
}
