//! Remote data gateway for the portfolio API.
//!
//! The API is loosely typed: every field of every payload may be absent.
//! The raw wire shapes live in [`payload`] and are normalized exactly once,
//! at this boundary, into the total types below so the rest of the
//! application never needs a default-fallback expression.

pub mod client;
pub mod payload;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;

pub use client::HttpPortfolioClient;

/// Default title for a project delivered without one
pub const UNTITLED_PROJECT: &str = "Untitled Project";
/// Default status for a project delivered without one
pub const DEFAULT_PROJECT_STATUS: &str = "Active";
/// Default category for a project delivered without one
pub const DEFAULT_PROJECT_CATEGORY: &str = "Project";

/// A normalized portfolio project.
///
/// All fields are total: string fields carry documented defaults, sequences
/// default to empty, and the two links are `None` unless the payload carried
/// a valid http(s) URL. Consumers must omit link affordances for `None`
/// rather than render dead controls.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub tech: Vec<String>,
    pub features: Vec<String>,
    pub highlights: Vec<String>,
    pub live_link: Option<String>,
    pub github_link: Option<String>,
    pub year: Option<String>,
    pub status: String,
    pub category: String,
    pub icon: Option<String>,
    pub featured: bool,
}

/// A normalized service offering
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
    pub price: Option<f64>,
    pub icon: String,
}

impl Service {
    /// Price label; an absent price renders as an invitation, never as "0"
    pub fn price_label(&self) -> String {
        match self.price {
            Some(price) => format!("${price:.0}"),
            None => "contact for pricing".to_string(),
        }
    }
}

/// The in-progress contact form values
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    /// All three fields are required at submit time
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
    }

    pub fn clear(&mut self) {
        *self = ContactDraft::default();
    }
}

/// Parsed result of a contact submission.
///
/// A well-formed response with `success: false` is a logical failure, not a
/// transport error; it reaches the caller through `Ok` so the caller can
/// decide how to surface it.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactOutcome {
    pub success: bool,
    pub message: Option<String>,
}

/// Common interface for the portfolio backend.
///
/// Object-safe so the page can hold `Arc<dyn PortfolioProvider>` and tests
/// can substitute a stub.
#[async_trait]
pub trait PortfolioProvider: Send + Sync {
    /// Fetch the services list
    async fn fetch_services(&self) -> Result<Vec<Service>>;

    /// Fetch the projects list
    async fn fetch_projects(&self) -> Result<Vec<Project>>;

    /// Submit the contact form
    async fn submit_contact(&self, draft: &ContactDraft) -> Result<ContactOutcome>;
}

/// Fetch both lists concurrently and hand back each result independently.
///
/// The two resources are unrelated, so fetching sequentially would only add
/// latency. Errors are stringified here because each result settles one
/// collection's error marker; neither failure is allowed to escape.
pub async fn load_collections(
    provider: &dyn PortfolioProvider,
) -> (
    std::result::Result<Vec<Project>, String>,
    std::result::Result<Vec<Service>, String>,
) {
    let (projects, services) = tokio::join!(provider.fetch_projects(), provider.fetch_services());

    if let Err(e) = &projects {
        tracing::warn!(error = %e, "projects fetch failed");
    }
    if let Err(e) = &services {
        tracing::warn!(error = %e, "services fetch failed");
    }

    (
        projects.map_err(|e| e.to_string()),
        services.map_err(|e| e.to_string()),
    )
}
