//! Mock data builders and a stub gateway for tests.
//!
//! Builders produce the normalized domain types directly; the stub provider
//! lets tests script each endpoint's result and latency independently.

use std::time::Duration;

use async_trait::async_trait;

use folio::api::{ContactDraft, ContactOutcome, PortfolioProvider, Project, Service};
use folio::error::{FolioError, Result};

/// Builder for test projects
pub struct ProjectBuilder {
    project: Project,
}

impl ProjectBuilder {
    pub fn new(id: &str, title: &str) -> Self {
        Self {
            project: Project {
                id: id.to_string(),
                title: title.to_string(),
                description: format!("{title} description"),
                long_description: format!("{title} long description"),
                tech: vec![],
                features: vec![],
                highlights: vec![],
                live_link: None,
                github_link: None,
                year: None,
                status: "Active".to_string(),
                category: "Project".to_string(),
                icon: None,
                featured: false,
            },
        }
    }

    pub fn status(mut self, status: &str) -> Self {
        self.project.status = status.to_string();
        self
    }

    pub fn tech(mut self, tech: &[&str]) -> Self {
        self.project.tech = tech.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn live_link(mut self, link: &str) -> Self {
        self.project.live_link = Some(link.to_string());
        self
    }

    pub fn featured(mut self) -> Self {
        self.project.featured = true;
        self
    }

    pub fn build(self) -> Project {
        self.project
    }
}

/// Builder for test services
pub struct ServiceBuilder {
    service: Service,
}

impl ServiceBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            service: Service {
                title: title.to_string(),
                description: format!("{title} description"),
                features: vec![],
                price: None,
                icon: "◆".to_string(),
            },
        }
    }

    pub fn price(mut self, price: f64) -> Self {
        self.service.price = Some(price);
        self
    }

    pub fn build(self) -> Service {
        self.service
    }
}

/// Create a batch of test projects
pub fn mock_projects(count: usize) -> Vec<Project> {
    (0..count)
        .map(|i| ProjectBuilder::new(&format!("p-{i}"), &format!("Project {i}")).build())
        .collect()
}

/// Scriptable gateway stub.
///
/// `None` for an endpoint makes it fail; the per-endpoint delays let tests
/// control settlement order and observe concurrency.
pub struct StubProvider {
    pub projects: Option<Vec<Project>>,
    pub services: Option<Vec<Service>>,
    pub contact: Option<ContactOutcome>,
    pub projects_delay: Duration,
    pub services_delay: Duration,
}

impl Default for StubProvider {
    fn default() -> Self {
        Self {
            projects: Some(vec![]),
            services: Some(vec![]),
            contact: Some(ContactOutcome {
                success: true,
                message: None,
            }),
            projects_delay: Duration::ZERO,
            services_delay: Duration::ZERO,
        }
    }
}

#[async_trait]
impl PortfolioProvider for StubProvider {
    async fn fetch_services(&self) -> Result<Vec<Service>> {
        tokio::time::sleep(self.services_delay).await;
        self.services
            .clone()
            .ok_or_else(|| FolioError::Api("services unavailable".to_string()))
    }

    async fn fetch_projects(&self) -> Result<Vec<Project>> {
        tokio::time::sleep(self.projects_delay).await;
        self.projects
            .clone()
            .ok_or_else(|| FolioError::Api("projects unavailable".to_string()))
    }

    async fn submit_contact(&self, _draft: &ContactDraft) -> Result<ContactOutcome> {
        self.contact
            .clone()
            .ok_or_else(|| FolioError::Api("contact endpoint unavailable".to_string()))
    }
}
