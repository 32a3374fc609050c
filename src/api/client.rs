//! HTTP implementation of [`PortfolioProvider`] backed by the hosted
//! portfolio backend.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::Config;
use crate::error::{FolioError, Result};

use super::payload::{ContactResponse, ProjectsEnvelope, ServicesEnvelope};
use super::{ContactDraft, ContactOutcome, PortfolioProvider, Project, Service};

pub struct HttpPortfolioClient {
    client: Client,
    base_url: String,
}

impl HttpPortfolioClient {
    /// Create a client from configuration.
    ///
    /// Configures the HTTP client with a 10s connect timeout and the
    /// configured total request timeout.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if !status.is_success() {
            return Err(FolioError::Api(format!(
                "server returned {status} for {}",
                response.url().path()
            )));
        }
        Ok(response)
    }
}

#[async_trait]
impl PortfolioProvider for HttpPortfolioClient {
    async fn fetch_services(&self) -> Result<Vec<Service>> {
        let url = self.endpoint("/api/v1/service/all");
        tracing::debug!(%url, "fetching services");

        let response = Self::check_status(self.client.get(&url).send().await?)?;
        let envelope: ServicesEnvelope = response.json().await?;

        Ok(envelope
            .services
            .into_iter()
            .map(|raw| raw.normalize())
            .collect())
    }

    async fn fetch_projects(&self) -> Result<Vec<Project>> {
        let url = self.endpoint("/api/v1/projects/getall");
        tracing::debug!(%url, "fetching projects");

        let response = Self::check_status(self.client.get(&url).send().await?)?;
        let envelope: ProjectsEnvelope = response.json().await?;

        Ok(envelope
            .data
            .into_iter()
            .enumerate()
            .map(|(i, raw)| raw.normalize(i))
            .collect())
    }

    async fn submit_contact(&self, draft: &ContactDraft) -> Result<ContactOutcome> {
        let url = self.endpoint("/api/v1/contact");
        tracing::debug!(%url, "submitting contact form");

        let response =
            Self::check_status(self.client.post(&url).json(draft).send().await?)?;
        let body: ContactResponse = response.json().await?;

        Ok(ContactOutcome {
            success: body.success,
            message: body.message,
        })
    }
}
