//! Raw wire shapes for the portfolio API and their normalization.
//!
//! Every field is optional on the wire. Normalization happens here and only
//! here: downstream code works with the total types in the parent module.

use serde::Deserialize;
use serde_json::Value;
use url::Url;

use super::{
    DEFAULT_PROJECT_CATEGORY, DEFAULT_PROJECT_STATUS, Project, Service, UNTITLED_PROJECT,
};

/// Envelope for `GET /api/v1/service/all`
#[derive(Debug, Deserialize)]
pub struct ServicesEnvelope {
    #[serde(default)]
    pub services: Vec<RawService>,
}

/// Envelope for `GET /api/v1/projects/getall`
#[derive(Debug, Deserialize)]
pub struct ProjectsEnvelope {
    #[serde(default)]
    pub data: Vec<RawProject>,
}

/// Response body for `POST /api/v1/contact`
#[derive(Debug, Deserialize)]
pub struct ContactResponse {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawProject {
    #[serde(alias = "_id")]
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(alias = "longDescription")]
    pub long_description: Option<String>,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(alias = "liveLink")]
    pub live_link: Option<String>,
    #[serde(alias = "githubLink")]
    pub github_link: Option<String>,
    pub year: Option<Value>,
    pub status: Option<String>,
    pub category: Option<String>,
    pub icon: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Deserialize)]
pub struct RawService {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    pub price: Option<Value>,
    pub icon: Option<String>,
}

/// Accept a link only when it parses as an absolute http(s) URL. The API is
/// known to ship `"#"` placeholders for projects with no deployment.
fn normalize_link(link: Option<String>) -> Option<String> {
    let link = link?;
    match Url::parse(&link) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => Some(link),
        _ => None,
    }
}

/// Prices arrive as a JSON number or as a numeric string
fn normalize_price(price: Option<Value>) -> Option<f64> {
    match price? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Years arrive as a number or a string; keep them as display text
fn normalize_year(year: Option<Value>) -> Option<String> {
    match year? {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if !s.trim().is_empty() => Some(s),
        _ => None,
    }
}

fn non_empty_or(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(s) if !s.trim().is_empty() => s,
        _ => fallback.to_string(),
    }
}

impl RawProject {
    pub fn normalize(self, index: usize) -> Project {
        let description = self.description.unwrap_or_default();
        let long_description = match self.long_description {
            Some(s) if !s.trim().is_empty() => s,
            _ => description.clone(),
        };
        Project {
            id: non_empty_or(self.id, &format!("project-{index}")),
            title: non_empty_or(self.title, UNTITLED_PROJECT),
            description,
            long_description,
            tech: self.tech,
            features: self.features,
            highlights: self.highlights,
            live_link: normalize_link(self.live_link),
            github_link: normalize_link(self.github_link),
            year: normalize_year(self.year),
            status: non_empty_or(self.status, DEFAULT_PROJECT_STATUS),
            category: non_empty_or(self.category, DEFAULT_PROJECT_CATEGORY),
            icon: self.icon,
            featured: self.featured,
        }
    }
}

impl RawService {
    pub fn normalize(self) -> Service {
        Service {
            title: non_empty_or(self.title, "Service"),
            description: self.description.unwrap_or_default(),
            features: self.features,
            price: normalize_price(self.price),
            icon: self.icon.unwrap_or_else(|| "◆".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_project_gets_defaults() {
        let raw: RawProject = serde_json::from_str(r#"{"title": "X"}"#).unwrap();
        let project = raw.normalize(0);
        assert_eq!(project.title, "X");
        assert_eq!(project.status, "Active");
        assert_eq!(project.category, "Project");
        assert_eq!(project.id, "project-0");
        assert!(project.tech.is_empty());
        assert!(project.live_link.is_none());
        assert!(project.github_link.is_none());
        assert!(!project.featured);
    }

    #[test]
    fn test_empty_project_gets_untitled() {
        let raw: RawProject = serde_json::from_str("{}").unwrap();
        let project = raw.normalize(3);
        assert_eq!(project.title, "Untitled Project");
        assert_eq!(project.id, "project-3");
    }

    #[test]
    fn test_placeholder_links_are_dropped() {
        let raw: RawProject = serde_json::from_str(
            r##"{"liveLink": "#", "githubLink": "https://github.com/x/y"}"##,
        )
        .unwrap();
        let project = raw.normalize(0);
        assert!(project.live_link.is_none());
        assert_eq!(
            project.github_link.as_deref(),
            Some("https://github.com/x/y")
        );
    }

    #[test]
    fn test_non_http_links_are_dropped() {
        let raw: RawProject =
            serde_json::from_str(r#"{"liveLink": "javascript:void(0)"}"#).unwrap();
        assert!(raw.normalize(0).live_link.is_none());
    }

    #[test]
    fn test_long_description_falls_back_to_description() {
        let raw: RawProject =
            serde_json::from_str(r#"{"description": "short"}"#).unwrap();
        let project = raw.normalize(0);
        assert_eq!(project.long_description, "short");
    }

    #[test]
    fn test_mongo_id_alias() {
        let raw: RawProject = serde_json::from_str(r#"{"_id": "abc123"}"#).unwrap();
        assert_eq!(raw.normalize(0).id, "abc123");
    }

    #[test]
    fn test_price_number_and_string() {
        let raw: RawService = serde_json::from_str(r#"{"price": 250}"#).unwrap();
        assert_eq!(raw.normalize().price, Some(250.0));

        let raw: RawService = serde_json::from_str(r#"{"price": "99.5"}"#).unwrap();
        assert_eq!(raw.normalize().price, Some(99.5));

        let raw: RawService = serde_json::from_str(r#"{"price": "call us"}"#).unwrap();
        assert_eq!(raw.normalize().price, None);

        let raw: RawService = serde_json::from_str("{}").unwrap();
        assert_eq!(raw.normalize().price, None);
    }

    #[test]
    fn test_year_coercion() {
        let raw: RawProject = serde_json::from_str(r#"{"year": 2024}"#).unwrap();
        assert_eq!(raw.normalize(0).year.as_deref(), Some("2024"));

        let raw: RawProject = serde_json::from_str(r#"{"year": "2023"}"#).unwrap();
        assert_eq!(raw.normalize(0).year.as_deref(), Some("2023"));
    }

    #[test]
    fn test_envelopes_tolerate_missing_arrays() {
        let env: ServicesEnvelope = serde_json::from_str("{}").unwrap();
        assert!(env.services.is_empty());

        let env: ProjectsEnvelope = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(env.data.is_empty());
    }

    #[test]
    fn test_contact_response_defaults() {
        let resp: ContactResponse = serde_json::from_str("{}").unwrap();
        assert!(!resp.success);
        assert!(resp.message.is_none());

        let resp: ContactResponse =
            serde_json::from_str(r#"{"success": true, "message": "sent"}"#).unwrap();
        assert!(resp.success);
        assert_eq!(resp.message.as_deref(), Some("sent"));
    }
}
