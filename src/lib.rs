pub mod api;
pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod tui;

pub use api::{
    ContactDraft, ContactOutcome, HttpPortfolioClient, PortfolioProvider, Project, Service,
};
pub use config::Config;
pub use error::{FolioError, Result};
