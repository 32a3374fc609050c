//! Terminal user interface for the portfolio browser

pub mod components;
pub mod hooks;
pub mod navigation;
pub mod page;
pub mod state;
pub mod theme;

pub use page::PortfolioPage;
pub use state::{RemoteCollection, Section};
