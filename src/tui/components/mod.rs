//! Shared TUI components
//!
//! Reusable UI pieces for the portfolio page: chrome (nav bar, footer,
//! toast, modal overlay), the five document sections, and placeholders for
//! remote collections in flight.

pub mod about;
pub mod contact;
pub mod empty_state;
pub mod footer;
pub mod hero;
pub mod modal_overlay;
pub mod navbar;
pub mod project_modal;
pub mod projects;
pub mod services;
pub mod toast;

pub use about::{AboutSection, AboutSectionProps};
pub use contact::{ContactSection, ContactSectionProps};
pub use empty_state::{EmptyState, EmptyStateKind, EmptyStateProps};
pub use footer::{
    Footer, FooterProps, Shortcut, document_shortcuts, form_shortcuts, loading_shortcuts,
    modal_shortcuts,
};
pub use hero::{HeroSection, HeroSectionProps};
pub use modal_overlay::{MODAL_BACKDROP, ModalOverlay, ModalOverlayProps};
pub use navbar::{NavBar, NavBarProps};
pub use project_modal::{ProjectModal, ProjectModalProps};
pub use projects::{ProjectCard, ProjectCardProps, ProjectsSection, ProjectsSectionProps};
pub use services::{ServiceCard, ServiceCardProps, ServicesSection, ServicesSectionProps};
pub use toast::{Toast, ToastLevel, render_toast};
