//! Transient status messages raised by fetch and submit settlement.
//!
//! A toast stays up until the user dismisses it (`x` from the document) or a
//! newer toast replaces it.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// A toast message with a severity level
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
}

/// Severity level, mapped to theme feedback colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
    Success,
}

impl Toast {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: ToastLevel::Info,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: ToastLevel::Warning,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: ToastLevel::Error,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: ToastLevel::Success,
        }
    }

    /// Border and text color for this toast's level
    pub fn color(&self) -> Color {
        let theme = theme();
        match self.level {
            ToastLevel::Info => theme.accent,
            ToastLevel::Warning => theme.warning,
            ToastLevel::Error => theme.error,
            ToastLevel::Success => theme.success,
        }
    }
}

/// Render a toast as an optional element, for use inside `element!` bodies
/// that render it conditionally
pub fn render_toast(toast: &Option<Toast>) -> Option<AnyElement<'static>> {
    let theme = theme();
    toast.as_ref().map(|t| {
        element! {
            View(
                width: 100pct,
                height: 3,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                background_color: theme.nav_solid_background,
                border_edges: Edges::Top,
                border_style: BorderStyle::Single,
                border_color: t.color(),
            ) {
                Text(content: t.message.clone(), color: t.color())
            }
        }
        .into_any()
    })
}
