//! Placeholder display for a remote collection in flight or settled empty

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Type of placeholder to display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyStateKind {
    /// The fetch has not settled yet
    #[default]
    Loading,
    /// Projects settled with no items
    NoProjects,
    /// Services settled with no items
    NoServices,
    /// The fetch settled with an error
    FetchFailed,
}

/// Props for the EmptyState component
#[derive(Default, Props)]
pub struct EmptyStateProps {
    /// The kind of placeholder to display
    pub kind: EmptyStateKind,
    /// Error detail (for FetchFailed)
    pub detail: Option<String>,
}

/// Placeholder box rendered in place of a collection's cards
#[component]
pub fn EmptyState(props: &EmptyStateProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let (icon, title, message) = match props.kind {
        EmptyStateKind::Loading => ("~", "Loading", "Fetching from the portfolio API..."),
        EmptyStateKind::NoProjects => ("i", "No Projects", "Nothing published here yet."),
        EmptyStateKind::NoServices => ("i", "No Services", "Nothing on offer right now."),
        EmptyStateKind::FetchFailed => ("!", "Unavailable", "The portfolio API did not answer."),
    };
    let is_error = props.kind == EmptyStateKind::FetchFailed;

    element! {
        View(
            width: 100pct,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            padding: 2,
        ) {
            View(
                width: 5,
                height: 3,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border_style: BorderStyle::Round,
                border_color: if is_error { theme.error } else { theme.border },
                margin_bottom: 1,
            ) {
                Text(
                    content: icon,
                    color: if is_error { theme.error } else { theme.text_dimmed },
                    weight: Weight::Bold,
                )
            }

            Text(
                content: title,
                color: theme.text,
                weight: Weight::Bold,
            )

            View(margin_top: 1, max_width: 60) {
                Text(
                    content: message,
                    color: theme.text_dimmed,
                )
            }

            #(props.detail.as_ref().map(|detail| element! {
                View(margin_top: 1, max_width: 60) {
                    Text(
                        content: detail.clone(),
                        color: theme.error,
                    )
                }
            }))
        }
    }
}
