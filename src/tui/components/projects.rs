//! Projects section: remote-backed cards with a keyboard cursor

use iocraft::prelude::*;

use crate::api::Project;
use crate::tui::state::RemoteCollection;
use crate::tui::theme::theme;

use super::empty_state::{EmptyState, EmptyStateKind};

/// Props for a single project card
#[derive(Default, Props)]
pub struct ProjectCardProps {
    pub project: Option<Project>,
    /// Whether the keyboard cursor is on this card
    pub is_focused: bool,
}

/// One project rendered as a bordered card
#[component]
pub fn ProjectCard(props: &ProjectCardProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(project) = props.project.clone() else {
        return element! { View() }.into_any();
    };

    let tech = project.tech.join(" · ");
    let border_color = if props.is_focused {
        theme.border_focused
    } else {
        theme.border
    };

    element! {
        View(
            width: 100pct,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: border_color,
            padding_left: 1,
            padding_right: 1,
            margin_bottom: 1,
        ) {
            View(flex_direction: FlexDirection::Row, justify_content: JustifyContent::SpaceBetween) {
                View(flex_direction: FlexDirection::Row, gap: 1) {
                    #(project.icon.clone().map(|icon| element! {
                        Text(content: icon, color: theme.accent)
                    }))
                    Text(content: project.title.clone(), color: theme.text, weight: Weight::Bold)
                    #(if project.featured {
                        Some(element! {
                            Text(content: "★ Featured", color: Color::Yellow)
                        })
                    } else {
                        None
                    })
                }
                View(flex_direction: FlexDirection::Row, gap: 2) {
                    Text(content: project.category.clone(), color: theme.text_dimmed)
                    Text(
                        content: project.status.clone(),
                        color: theme.status_color(&project.status),
                    )
                }
            }

            View(max_width: 90) {
                Text(content: project.description.clone(), color: theme.text_dimmed)
            }

            #(if tech.is_empty() {
                None
            } else {
                Some(element! {
                    Text(content: tech, color: theme.accent_dim)
                })
            })

            #(if props.is_focused {
                Some(element! {
                    Text(content: "Enter: details", color: theme.text_dimmed)
                })
            } else {
                None
            })
        }
    }
    .into_any()
}

/// Props for the projects section
#[derive(Default, Props)]
pub struct ProjectsSectionProps {
    pub projects: RemoteCollection<Project>,
    /// Index of the keyboard-focused card
    pub focused_card: usize,
}

/// The full projects section: heading plus cards or a placeholder
#[component]
pub fn ProjectsSection(props: &ProjectsSectionProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let body = if props.projects.is_loading {
        element! { EmptyState(kind: EmptyStateKind::Loading) }.into_any()
    } else if let Some(error) = props.projects.error.clone() {
        element! { EmptyState(kind: EmptyStateKind::FetchFailed, detail: Some(error)) }.into_any()
    } else if props.projects.is_settled_empty() {
        element! { EmptyState(kind: EmptyStateKind::NoProjects) }.into_any()
    } else {
        let focused = props.focused_card;
        element! {
            View(width: 100pct, flex_direction: FlexDirection::Column) {
                #(props.projects.items.iter().enumerate().map(|(i, project)| {
                    element! {
                        ProjectCard(
                            project: Some(project.clone()),
                            is_focused: i == focused,
                        )
                    }
                }))
            }
        }
        .into_any()
    };

    element! {
        View(
            width: 100pct,
            flex_direction: FlexDirection::Column,
            padding_left: 2,
            padding_right: 2,
            padding_top: 2,
            gap: 1,
        ) {
            Text(content: "Projects", color: theme.accent, weight: Weight::Bold)
            Text(
                content: "Things I've built recently",
                color: theme.text_dimmed,
            )
            #(Some(body))
        }
    }
}
