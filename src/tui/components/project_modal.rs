//! Project detail modal
//!
//! Everything renders via the normalized defaults; the two link rows are
//! omitted entirely when the link is absent, never rendered disabled.

use iocraft::prelude::*;

use crate::api::Project;
use crate::tui::theme::theme;

use super::modal_overlay::ModalOverlay;

/// Props for the project modal
#[derive(Default, Props)]
pub struct ProjectModalProps {
    pub project: Option<Project>,
}

/// Centered detail card for the selected project
#[component]
pub fn ProjectModal(props: &ProjectModalProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(project) = props.project.clone() else {
        return element! { View() }.into_any();
    };

    let tech = project.tech.join(" · ");
    let year_status = match &project.year {
        Some(year) => format!("{} · {}", year, project.status),
        None => project.status.clone(),
    };

    element! {
        ModalOverlay(show_backdrop: true) {
            View(
                width: 80,
                max_height: 90pct,
                flex_direction: FlexDirection::Column,
                border_style: BorderStyle::Double,
                border_color: theme.accent,
                padding: 1,
                gap: 1,
            ) {
                View(flex_direction: FlexDirection::Row, justify_content: JustifyContent::SpaceBetween) {
                    Text(content: project.title.clone(), color: theme.text, weight: Weight::Bold)
                    Text(content: project.category.clone(), color: theme.text_dimmed)
                }
                Text(
                    content: year_status,
                    color: theme.status_color(&project.status),
                )

                View(max_width: 76) {
                    Text(content: project.long_description.clone(), color: theme.text)
                }

                #(if tech.is_empty() {
                    None
                } else {
                    Some(element! {
                        Text(content: format!("Tech: {tech}"), color: theme.accent_dim)
                    })
                })

                #(if project.features.is_empty() {
                    None
                } else {
                    Some(element! {
                        View(flex_direction: FlexDirection::Column) {
                            Text(content: "Features", color: theme.accent, weight: Weight::Bold)
                            #(project.features.iter().map(|feature| element! {
                                View(flex_direction: FlexDirection::Row, gap: 1) {
                                    Text(content: "-", color: theme.accent_dim)
                                    Text(content: feature.clone(), color: theme.text)
                                }
                            }))
                        }
                    })
                })

                #(if project.highlights.is_empty() {
                    None
                } else {
                    Some(element! {
                        View(flex_direction: FlexDirection::Column) {
                            Text(content: "Highlights", color: theme.accent, weight: Weight::Bold)
                            #(project.highlights.iter().map(|highlight| element! {
                                View(flex_direction: FlexDirection::Row, gap: 1) {
                                    Text(content: "*", color: Color::Yellow)
                                    Text(content: highlight.clone(), color: theme.text)
                                }
                            }))
                        }
                    })
                })

                #(project.live_link.clone().map(|link| element! {
                    View(flex_direction: FlexDirection::Row, gap: 1) {
                        Text(content: "Live:", color: theme.accent)
                        Text(content: link, color: theme.text)
                    }
                }))
                #(project.github_link.clone().map(|link| element! {
                    View(flex_direction: FlexDirection::Row, gap: 1) {
                        Text(content: "Code:", color: theme.accent)
                        Text(content: link, color: theme.text)
                    }
                }))

                Text(content: "Esc to close", color: theme.text_dimmed)
            }
        }
    }
    .into_any()
}
