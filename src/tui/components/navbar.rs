//! Navigation bar component
//!
//! Brand mark on the left, section links on the right, with the active
//! section highlighted. Renders with a solid background once the document
//! has scrolled past the threshold, and an expandable menu drawer listing
//! the sections with their jump keys.

use iocraft::prelude::*;

use crate::content::PROFILE;
use crate::tui::state::Section;
use crate::tui::theme::theme;

/// Props for the NavBar component
#[derive(Default, Props)]
pub struct NavBarProps {
    /// Section to highlight
    pub active_section: Option<Section>,
    /// Whether to render with a solid background
    pub is_scrolled: bool,
    /// Whether the menu drawer is open
    pub menu_open: bool,
}

/// Top navigation bar with section links and optional menu drawer
#[component]
pub fn NavBar(props: &NavBarProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let active = props.active_section.unwrap_or(Section::Home);

    let background = if props.is_scrolled {
        Some(theme.nav_solid_background)
    } else {
        None
    };

    element! {
        View(width: 100pct, flex_direction: FlexDirection::Column, flex_shrink: 0.0) {
            View(
                width: 100pct,
                height: 1,
                flex_direction: FlexDirection::Row,
                justify_content: JustifyContent::SpaceBetween,
                padding_left: 1,
                padding_right: 1,
                background_color: background,
            ) {
                Text(
                    content: PROFILE.brand,
                    color: theme.accent,
                    weight: Weight::Bold,
                )
                View(flex_direction: FlexDirection::Row, gap: 2) {
                    #(Section::ALL.iter().map(|section| {
                        let is_active = *section == active;
                        element! {
                            Text(
                                content: section.label(),
                                color: if is_active { theme.accent } else { theme.text_dimmed },
                                weight: if is_active { Weight::Bold } else { Weight::Normal },
                            )
                        }
                    }))
                }
            }

            #(if props.menu_open {
                Some(element! {
                    View(
                        width: 100pct,
                        flex_direction: FlexDirection::Column,
                        border_edges: Edges::Bottom,
                        border_style: BorderStyle::Single,
                        border_color: theme.border,
                        background_color: theme.nav_solid_background,
                        padding_left: 2,
                    ) {
                        #(Section::ALL.iter().enumerate().map(|(i, section)| {
                            let is_active = *section == active;
                            element! {
                                View(flex_direction: FlexDirection::Row, gap: 1) {
                                    Text(
                                        content: format!("[{}]", i + 1),
                                        color: theme.highlight,
                                    )
                                    Text(
                                        content: section.label(),
                                        color: if is_active { theme.accent } else { theme.text },
                                        weight: if is_active { Weight::Bold } else { Weight::Normal },
                                    )
                                }
                            }
                        }))
                    }
                })
            } else {
                None
            })
        }
    }
}
