//! About section: bio, talking points, skill bars, and headline stats

use iocraft::prelude::*;

use crate::content::{ABOUT_POINTS, PROFILE, SKILLS, STATS};
use crate::tui::theme::theme;

/// Width of a rendered skill proficiency bar, in cells
const SKILL_BAR_WIDTH: u8 = 20;

#[derive(Default, Props)]
pub struct AboutSectionProps {}

#[component]
pub fn AboutSection(_props: &AboutSectionProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            flex_direction: FlexDirection::Column,
            padding_left: 2,
            padding_right: 2,
            padding_top: 2,
            gap: 1,
        ) {
            Text(content: "About Me", color: theme.accent, weight: Weight::Bold)
            Text(content: PROFILE.about_heading, color: theme.text, weight: Weight::Bold)
            View(max_width: 80) {
                Text(content: PROFILE.about_text, color: theme.text_dimmed)
            }

            View(flex_direction: FlexDirection::Column, margin_top: 1) {
                #(ABOUT_POINTS.iter().map(|point| element! {
                    View(flex_direction: FlexDirection::Row, gap: 1) {
                        Text(content: "*", color: theme.accent)
                        Text(content: *point, color: theme.text)
                    }
                }))
            }

            Text(content: "Skills", color: theme.accent, weight: Weight::Bold)
            View(flex_direction: FlexDirection::Column) {
                #(SKILLS.iter().map(|skill| {
                    let filled = (skill.level as usize * SKILL_BAR_WIDTH as usize) / 100;
                    let bar = format!(
                        "{}{}",
                        "█".repeat(filled),
                        "░".repeat(SKILL_BAR_WIDTH as usize - filled),
                    );
                    element! {
                        View(flex_direction: FlexDirection::Row, gap: 1) {
                            View(width: 14) {
                                Text(content: skill.name, color: theme.text)
                            }
                            Text(content: bar, color: theme.accent)
                            Text(content: format!("{}%", skill.level), color: theme.text_dimmed)
                            Text(content: skill.category, color: theme.text_dimmed)
                        }
                    }
                }))
            }

            View(flex_direction: FlexDirection::Row, gap: 4, margin_top: 1) {
                #(STATS.iter().map(|stat| element! {
                    View(flex_direction: FlexDirection::Column, align_items: AlignItems::Center) {
                        Text(content: stat.value, color: theme.accent, weight: Weight::Bold)
                        Text(content: stat.label, color: theme.text_dimmed)
                    }
                }))
            }
        }
    }
}
