//! Hero section: name, role, and tagline

use iocraft::prelude::*;

use crate::content::PROFILE;
use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct HeroSectionProps {}

#[component]
pub fn HeroSection(_props: &HeroSectionProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            padding_top: 4,
            padding_bottom: 2,
            gap: 1,
        ) {
            Text(
                content: format!("Hi, I'm {}", PROFILE.name),
                color: theme.text,
                weight: Weight::Bold,
            )
            Text(
                content: PROFILE.role,
                color: theme.accent,
                weight: Weight::Bold,
            )
            View(max_width: 70, margin_top: 1, justify_content: JustifyContent::Center) {
                Text(
                    content: PROFILE.tagline,
                    color: theme.text_dimmed,
                )
            }
            View(margin_top: 2, flex_direction: FlexDirection::Row, gap: 3) {
                Text(content: "[3] View Projects", color: theme.accent)
                Text(content: "[i] Get In Touch", color: theme.text_dimmed)
            }
        }
    }
}
