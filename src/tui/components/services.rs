//! Services section: remote-backed offering cards

use iocraft::prelude::*;

use crate::api::Service;
use crate::tui::state::RemoteCollection;
use crate::tui::theme::theme;

use super::empty_state::{EmptyState, EmptyStateKind};

/// Props for a single service card
#[derive(Default, Props)]
pub struct ServiceCardProps {
    pub service: Option<Service>,
}

/// One service rendered as a bordered card
#[component]
pub fn ServiceCard(props: &ServiceCardProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(service) = props.service.clone() else {
        return element! { View() }.into_any();
    };

    element! {
        View(
            width: 100pct,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: theme.border,
            padding_left: 1,
            padding_right: 1,
            margin_bottom: 1,
        ) {
            View(flex_direction: FlexDirection::Row, justify_content: JustifyContent::SpaceBetween) {
                View(flex_direction: FlexDirection::Row, gap: 1) {
                    Text(content: service.icon.clone(), color: theme.accent)
                    Text(content: service.title.clone(), color: theme.text, weight: Weight::Bold)
                }
                Text(content: service.price_label(), color: theme.accent)
            }

            View(max_width: 90) {
                Text(content: service.description.clone(), color: theme.text_dimmed)
            }

            #(service.features.iter().map(|feature| element! {
                View(flex_direction: FlexDirection::Row, gap: 1) {
                    Text(content: "-", color: theme.accent_dim)
                    Text(content: feature.clone(), color: theme.text)
                }
            }))
        }
    }
    .into_any()
}

/// Props for the services section
#[derive(Default, Props)]
pub struct ServicesSectionProps {
    pub services: RemoteCollection<Service>,
}

/// The full services section: heading plus cards or a placeholder
#[component]
pub fn ServicesSection(props: &ServicesSectionProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let body = if props.services.is_loading {
        element! { EmptyState(kind: EmptyStateKind::Loading) }.into_any()
    } else if let Some(error) = props.services.error.clone() {
        element! { EmptyState(kind: EmptyStateKind::FetchFailed, detail: Some(error)) }.into_any()
    } else if props.services.is_settled_empty() {
        element! { EmptyState(kind: EmptyStateKind::NoServices) }.into_any()
    } else {
        let services = props.services.items.clone();
        element! {
            View(width: 100pct, flex_direction: FlexDirection::Column) {
                #(services.into_iter().map(|service| {
                    element! {
                        ServiceCard(service: Some(service))
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
            Text(content: "Services", color: theme.accent, weight: Weight::Bold)
            Text(content: "What I can do for you", color: theme.text_dimmed)
            #(Some(body))
        }
    }
}
