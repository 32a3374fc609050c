//! Contact section: channels, the three-field form, and the submit control

use iocraft::prelude::*;

use crate::content::{CONTACT_CHANNELS, SOCIAL_LINKS};
use crate::tui::page::model::{ContactField, Focus, PageState, SubmitPhase, submit_label};
use crate::tui::theme::theme;

/// Props for the contact section
#[derive(Default, Props)]
pub struct ContactSectionProps {
    /// The page state; field edits write the draft back through it
    pub page: Option<State<PageState>>,
}

/// One labelled form field bound to a draft field
fn form_field(
    label: &'static str,
    value: String,
    has_focus: bool,
    mut page: State<PageState>,
    field: ContactField,
) -> AnyElement<'static> {
    let theme = theme();
    element! {
        View(flex_direction: FlexDirection::Column, width: 60) {
            Text(content: label, color: theme.text_dimmed)
            View(
                border_style: BorderStyle::Round,
                border_color: if has_focus { theme.border_focused } else { theme.border },
                padding_left: 1,
                padding_right: 1,
                height: 3,
            ) {
                TextInput(
                    value: value,
                    has_focus: has_focus,
                    on_change: move |new_value: String| {
                        let mut state = page.read().clone();
                        match field {
                            ContactField::Name => state.draft.name = new_value,
                            ContactField::Email => state.draft.email = new_value,
                            ContactField::Message => state.draft.message = new_value,
                        }
                        page.set(state);
                    },
                    color: theme.text,
                )
            }
        }
    }
    .into_any()
}

/// The full contact section
#[component]
pub fn ContactSection(props: &ContactSectionProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let Some(page) = props.page else {
        return element! { View() }.into_any();
    };

    let (draft, focus, phase) = {
        let state = page.read();
        (state.draft.clone(), state.focus, state.submit_phase)
    };
    let focused = |field: ContactField| focus == Focus::Form(field);
    let label = submit_label(phase);
    let disabled = phase != SubmitPhase::Editing;

    element! {
        View(
            width: 100pct,
            flex_direction: FlexDirection::Column,
            padding_left: 2,
            padding_right: 2,
            padding_top: 2,
            gap: 1,
        ) {
            Text(content: "Get In Touch", color: theme.accent, weight: Weight::Bold)
            Text(
                content: "Have a project in mind? Let's talk.",
                color: theme.text_dimmed,
            )

            View(flex_direction: FlexDirection::Column) {
                #(CONTACT_CHANNELS.iter().map(|channel| element! {
                    View(flex_direction: FlexDirection::Row, gap: 1) {
                        Text(content: format!("{}:", channel.label), color: theme.accent)
                        Text(content: channel.value, color: theme.text)
                    }
                }))
            }

            #(Some(form_field(
                "Name",
                draft.name.clone(),
                focused(ContactField::Name),
                page,
                ContactField::Name,
            )))
            #(Some(form_field(
                "Email",
                draft.email.clone(),
                focused(ContactField::Email),
                page,
                ContactField::Email,
            )))
            #(Some(form_field(
                "Message",
                draft.message.clone(),
                focused(ContactField::Message),
                page,
                ContactField::Message,
            )))

            View(flex_direction: FlexDirection::Row, gap: 2) {
                View(
                    border_style: BorderStyle::Round,
                    border_color: if disabled { theme.border } else { theme.accent },
                    padding_left: 2,
                    padding_right: 2,
                ) {
                    Text(
                        content: label,
                        color: if disabled { theme.text_dimmed } else { theme.accent },
                        weight: Weight::Bold,
                    )
                }
                Text(content: "C-s to send · all fields required", color: theme.text_dimmed)
            }

            View(flex_direction: FlexDirection::Column, margin_top: 1) {
                Text(content: "Follow me", color: theme.text, weight: Weight::Bold)
                View(flex_direction: FlexDirection::Row, gap: 2) {
                    #(SOCIAL_LINKS.iter().map(|link| element! {
                        View(flex_direction: FlexDirection::Row, gap: 1) {
                            Text(content: link.label, color: theme.accent)
                            #(link.target.map(|target| element! {
                                Text(content: target, color: theme.text_dimmed)
                            }))
                        }
                    }))
                }
            }
        }
    }
    .into_any()
}
