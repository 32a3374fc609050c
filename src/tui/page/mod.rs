//! Portfolio page (`folio view`)
//!
//! One long scrollable document of five sections, with a top navigation
//! bar, a keyboard shortcuts footer, a project detail modal, and a toast
//! area. All interaction flows through the pure reducer in [`model`]; this
//! component wires terminal events, the data loader, and the contact
//! submission into it.

pub mod model;

use std::sync::Arc;

use iocraft::prelude::*;

use crate::api::{ContactDraft, PortfolioProvider};
use crate::tui::components::{
    AboutSection, ContactSection, Footer, HeroSection, NavBar, ProjectModal, ProjectsSection,
    ServicesSection, render_toast,
};
use crate::tui::hooks::use_portfolio_loader;
use crate::tui::navigation::PageGeometry;
use crate::tui::state::Section;
use crate::tui::theme::theme;

use model::{
    PageAction, PageState, SubmitPhase, apply_submission_outcome, compute_page_view_model,
    key_to_action, reduce_page_state, revert_acknowledgment,
};

/// Rows consumed by the nav bar and footer
const CHROME_ROWS: i32 = 2;
/// How long the acknowledgment label stays up before reverting
const ACK_REVERT_DELAY: std::time::Duration = std::time::Duration::from_secs(5);

/// Props for the PortfolioPage component
#[derive(Default, Props)]
pub struct PortfolioPageProps {
    /// Gateway to the portfolio backend
    pub provider: Option<Arc<dyn PortfolioProvider>>,
}

/// Render one section of the document
fn render_section(section: Section, state: &PageState, page: State<PageState>) -> AnyElement<'static> {
    match section {
        Section::Home => element! { HeroSection() }.into_any(),
        Section::About => element! { AboutSection() }.into_any(),
        Section::Projects => element! {
            ProjectsSection(
                projects: state.projects.clone(),
                focused_card: state.focused_card,
            )
        }
        .into_any(),
        Section::Services => element! {
            ServicesSection(services: state.services.clone())
        }
        .into_any(),
        Section::Contact => element! {
            ContactSection(page: Some(page))
        }
        .into_any(),
    }
}

/// Main portfolio page component
#[component]
pub fn PortfolioPage(props: &PortfolioPageProps, mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();
    let theme = theme();

    let page: State<PageState> = hooks.use_state(PageState::default);
    let provider = props.provider.clone();

    let content_height = (height as i32 - CHROME_ROWS).max(1);

    // Async load handler with minimum 100ms display time to prevent UI flicker
    let load_handler: Handler<()> =
        hooks.use_async_handler(use_portfolio_loader(provider.clone(), page));

    // Trigger initial load on mount
    let mut load_started = hooks.use_state(|| false);
    if !load_started.get() {
        load_started.set(true);
        load_handler.clone()(());
    }

    // Async contact submission. Settles the form through the pure model
    // functions, then owns the acknowledgment revert: the same task sleeps
    // and reverts only if its generation still matches.
    let submit_handler: Handler<(ContactDraft, u64)> = hooks.use_async_handler({
        let provider = provider.clone();
        move |(draft, generation): (ContactDraft, u64)| {
            let provider = provider.clone();
            let mut page = page;

            Box::pin(async move {
                let outcome = match &provider {
                    Some(provider) => provider
                        .submit_contact(&draft)
                        .await
                        .map_err(|e| e.to_string()),
                    None => Err("no API client configured".to_string()),
                };

                let settled = apply_submission_outcome(page.read().clone(), outcome);
                let acknowledged = settled.submit_phase == SubmitPhase::Acknowledged;
                page.set(settled);

                if acknowledged {
                    tokio::time::sleep(ACK_REVERT_DELAY).await;
                    let reverted = revert_acknowledgment(page.read().clone(), generation);
                    page.set(reverted);
                }
            })
        }
    });

    // Dispatch a submission exactly once per generation bump
    let mut dispatched_generation = hooks.use_state(|| 0u64);
    {
        let state = page.read();
        if state.submit_phase == SubmitPhase::Submitting
            && state.submit_generation > dispatched_generation.get()
        {
            dispatched_generation.set(state.submit_generation);
            submit_handler.clone()((state.draft.clone(), state.submit_generation));
        }
    }

    // Keyboard and mouse wheel handling
    hooks.use_terminal_events({
        let mut page = page;
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                let state = page.read().clone();
                let modal_open = state.selected_project.is_some();
                if let Some(action) = key_to_action(code, modifiers, modal_open, state.focus) {
                    let geometry =
                        PageGeometry::new(&state.projects.items, &state.services.items);
                    page.set(reduce_page_state(state, action, &geometry, content_height));
                }
            }
            TerminalEvent::FullscreenMouse(mouse_event) => {
                let delta = match mouse_event.kind {
                    MouseEventKind::ScrollDown => 5,
                    MouseEventKind::ScrollUp => -5,
                    _ => return,
                };
                let state = page.read().clone();
                // The modal owns input while open
                if state.selected_project.is_some() {
                    return;
                }
                let geometry = PageGeometry::new(&state.projects.items, &state.services.items);
                page.set(reduce_page_state(
                    state,
                    PageAction::ScrollBy(delta),
                    &geometry,
                    content_height,
                ));
            }
            _ => {}
        }
    });

    let state = page.read().clone();
    if state.should_exit {
        system.exit();
    }

    let geometry = PageGeometry::new(&state.projects.items, &state.services.items);
    let vm = compute_page_view_model(&state, &geometry, content_height);

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            NavBar(
                active_section: Some(state.active_section),
                is_scrolled: state.is_scrolled,
                menu_open: state.menu_open,
            )

            // The visible slice of the section document
            View(
                flex_grow: 1.0,
                width: 100pct,
                flex_direction: FlexDirection::Column,
                overflow: Overflow::Hidden,
            ) {
                #(if vm.window.hidden_above > 0 {
                    Some(element! {
                        View(width: 100pct, justify_content: JustifyContent::Center) {
                            Text(
                                content: format!("↑ {} more section(s) above", vm.window.hidden_above),
                                color: theme.text_dimmed,
                            )
                        }
                    })
                } else {
                    None
                })

                #(vm.window.visible.iter().map(|section| {
                    render_section(*section, &state, page)
                }))
            }

            #(if vm.window.hidden_below > 0 {
                Some(element! {
                    View(width: 100pct, justify_content: JustifyContent::Center) {
                        Text(
                            content: format!("↓ {} more section(s) below", vm.window.hidden_below),
                            color: theme.text_dimmed,
                        )
                    }
                })
            } else {
                None
            })

            #(if state.show_scroll_to_top {
                Some(element! {
                    View(width: 100pct, justify_content: JustifyContent::FlexEnd, padding_right: 1) {
                        Text(content: "[t] Back to top", color: theme.accent)
                    }
                })
            } else {
                None
            })

            #(render_toast(&state.toast))

            Footer(shortcuts: vm.shortcuts)

            #(state.selected_project.clone().map(|project| element! {
                ProjectModal(project: Some(project))
            }))
        }
    }
}
