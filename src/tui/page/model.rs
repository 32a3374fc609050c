//! Portfolio page model types for testable state management
//!
//! This module separates state (PageState) from view (PageViewModel)
//! enabling comprehensive unit testing without the iocraft framework.

use crate::api::{ContactDraft, ContactOutcome, Project, Service};
use crate::tui::components::footer::Shortcut;
use crate::tui::components::toast::Toast;
use crate::tui::components::{
    document_shortcuts, form_shortcuts, loading_shortcuts, modal_shortcuts,
};
use crate::tui::navigation::{self, PageGeometry};
use crate::tui::state::{RemoteCollection, Section};

use iocraft::prelude::{KeyCode, KeyModifiers};

/// The contact form fields, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

/// Where keyboard input is routed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Keys scroll and navigate the document
    Document,
    /// Keys type into the given contact form field
    Form(ContactField),
}

/// Contact submission lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    /// Accepting edits; submit is armed
    Editing,
    /// A submission is in flight; submit is disabled
    Submitting,
    /// Success label shown; reverts to Editing after a delay
    Acknowledged,
}

/// Raw state that changes during user interaction
#[derive(Debug, Clone)]
pub struct PageState {
    /// Document row aligned with the top of the viewport
    pub scroll_y: i32,
    /// Section currently highlighted in the nav bar
    pub active_section: Section,
    /// Whether the nav bar renders with a solid background
    pub is_scrolled: bool,
    /// Whether the scroll-to-top affordance is visible
    pub show_scroll_to_top: bool,
    /// Whether the nav menu drawer is open
    pub menu_open: bool,
    /// Current keyboard focus
    pub focus: Focus,
    /// Index of the keyboard-focused project card
    pub focused_card: usize,
    /// Remote projects collection
    pub projects: RemoteCollection<Project>,
    /// Remote services collection
    pub services: RemoteCollection<Service>,
    /// The single modal selection slot
    pub selected_project: Option<Project>,
    /// In-progress contact form values
    pub draft: ContactDraft,
    /// Contact submission lifecycle phase
    pub submit_phase: SubmitPhase,
    /// Bumped on every accepted submission; guards the acknowledgment revert
    pub submit_generation: u64,
    /// Optional toast notification to display
    pub toast: Option<Toast>,
    /// Set when the user asks to quit
    pub should_exit: bool,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            scroll_y: 0,
            active_section: Section::Home,
            is_scrolled: false,
            show_scroll_to_top: false,
            menu_open: false,
            focus: Focus::Document,
            focused_card: 0,
            projects: RemoteCollection::default(),
            services: RemoteCollection::default(),
            selected_project: None,
            draft: ContactDraft::default(),
            submit_phase: SubmitPhase::Editing,
            submit_generation: 0,
            toast: None,
            should_exit: false,
        }
    }
}

/// All possible actions on the page
#[derive(Debug, Clone, PartialEq)]
pub enum PageAction {
    // Scrolling
    /// Scroll by a signed number of rows
    ScrollBy(i32),
    /// Scroll down half a viewport
    PageDown,
    /// Scroll up half a viewport
    PageUp,
    /// Jump to the top of the document
    ScrollToTop,
    /// Jump to the bottom of the document
    GoToBottom,
    /// Jump to a section's document top
    ScrollToSection(Section),

    // Navigation chrome
    /// Toggle the nav menu drawer
    ToggleMenu,

    // Project cards & modal
    /// Move the card cursor forward
    FocusNextCard,
    /// Move the card cursor backward
    FocusPrevCard,
    /// Open the modal for the focused card
    OpenFocusedCard,
    /// Open the modal for a specific project
    SelectProject(Project),
    /// Clear the modal selection slot
    CloseModal,

    // Contact form
    /// Jump to the contact section and focus the first field
    FocusForm,
    /// Advance focus to the next form field
    FocusNextField,
    /// Move focus to the previous form field
    FocusPrevField,
    /// Return keyboard focus to the document
    ExitForm,
    /// Replace one draft field's value
    EditField(ContactField, String),
    /// Ask to submit the draft
    SubmitRequested,

    // App
    /// Dismiss the current toast
    DismissToast,
    /// Quit the application
    Quit,
}

/// How a settled submission folds back into the page
#[derive(Debug, Clone)]
pub struct SubmitSettlement {
    pub clear_draft: bool,
    pub phase: SubmitPhase,
    pub toast: Toast,
}

// ============================================================================
// Pure Functions
// ============================================================================

/// Re-derive the three navigation fields from the scroll offset.
///
/// Called after every scroll mutation so the flags and the offset can never
/// disagree within one state value.
fn sync_navigation(state: &mut PageState, geometry: &PageGeometry, viewport_height: i32) {
    state.scroll_y = state.scroll_y.clamp(0, geometry.max_scroll(viewport_height));
    state.is_scrolled = navigation::is_scrolled(state.scroll_y);
    state.show_scroll_to_top = navigation::show_scroll_to_top(state.scroll_y);
    state.active_section =
        navigation::active_section(&geometry.extents(state.scroll_y), state.active_section);
}

/// Pure function: apply action to state (reducer pattern)
///
/// Contains only pure state transitions. The gateway call for
/// `SubmitRequested` and the acknowledgment revert are driven by the
/// component; this function records the phase change and bumps the
/// generation.
pub fn reduce_page_state(
    mut state: PageState,
    action: PageAction,
    geometry: &PageGeometry,
    viewport_height: i32,
) -> PageState {
    match action {
        // Scrolling
        PageAction::ScrollBy(delta) => {
            state.scroll_y += delta;
            sync_navigation(&mut state, geometry, viewport_height);
        }
        PageAction::PageDown => {
            state.scroll_y += (viewport_height / 2).max(1);
            sync_navigation(&mut state, geometry, viewport_height);
        }
        PageAction::PageUp => {
            state.scroll_y -= (viewport_height / 2).max(1);
            sync_navigation(&mut state, geometry, viewport_height);
        }
        PageAction::ScrollToTop => {
            state.scroll_y = 0;
            sync_navigation(&mut state, geometry, viewport_height);
        }
        PageAction::GoToBottom => {
            state.scroll_y = geometry.max_scroll(viewport_height);
            sync_navigation(&mut state, geometry, viewport_height);
        }
        PageAction::ScrollToSection(section) => {
            state.scroll_y = geometry.section_top(section);
            sync_navigation(&mut state, geometry, viewport_height);
            // Optimistic: the target wins immediately even if the clamped
            // offset leaves the probe row inside an earlier section
            state.active_section = section;
            state.menu_open = false;
        }

        // Navigation chrome
        PageAction::ToggleMenu => {
            state.menu_open = !state.menu_open;
        }

        // Project cards & modal
        PageAction::FocusNextCard => {
            let count = state.projects.items.len();
            if count > 0 {
                state.focused_card = (state.focused_card + 1).min(count - 1);
            }
        }
        PageAction::FocusPrevCard => {
            state.focused_card = state.focused_card.saturating_sub(1);
        }
        PageAction::OpenFocusedCard => {
            if let Some(project) = state.projects.items.get(state.focused_card) {
                state.selected_project = Some(project.clone());
            }
        }
        PageAction::SelectProject(project) => {
            state.selected_project = Some(project);
        }
        PageAction::CloseModal => {
            state.selected_project = None;
        }

        // Contact form
        PageAction::FocusForm => {
            state.scroll_y = geometry.section_top(Section::Contact);
            sync_navigation(&mut state, geometry, viewport_height);
            state.active_section = Section::Contact;
            state.menu_open = false;
            state.focus = Focus::Form(ContactField::Name);
        }
        PageAction::FocusNextField => {
            state.focus = match state.focus {
                Focus::Form(ContactField::Name) => Focus::Form(ContactField::Email),
                Focus::Form(ContactField::Email) => Focus::Form(ContactField::Message),
                Focus::Form(ContactField::Message) => Focus::Document,
                Focus::Document => Focus::Form(ContactField::Name),
            };
        }
        PageAction::FocusPrevField => {
            state.focus = match state.focus {
                Focus::Form(ContactField::Name) => Focus::Document,
                Focus::Form(ContactField::Email) => Focus::Form(ContactField::Name),
                Focus::Form(ContactField::Message) => Focus::Form(ContactField::Email),
                Focus::Document => Focus::Form(ContactField::Message),
            };
        }
        PageAction::ExitForm => {
            state.focus = Focus::Document;
        }
        PageAction::EditField(field, value) => match field {
            ContactField::Name => state.draft.name = value,
            ContactField::Email => state.draft.email = value,
            ContactField::Message => state.draft.message = value,
        },
        PageAction::SubmitRequested => {
            if state.submit_phase == SubmitPhase::Editing {
                if state.draft.is_complete() {
                    state.submit_phase = SubmitPhase::Submitting;
                    state.submit_generation += 1;
                } else {
                    state.toast =
                        Some(Toast::warning("Name, email, and message are all required"));
                }
            }
            // In-flight or acknowledged submissions ignore the request
        }

        // App
        PageAction::DismissToast => {
            state.toast = None;
        }
        PageAction::Quit => {
            state.should_exit = true;
        }
    }
    state
}

/// Pure function: decide how a settled submission folds back into the page.
///
/// A well-formed response with `success == false` keeps the draft so the
/// user can retry; a transport error does not (nothing was rejected, and the
/// original page cleared the fields in that case too).
pub fn settle_submission(outcome: Result<ContactOutcome, String>) -> SubmitSettlement {
    match outcome {
        Ok(outcome) if outcome.success => SubmitSettlement {
            clear_draft: true,
            phase: SubmitPhase::Acknowledged,
            toast: Toast::success(
                outcome
                    .message
                    .unwrap_or_else(|| "Message sent. Thank you!".to_string()),
            ),
        },
        Ok(outcome) => SubmitSettlement {
            clear_draft: false,
            phase: SubmitPhase::Editing,
            toast: Toast::error(
                outcome
                    .message
                    .unwrap_or_else(|| "The server could not accept the message".to_string()),
            ),
        },
        Err(error) => SubmitSettlement {
            clear_draft: true,
            phase: SubmitPhase::Editing,
            toast: Toast::error(format!("Failed to send message: {error}")),
        },
    }
}

/// Fold a settlement into the state
pub fn apply_submission_outcome(
    mut state: PageState,
    outcome: Result<ContactOutcome, String>,
) -> PageState {
    let settlement = settle_submission(outcome);
    if settlement.clear_draft {
        state.draft.clear();
    }
    state.submit_phase = settlement.phase;
    state.toast = Some(settlement.toast);
    state
}

/// Revert the acknowledgment label, unless a later submission superseded the
/// one that scheduled this revert.
pub fn revert_acknowledgment(mut state: PageState, generation: u64) -> PageState {
    if state.submit_generation == generation && state.submit_phase == SubmitPhase::Acknowledged {
        state.submit_phase = SubmitPhase::Editing;
    }
    state
}

/// Convert a key event to a PageAction (pure function)
///
/// Returns `None` if the key doesn't map to any action. While the modal is
/// open it owns the keyboard: nothing but a close key produces an action, so
/// the page behind it cannot be operated.
pub fn key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    modal_open: bool,
    focus: Focus,
) -> Option<PageAction> {
    if modal_open {
        return match code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(PageAction::CloseModal),
            _ => None,
        };
    }

    if let Focus::Form(_) = focus {
        return form_key_to_action(code, modifiers);
    }

    match code {
        // Scrolling
        KeyCode::Char('j') | KeyCode::Down => Some(PageAction::ScrollBy(3)),
        KeyCode::Char('k') | KeyCode::Up => Some(PageAction::ScrollBy(-3)),
        KeyCode::PageDown => Some(PageAction::PageDown),
        KeyCode::PageUp => Some(PageAction::PageUp),
        KeyCode::Char('g') | KeyCode::Char('t') | KeyCode::Home => Some(PageAction::ScrollToTop),
        KeyCode::Char('G') | KeyCode::End => Some(PageAction::GoToBottom),

        // Direct section jumps
        KeyCode::Char('1') => Some(PageAction::ScrollToSection(Section::Home)),
        KeyCode::Char('2') => Some(PageAction::ScrollToSection(Section::About)),
        KeyCode::Char('3') => Some(PageAction::ScrollToSection(Section::Projects)),
        KeyCode::Char('4') => Some(PageAction::ScrollToSection(Section::Services)),
        KeyCode::Char('5') => Some(PageAction::ScrollToSection(Section::Contact)),

        // Chrome
        KeyCode::Char('m') => Some(PageAction::ToggleMenu),

        // Project cards
        KeyCode::Left | KeyCode::Char('h') => Some(PageAction::FocusPrevCard),
        KeyCode::Right | KeyCode::Char('l') => Some(PageAction::FocusNextCard),
        KeyCode::Enter => Some(PageAction::OpenFocusedCard),

        // Contact form
        KeyCode::Char('i') => Some(PageAction::FocusForm),

        // App
        KeyCode::Char('x') => Some(PageAction::DismissToast),
        KeyCode::Char('q') | KeyCode::Esc => Some(PageAction::Quit),

        _ => None,
    }
}

/// Convert a key event while a form field is focused
fn form_key_to_action(code: KeyCode, modifiers: KeyModifiers) -> Option<PageAction> {
    match (code, modifiers) {
        (KeyCode::Esc, _) => Some(PageAction::ExitForm),
        (KeyCode::Tab, _) => Some(PageAction::FocusNextField),
        (KeyCode::BackTab, _) => Some(PageAction::FocusPrevField),
        (KeyCode::Char('s'), m) if m.contains(KeyModifiers::CONTROL) => {
            Some(PageAction::SubmitRequested)
        }
        // Other characters are handled by the focused TextInput
        _ => None,
    }
}

// ============================================================================
// View model
// ============================================================================

/// The visible slice of the section document
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentWindow {
    /// Sections whose band intersects the viewport, in display order
    pub visible: Vec<Section>,
    /// Sections fully above the viewport
    pub hidden_above: usize,
    /// Sections fully below the viewport
    pub hidden_below: usize,
}

/// Computed view model for rendering the page
#[derive(Debug, Clone)]
pub struct PageViewModel {
    /// Visible document slice
    pub window: DocumentWindow,
    /// Label for the contact submit control
    pub submit_label: &'static str,
    /// Whether the submit control is disabled
    pub submit_disabled: bool,
    /// Keyboard shortcuts to display in the footer
    pub shortcuts: Vec<Shortcut>,
}

/// Label for the contact submit control in each phase
pub fn submit_label(phase: SubmitPhase) -> &'static str {
    match phase {
        SubmitPhase::Editing => "Send Message",
        SubmitPhase::Submitting => "Sending...",
        SubmitPhase::Acknowledged => "Thanks for contacting!",
    }
}

/// Pure function: compute view model from state
pub fn compute_page_view_model(
    state: &PageState,
    geometry: &PageGeometry,
    viewport_height: i32,
) -> PageViewModel {
    let extents = geometry.extents(state.scroll_y);

    let mut visible = Vec::new();
    let mut hidden_above = 0;
    let mut hidden_below = 0;
    for extent in &extents {
        if extent.bottom <= 0 {
            hidden_above += 1;
        } else if extent.top >= viewport_height {
            hidden_below += 1;
        } else {
            visible.push(extent.section);
        }
    }

    let shortcuts = if state.selected_project.is_some() {
        modal_shortcuts()
    } else if matches!(state.focus, Focus::Form(_)) {
        form_shortcuts()
    } else if state.projects.is_loading || state.services.is_loading {
        loading_shortcuts()
    } else {
        let mut shortcuts = document_shortcuts();
        if state.toast.is_some() {
            shortcuts.push(Shortcut::new("x", "Dismiss"));
        }
        shortcuts
    };

    PageViewModel {
        window: DocumentWindow {
            visible,
            hidden_above,
            hidden_below,
        },
        submit_label: submit_label(state.submit_phase),
        submit_disabled: state.submit_phase != SubmitPhase::Editing,
        shortcuts,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::components::toast::ToastLevel;
    use crate::tui::navigation::{NAV_SOLID_OFFSET, SCROLL_TOP_OFFSET};

    const VIEWPORT: i32 = 40;

    fn make_project(id: &str, title: &str) -> Project {
        Project {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            long_description: String::new(),
            tech: vec![],
            features: vec![],
            highlights: vec![],
            live_link: None,
            github_link: None,
            year: None,
            status: "Active".to_string(),
            category: "Project".to_string(),
            icon: None,
            featured: false,
        }
    }

    fn state_with_projects(count: usize) -> PageState {
        let mut state = PageState::default();
        state.projects.settle_ok(
            (0..count)
                .map(|i| make_project(&format!("p-{i}"), &format!("Project {i}")))
                .collect(),
        );
        state.services.settle_ok(vec![]);
        state
    }

    fn geometry_for(state: &PageState) -> PageGeometry {
        PageGeometry::new(&state.projects.items, &state.services.items)
    }

    fn reduce(state: PageState, action: PageAction) -> PageState {
        let geometry = geometry_for(&state);
        reduce_page_state(state, action, &geometry, VIEWPORT)
    }

    fn complete_draft() -> ContactDraft {
        ContactDraft {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    // ------------------------------------------------------------------
    // Scrolling and navigation derivation
    // ------------------------------------------------------------------

    #[test]
    fn test_scroll_derives_navigation_flags_atomically() {
        let state = state_with_projects(12);
        let state = reduce(state, PageAction::ScrollBy(NAV_SOLID_OFFSET + 10));
        assert!(state.is_scrolled);
        assert!(!state.show_scroll_to_top);

        let state = reduce(state, PageAction::ScrollBy(SCROLL_TOP_OFFSET));
        assert!(state.is_scrolled);
        assert!(state.show_scroll_to_top);

        let state = reduce(state, PageAction::ScrollToTop);
        assert_eq!(state.scroll_y, 0);
        assert!(!state.is_scrolled);
        assert!(!state.show_scroll_to_top);
        assert_eq!(state.active_section, Section::Home);
    }

    #[test]
    fn test_scroll_clamps_to_document_range() {
        let state = state_with_projects(1);
        let geometry = geometry_for(&state);

        let state = reduce(state, PageAction::ScrollBy(-100));
        assert_eq!(state.scroll_y, 0);

        let state = reduce(state, PageAction::ScrollBy(1_000_000));
        assert_eq!(state.scroll_y, geometry.max_scroll(VIEWPORT));
    }

    #[test]
    fn test_scroll_tracks_active_section() {
        let state = state_with_projects(2);
        let geometry = geometry_for(&state);
        let target = geometry.section_top(Section::Services);

        let state = reduce(state, PageAction::ScrollBy(target));
        assert_eq!(state.active_section, Section::Services);
    }

    #[test]
    fn test_go_to_bottom_then_page_up() {
        let state = state_with_projects(4);
        let geometry = geometry_for(&state);

        let state = reduce(state, PageAction::GoToBottom);
        assert_eq!(state.scroll_y, geometry.max_scroll(VIEWPORT));

        let state = reduce(state, PageAction::PageUp);
        assert_eq!(state.scroll_y, geometry.max_scroll(VIEWPORT) - VIEWPORT / 2);
    }

    // ------------------------------------------------------------------
    // Section jumps
    // ------------------------------------------------------------------

    #[test]
    fn test_section_jump_is_optimistic_and_closes_menu() {
        let mut state = state_with_projects(2);
        state.menu_open = true;
        let geometry = geometry_for(&state);

        let state = reduce(state, PageAction::ScrollToSection(Section::Contact));
        // The target wins immediately regardless of where the probe row
        // lands after clamping
        assert_eq!(state.active_section, Section::Contact);
        assert!(!state.menu_open);
        assert_eq!(
            state.scroll_y,
            geometry
                .section_top(Section::Contact)
                .min(geometry.max_scroll(VIEWPORT))
        );
    }

    #[test]
    fn test_section_jump_lands_on_section_top() {
        let state = state_with_projects(8);
        let geometry = geometry_for(&state);

        let state = reduce(state, PageAction::ScrollToSection(Section::Projects));
        assert_eq!(state.scroll_y, geometry.section_top(Section::Projects));
        assert_eq!(state.active_section, Section::Projects);
    }

    #[test]
    fn test_toggle_menu() {
        let state = reduce(PageState::default(), PageAction::ToggleMenu);
        assert!(state.menu_open);
        let state = reduce(state, PageAction::ToggleMenu);
        assert!(!state.menu_open);
    }

    // ------------------------------------------------------------------
    // Project cards and modal
    // ------------------------------------------------------------------

    #[test]
    fn test_card_cursor_clamps_to_collection() {
        let state = state_with_projects(3);
        let state = reduce(state, PageAction::FocusPrevCard);
        assert_eq!(state.focused_card, 0);

        let state = (0..10).fold(state, |s, _| reduce(s, PageAction::FocusNextCard));
        assert_eq!(state.focused_card, 2);
    }

    #[test]
    fn test_card_cursor_noop_while_empty() {
        let state = reduce(PageState::default(), PageAction::FocusNextCard);
        assert_eq!(state.focused_card, 0);
    }

    #[test]
    fn test_open_focused_card_fills_the_slot() {
        let state = state_with_projects(3);
        let state = reduce(state, PageAction::FocusNextCard);
        let state = reduce(state, PageAction::OpenFocusedCard);
        assert_eq!(
            state.selected_project.as_ref().map(|p| p.id.as_str()),
            Some("p-1")
        );
    }

    #[test]
    fn test_select_project_replaces_prior_selection() {
        let state = state_with_projects(2);
        let state = reduce(
            state,
            PageAction::SelectProject(make_project("a", "First")),
        );
        let state = reduce(
            state,
            PageAction::SelectProject(make_project("b", "Second")),
        );
        assert_eq!(
            state.selected_project.as_ref().map(|p| p.id.as_str()),
            Some("b")
        );

        let state = reduce(state, PageAction::CloseModal);
        assert!(state.selected_project.is_none());
    }

    #[test]
    fn test_close_modal_preserves_scroll_and_draft() {
        let mut state = state_with_projects(2);
        state.draft = complete_draft();
        let state = reduce(state, PageAction::ScrollBy(200));
        let scroll_before = state.scroll_y;

        let state = reduce(
            state,
            PageAction::SelectProject(make_project("a", "First")),
        );
        let state = reduce(state, PageAction::CloseModal);
        assert_eq!(state.scroll_y, scroll_before);
        assert_eq!(state.draft, complete_draft());
    }

    // ------------------------------------------------------------------
    // Key routing and modal containment
    // ------------------------------------------------------------------

    #[test]
    fn test_modal_owns_the_keyboard() {
        // Scroll and quit keys must not leak through an open modal
        for code in [
            KeyCode::Char('j'),
            KeyCode::Char('k'),
            KeyCode::Char('1'),
            KeyCode::Char('i'),
            KeyCode::Char('m'),
            KeyCode::PageDown,
        ] {
            assert_eq!(
                key_to_action(code, KeyModifiers::empty(), true, Focus::Document),
                None
            );
        }
        assert_eq!(
            key_to_action(KeyCode::Esc, KeyModifiers::empty(), true, Focus::Document),
            Some(PageAction::CloseModal)
        );
        assert_eq!(
            key_to_action(
                KeyCode::Char('q'),
                KeyModifiers::empty(),
                true,
                Focus::Document
            ),
            Some(PageAction::CloseModal)
        );
    }

    #[test]
    fn test_document_key_map() {
        let cases = [
            (KeyCode::Char('j'), PageAction::ScrollBy(3)),
            (KeyCode::Up, PageAction::ScrollBy(-3)),
            (KeyCode::Char('g'), PageAction::ScrollToTop),
            (KeyCode::Char('G'), PageAction::GoToBottom),
            (KeyCode::Char('3'), PageAction::ScrollToSection(Section::Projects)),
            (KeyCode::Char('m'), PageAction::ToggleMenu),
            (KeyCode::Enter, PageAction::OpenFocusedCard),
            (KeyCode::Char('i'), PageAction::FocusForm),
            (KeyCode::Char('x'), PageAction::DismissToast),
            (KeyCode::Char('q'), PageAction::Quit),
        ];
        for (code, expected) in cases {
            assert_eq!(
                key_to_action(code, KeyModifiers::empty(), false, Focus::Document),
                Some(expected)
            );
        }
    }

    #[test]
    fn test_form_keys_route_to_form_actions() {
        let focus = Focus::Form(ContactField::Email);
        assert_eq!(
            key_to_action(KeyCode::Tab, KeyModifiers::empty(), false, focus),
            Some(PageAction::FocusNextField)
        );
        assert_eq!(
            key_to_action(KeyCode::Esc, KeyModifiers::empty(), false, focus),
            Some(PageAction::ExitForm)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('s'), KeyModifiers::CONTROL, false, focus),
            Some(PageAction::SubmitRequested)
        );
        // Plain characters fall through to the focused text input
        assert_eq!(
            key_to_action(KeyCode::Char('s'), KeyModifiers::empty(), false, focus),
            None
        );
        assert_eq!(
            key_to_action(KeyCode::Char('q'), KeyModifiers::empty(), false, focus),
            None
        );
    }

    #[test]
    fn test_form_focus_cycle() {
        let mut state = PageState::default();
        state.focus = Focus::Form(ContactField::Name);

        let state = reduce(state, PageAction::FocusNextField);
        assert_eq!(state.focus, Focus::Form(ContactField::Email));
        let state = reduce(state, PageAction::FocusNextField);
        assert_eq!(state.focus, Focus::Form(ContactField::Message));
        let state = reduce(state, PageAction::FocusNextField);
        assert_eq!(state.focus, Focus::Document);

        let state = reduce(state, PageAction::FocusPrevField);
        assert_eq!(state.focus, Focus::Form(ContactField::Message));
    }

    #[test]
    fn test_focus_form_jumps_to_contact() {
        let state = state_with_projects(2);
        let geometry = geometry_for(&state);
        let state = reduce(state, PageAction::FocusForm);
        assert_eq!(state.focus, Focus::Form(ContactField::Name));
        assert_eq!(state.active_section, Section::Contact);
        assert_eq!(
            state.scroll_y,
            geometry
                .section_top(Section::Contact)
                .min(geometry.max_scroll(VIEWPORT))
        );
    }

    // ------------------------------------------------------------------
    // Contact submission lifecycle
    // ------------------------------------------------------------------

    #[test]
    fn test_incomplete_submit_is_refused() {
        let mut state = PageState::default();
        state.draft.name = "Ada".to_string();

        let state = reduce(state, PageAction::SubmitRequested);
        assert_eq!(state.submit_phase, SubmitPhase::Editing);
        assert_eq!(state.submit_generation, 0);
        assert!(state.toast.is_some());
        assert_eq!(state.draft.name, "Ada");
    }

    #[test]
    fn test_refusal_toast_can_be_dismissed() {
        let mut state = PageState::default();
        state.focus = Focus::Form(ContactField::Name);

        // Ctrl+S on an empty draft raises the required-fields warning
        let action =
            key_to_action(KeyCode::Char('s'), KeyModifiers::CONTROL, false, state.focus).unwrap();
        let state = reduce(state, action);
        assert_eq!(state.toast.as_ref().unwrap().level, ToastLevel::Warning);

        // Esc leaves the form, then x clears the toast
        let action =
            key_to_action(KeyCode::Esc, KeyModifiers::empty(), false, state.focus).unwrap();
        let state = reduce(state, action);
        assert_eq!(state.focus, Focus::Document);

        let action =
            key_to_action(KeyCode::Char('x'), KeyModifiers::empty(), false, state.focus).unwrap();
        let state = reduce(state, action);
        assert!(state.toast.is_none());
    }

    #[test]
    fn test_complete_submit_enters_submitting_and_bumps_generation() {
        let mut state = PageState::default();
        state.draft = complete_draft();

        let state = reduce(state, PageAction::SubmitRequested);
        assert_eq!(state.submit_phase, SubmitPhase::Submitting);
        assert_eq!(state.submit_generation, 1);
        // The draft stays intact until settlement
        assert_eq!(state.draft, complete_draft());
    }

    #[test]
    fn test_submit_ignored_while_in_flight() {
        let mut state = PageState::default();
        state.draft = complete_draft();
        let state = reduce(state, PageAction::SubmitRequested);
        let state = reduce(state, PageAction::SubmitRequested);
        assert_eq!(state.submit_generation, 1);
    }

    #[test]
    fn test_success_clears_draft_and_acknowledges() {
        let mut state = PageState::default();
        state.draft = complete_draft();
        let state = reduce(state, PageAction::SubmitRequested);

        let state = apply_submission_outcome(
            state,
            Ok(ContactOutcome {
                success: true,
                message: None,
            }),
        );
        assert_eq!(state.submit_phase, SubmitPhase::Acknowledged);
        assert_eq!(state.draft, ContactDraft::default());
        assert_eq!(state.toast.as_ref().unwrap().level, ToastLevel::Success);
    }

    #[test]
    fn test_logical_failure_preserves_draft() {
        let mut state = PageState::default();
        state.draft = complete_draft();
        let state = reduce(state, PageAction::SubmitRequested);

        let state = apply_submission_outcome(
            state,
            Ok(ContactOutcome {
                success: false,
                message: Some("spam score too high".to_string()),
            }),
        );
        assert_eq!(state.submit_phase, SubmitPhase::Editing);
        assert_eq!(state.draft, complete_draft());
        let toast = state.toast.as_ref().unwrap();
        assert_eq!(toast.level, ToastLevel::Error);
        assert!(toast.message.contains("spam score"));
    }

    #[test]
    fn test_network_failure_clears_draft_and_raises_error() {
        let mut state = PageState::default();
        state.draft = complete_draft();
        let state = reduce(state, PageAction::SubmitRequested);

        let state = apply_submission_outcome(state, Err("connection refused".to_string()));
        assert_eq!(state.submit_phase, SubmitPhase::Editing);
        assert_eq!(state.draft, ContactDraft::default());
        assert_eq!(state.toast.as_ref().unwrap().level, ToastLevel::Error);
    }

    #[test]
    fn test_revert_matches_generation() {
        let mut state = PageState::default();
        state.draft = complete_draft();
        let state = reduce(state, PageAction::SubmitRequested);
        let generation = state.submit_generation;
        let state = apply_submission_outcome(
            state,
            Ok(ContactOutcome {
                success: true,
                message: None,
            }),
        );

        let state = revert_acknowledgment(state, generation);
        assert_eq!(state.submit_phase, SubmitPhase::Editing);
    }

    #[test]
    fn test_revert_is_noop_when_superseded() {
        let mut state = PageState::default();
        state.draft = complete_draft();
        let state = reduce(state, PageAction::SubmitRequested);
        let stale_generation = state.submit_generation;
        let state = apply_submission_outcome(
            state,
            Ok(ContactOutcome {
                success: true,
                message: None,
            }),
        );

        // A second submission supersedes the scheduled revert
        let mut state = state;
        state.submit_phase = SubmitPhase::Editing;
        state.draft = complete_draft();
        let state = reduce(state, PageAction::SubmitRequested);
        let state = apply_submission_outcome(
            state,
            Ok(ContactOutcome {
                success: true,
                message: None,
            }),
        );

        let state = revert_acknowledgment(state, stale_generation);
        assert_eq!(state.submit_phase, SubmitPhase::Acknowledged);
    }

    #[test]
    fn test_edits_merge_by_field() {
        let state = PageState::default();
        let state = reduce(
            state,
            PageAction::EditField(ContactField::Email, "ada@example.com".to_string()),
        );
        let state = reduce(
            state,
            PageAction::EditField(ContactField::Name, "Ada".to_string()),
        );
        assert_eq!(state.draft.name, "Ada");
        assert_eq!(state.draft.email, "ada@example.com");
        assert_eq!(state.draft.message, "");
    }

    // ------------------------------------------------------------------
    // View model
    // ------------------------------------------------------------------

    #[test]
    fn test_window_at_top_shows_home_first() {
        let state = state_with_projects(2);
        let geometry = geometry_for(&state);
        let vm = compute_page_view_model(&state, &geometry, VIEWPORT);
        assert_eq!(vm.window.visible.first(), Some(&Section::Home));
        assert_eq!(vm.window.hidden_above, 0);
        assert!(vm.window.hidden_below > 0);
    }

    #[test]
    fn test_window_partition_is_total() {
        let state = state_with_projects(5);
        let geometry = geometry_for(&state);
        let state = reduce(state, PageAction::ScrollToSection(Section::Services));
        let vm = compute_page_view_model(&state, &geometry, VIEWPORT);
        assert_eq!(
            vm.window.visible.len() + vm.window.hidden_above + vm.window.hidden_below,
            Section::ALL.len()
        );
        assert!(vm.window.hidden_above > 0);
    }

    #[test]
    fn test_submit_control_follows_phase() {
        let mut state = PageState::default();
        state.projects.settle_ok(vec![]);
        state.services.settle_ok(vec![]);
        let geometry = geometry_for(&state);

        let vm = compute_page_view_model(&state, &geometry, VIEWPORT);
        assert_eq!(vm.submit_label, "Send Message");
        assert!(!vm.submit_disabled);

        state.submit_phase = SubmitPhase::Submitting;
        let vm = compute_page_view_model(&state, &geometry, VIEWPORT);
        assert_eq!(vm.submit_label, "Sending...");
        assert!(vm.submit_disabled);

        state.submit_phase = SubmitPhase::Acknowledged;
        let vm = compute_page_view_model(&state, &geometry, VIEWPORT);
        assert_eq!(vm.submit_label, "Thanks for contacting!");
        assert!(vm.submit_disabled);
    }

    #[test]
    fn test_dismiss_shortcut_tracks_toast() {
        let mut state = PageState::default();
        state.projects.settle_ok(vec![]);
        state.services.settle_ok(vec![]);
        let geometry = geometry_for(&state);

        let vm = compute_page_view_model(&state, &geometry, VIEWPORT);
        assert!(!vm.shortcuts.iter().any(|s| s.key == "x"));

        state.toast = Some(Toast::error("offline"));
        let vm = compute_page_view_model(&state, &geometry, VIEWPORT);
        assert!(vm.shortcuts.iter().any(|s| s.key == "x"));
    }
}
