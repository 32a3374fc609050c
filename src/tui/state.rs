//! Shared state types for the portfolio page.

/// The five sections of the portfolio document, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Projects,
    Services,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Services,
        Section::Contact,
    ];

    /// Human label shown in the navigation bar
    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Services => "Services",
            Section::Contact => "Contact",
        }
    }
}

/// A remote-backed list along with its fetch lifecycle markers.
///
/// Starts in the loading state so the UI never flashes an empty-list message
/// before the first fetch settles. Settling always drops the loading flag,
/// and a successful settle clears any prior error.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteCollection<T> {
    pub items: Vec<T>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl<T> Default for RemoteCollection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            is_loading: true,
            error: None,
        }
    }
}

impl<T> RemoteCollection<T> {
    pub fn settle_ok(&mut self, items: Vec<T>) {
        self.items = items;
        self.is_loading = false;
        self.error = None;
    }

    pub fn settle_err(&mut self, error: String) {
        self.is_loading = false;
        self.error = Some(error);
    }

    /// True once a fetch settled successfully with no items
    pub fn is_settled_empty(&self) -> bool {
        !self.is_loading && self.error.is_none() && self.items.is_empty()
    }
}
