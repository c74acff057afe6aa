//! Application Context
//!
//! Navigation and toast handles provided via Leptos Context API.

use leptos::prelude::*;
use findit_core::Toast;

use crate::storage::session_store;

/// Which page the app is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Browse,
    ItemDetail,
    ReportFound,
    ReportLost,
    Login,
    Register,
    Profile,
    MyItems,
    EditProfile,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page - read
    pub page: ReadSignal<Page>,
    /// Current page - write
    set_page: WriteSignal<Page>,
    /// Visible toast - read
    pub toast: ReadSignal<Option<Toast>>,
    /// Visible toast - write
    set_toast: WriteSignal<Option<Toast>>,
    /// Search term carried from the home hero into Browse
    search_handoff: RwSignal<Option<String>>,
}

impl AppContext {
    pub fn new(
        page: (ReadSignal<Page>, WriteSignal<Page>),
        toast: (ReadSignal<Option<Toast>>, WriteSignal<Option<Toast>>),
    ) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
            toast: toast.0,
            set_toast: toast.1,
            search_handoff: RwSignal::new(None),
        }
    }

    pub fn navigate(&self, page: Page) {
        log::info!("[App] navigate to {:?}", page);
        self.set_page.set(page);
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }

    /// Show a toast, replacing whatever is up
    pub fn toast(&self, toast: Toast) {
        self.set_toast.set(Some(toast));
    }

    pub fn dismiss_toast(&self) {
        self.set_toast.set(None);
    }

    /// Remember the item for the detail page, then open it
    pub fn open_item(&self, id: u32) {
        if let Err(e) = session_store().set_selected_item(id) {
            log::warn!("[App] selected item not saved: {}", e);
        }
        self.navigate(Page::ItemDetail);
    }

    /// Open Browse with the search box pre-filled
    pub fn search_for(&self, term: String) {
        self.search_handoff.set(Some(term));
        self.navigate(Page::Browse);
    }

    /// Consume the pending search term, if any
    pub fn take_search(&self) -> Option<String> {
        let term = self.search_handoff.get_untracked();
        if term.is_some() {
            self.search_handoff.set(None);
        }
        term
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
