//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use findit_core::session::Theme;
use findit_core::{Notification, UserSession};

use crate::storage::session_store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Logged-in user, mirrored from browser storage
    pub user: Option<UserSession>,
    /// Unread count from the last poll (badge)
    pub unread: usize,
    /// Last fetched notification batch
    pub notifications: Vec<Notification>,
    pub theme: Theme,
}

impl AppState {
    /// Seed from whatever browser storage already holds
    pub fn load() -> Self {
        let session = session_store();
        Self {
            user: session.load(),
            theme: session.theme(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// New session: user set, badge reset until the first poll lands
pub fn store_login(store: &AppStore, user: UserSession) {
    store.user().set(Some(user));
    store.unread().set(0);
    store.notifications().write().clear();
}

pub fn store_logout(store: &AppStore) {
    session_store().clear();
    store.user().set(None);
    store.unread().set(0);
    store.notifications().write().clear();
}

/// Mark one notification read locally; badge never goes below zero
pub fn store_mark_read(store: &AppStore, id: u64) {
    if let Some(n) = store.notifications().write().iter_mut().find(|n| n.id == id) {
        n.read = true;
    }
    store.unread().update(|count| *count = count.saturating_sub(1));
}

pub fn store_set_theme(store: &AppStore, theme: Theme) {
    if let Err(e) = session_store().set_theme(theme) {
        log::warn!("[App] theme not saved: {}", e);
    }
    store.theme().set(theme);
}
