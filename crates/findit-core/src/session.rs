//! Session Store
//!
//! The logged-in user record lives as a JSON blob under `userData` in exactly one
//! of two key-value scopes: persistent ("remember me") or session-lifetime.
//! Other small client prefs (theme, notification watermark, selected item)
//! share the same storage abstraction.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const USER_DATA_KEY: &str = "userData";
pub const LAST_SEEN_NOTIFICATION_KEY: &str = "lastSeenNotificationId";
pub const SELECTED_ITEM_KEY: &str = "selectedItemId";
pub const THEME_KEY: &str = "theme";
pub const WELCOME_SHOWN_KEY: &str = "welcomeShown";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("failed to serialize session: {0}")]
    Serialize(String),
    #[error("failed to read stored session: {0}")]
    Deserialize(String),
}

/// Minimal string key-value storage (browser `Storage`, or memory in tests)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Which storage scope holds the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageScope {
    /// Survives browser restarts (remember me)
    Persistent,
    /// Cleared when the tab/browser session ends
    Session,
}

impl StorageScope {
    pub fn for_remember_me(remember_me: bool) -> Self {
        if remember_me {
            StorageScope::Persistent
        } else {
            StorageScope::Session
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPrefs {
    pub email: bool,
    pub sms: bool,
    pub stories: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self { email: true, sms: false, stories: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacyPrefs {
    pub visibility: String,
    #[serde(rename = "showPhone", default)]
    pub show_phone: bool,
}

impl Default for PrivacyPrefs {
    fn default() -> Self {
        Self { visibility: "members".to_string(), show_phone: false }
    }
}

/// Logged-in user record
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserSession {
    pub id: u32,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub join_date: Option<String>,
    #[serde(default)]
    pub notifications: NotificationPrefs,
    #[serde(default)]
    pub privacy: PrivacyPrefs,
    #[serde(rename = "loginTime", default, skip_serializing_if = "Option::is_none")]
    pub login_time: Option<String>,
    #[serde(rename = "rememberMe", default)]
    pub remember_me: bool,
}

/// Partial profile sent to `PUT /api/users/:id`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub bio: String,
    pub notifications: NotificationPrefs,
    pub privacy: PrivacyPrefs,
}

impl ProfileUpdate {
    pub fn from_session(user: &UserSession) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone().unwrap_or_default(),
            location: user.location.clone().unwrap_or_default(),
            bio: user.bio.clone().unwrap_or_default(),
            notifications: user.notifications.clone(),
            privacy: user.privacy.clone(),
        }
    }

    /// Session record with this update merged in
    pub fn merge_into(&self, user: &UserSession) -> UserSession {
        UserSession {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: Some(self.phone.clone()),
            location: Some(self.location.clone()),
            bio: Some(self.bio.clone()),
            notifications: self.notifications.clone(),
            privacy: self.privacy.clone(),
            ..user.clone()
        }
    }

    /// Whether any editable text field differs from the stored record
    pub fn differs_from(&self, user: &UserSession) -> bool {
        self.name != user.name
            || self.email != user.email
            || self.phone != user.phone.clone().unwrap_or_default()
            || self.location != user.location.clone().unwrap_or_default()
            || self.bio != user.bio.clone().unwrap_or_default()
    }
}

/// Reads and writes the session blob across the two scopes
pub struct SessionStore<P, S> {
    persistent: P,
    session: S,
}

impl<P: KeyValueStore, S: KeyValueStore> SessionStore<P, S> {
    pub fn new(persistent: P, session: S) -> Self {
        Self { persistent, session }
    }

    fn scope(&self, scope: StorageScope) -> &dyn KeyValueStore {
        match scope {
            StorageScope::Persistent => &self.persistent,
            StorageScope::Session => &self.session,
        }
    }

    /// Persistent scope for client prefs
    pub fn prefs(&self) -> &P {
        &self.persistent
    }

    /// Session-lifetime scope for per-visit flags
    pub fn visit(&self) -> &S {
        &self.session
    }

    /// Which scope currently holds a user record, persistent first
    pub fn active_scope(&self) -> Option<StorageScope> {
        [StorageScope::Persistent, StorageScope::Session]
            .into_iter()
            .find(|scope| self.scope(*scope).get(USER_DATA_KEY).is_some())
    }

    /// Current user, if any scope holds a readable record
    pub fn load(&self) -> Option<UserSession> {
        let scope = self.active_scope()?;
        let raw = self.scope(scope).get(USER_DATA_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("[Session] ignoring unreadable user record: {}", e);
                None
            }
        }
    }

    /// Store a fresh login in the scope chosen by "remember me"
    pub fn login(&self, user: &UserSession, scope: StorageScope) -> Result<(), StorageError> {
        self.clear();
        self.write(user, scope)
    }

    /// Write an edited record back to whichever scope held it.
    ///
    /// Session scope wins when both hold a record.
    pub fn update(&self, user: &UserSession) -> Result<(), StorageError> {
        let scope = if self.session.get(USER_DATA_KEY).is_some() {
            StorageScope::Session
        } else {
            StorageScope::Persistent
        };
        self.write(user, scope)
    }

    fn write(&self, user: &UserSession, scope: StorageScope) -> Result<(), StorageError> {
        let json = serde_json::to_string(user).map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.scope(scope).set(USER_DATA_KEY, &json)
    }

    /// Logout / account deletion: both scopes, unconditionally
    pub fn clear(&self) {
        self.persistent.remove(USER_DATA_KEY);
        self.session.remove(USER_DATA_KEY);
    }

    pub fn last_seen_notification(&self) -> u64 {
        self.persistent
            .get(LAST_SEEN_NOTIFICATION_KEY)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(0)
    }

    pub fn set_last_seen_notification(&self, id: u64) -> Result<(), StorageError> {
        self.persistent.set(LAST_SEEN_NOTIFICATION_KEY, &id.to_string())
    }

    pub fn selected_item(&self) -> Option<u32> {
        self.persistent.get(SELECTED_ITEM_KEY).and_then(|v| v.trim().parse().ok())
    }

    pub fn set_selected_item(&self, id: u32) -> Result<(), StorageError> {
        self.persistent.set(SELECTED_ITEM_KEY, &id.to_string())
    }

    pub fn theme(&self) -> Theme {
        self.persistent.get(THEME_KEY).map(|t| Theme::parse(&t)).unwrap_or_default()
    }

    pub fn set_theme(&self, theme: Theme) -> Result<(), StorageError> {
        self.persistent.set(THEME_KEY, theme.as_str())
    }

    /// True the first time it's called in a browser session
    pub fn take_welcome(&self) -> bool {
        if self.session.get(WELCOME_SHOWN_KEY).is_some() {
            return false;
        }
        let _ = self.session.set(WELCOME_SHOWN_KEY, "true");
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Self {
        if s == "dark" { Theme::Dark } else { Theme::Light }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon offered to switch away from this theme
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Light => "fas fa-moon",
            Theme::Dark => "fas fa-sun",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SessionStore<MemoryStore, MemoryStore> {
        SessionStore::new(MemoryStore::new(), MemoryStore::new())
    }

    fn user() -> UserSession {
        UserSession {
            id: 7,
            name: "John Smith".into(),
            email: "john@example.com".into(),
            phone: Some("555-0100".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_remember_me_selects_scope() {
        let s = store();
        s.login(&user(), StorageScope::for_remember_me(true)).unwrap();
        assert_eq!(s.active_scope(), Some(StorageScope::Persistent));
        assert!(s.visit().get(USER_DATA_KEY).is_none());

        let s = store();
        s.login(&user(), StorageScope::for_remember_me(false)).unwrap();
        assert_eq!(s.active_scope(), Some(StorageScope::Session));
        assert_eq!(s.load().unwrap().id, 7);
    }

    /// Browser storage that refuses writes (quota, private mode)
    struct Refusing;

    impl KeyValueStore for Refusing {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }

        fn remove(&self, _key: &str) {}
    }

    #[test]
    fn test_login_reports_refused_write() {
        let s = SessionStore::new(Refusing, MemoryStore::new());
        let err = s.login(&user(), StorageScope::Persistent).unwrap_err();
        assert_eq!(err, StorageError::Unavailable);
        assert!(s.load().is_none());
    }

    #[test]
    fn test_logout_clears_both_scopes() {
        let s = store();
        s.prefs().set(USER_DATA_KEY, "{}").unwrap();
        s.visit().set(USER_DATA_KEY, "{}").unwrap();
        s.clear();
        assert!(s.prefs().get(USER_DATA_KEY).is_none());
        assert!(s.visit().get(USER_DATA_KEY).is_none());
        assert!(s.load().is_none());
    }

    #[test]
    fn test_login_replaces_record_in_other_scope() {
        let s = store();
        s.login(&user(), StorageScope::Persistent).unwrap();
        s.login(&user(), StorageScope::Session).unwrap();
        assert!(s.prefs().get(USER_DATA_KEY).is_none());
        assert_eq!(s.active_scope(), Some(StorageScope::Session));
    }

    #[test]
    fn test_update_writes_back_to_holding_scope() {
        let s = store();
        s.login(&user(), StorageScope::Session).unwrap();
        let mut edited = user();
        edited.name = "Johnny".into();
        s.update(&edited).unwrap();
        assert!(s.prefs().get(USER_DATA_KEY).is_none());
        assert_eq!(s.load().unwrap().name, "Johnny");
    }

    #[test]
    fn test_unreadable_record_is_ignored() {
        let s = store();
        s.prefs().set(USER_DATA_KEY, "not json").unwrap();
        assert!(s.load().is_none());
    }

    #[test]
    fn test_server_user_shape_deserializes() {
        let json = r#"{"id":3,"name":"Jane","email":"jane@x.com","phone":null,"location":"NYC","join_date":"2024-02-15T00:00:00"}"#;
        let user: UserSession = serde_json::from_str(json).unwrap();
        assert_eq!(user.phone, None);
        assert_eq!(user.privacy.visibility, "members");
        assert!(user.notifications.email);
    }

    #[test]
    fn test_camel_case_keys_on_the_wire() {
        let mut u = user();
        u.login_time = Some("2024-01-01T00:00:00Z".into());
        u.privacy.show_phone = true;
        let json = serde_json::to_string(&u).unwrap();
        assert!(json.contains("\"loginTime\""));
        assert!(json.contains("\"rememberMe\""));
        assert!(json.contains("\"showPhone\":true"));
    }

    #[test]
    fn test_profile_update_merge_keeps_identity() {
        let mut update = ProfileUpdate::from_session(&user());
        assert!(!update.differs_from(&user()));
        update.bio = "Helping out".into();
        assert!(update.differs_from(&user()));

        let merged = update.merge_into(&user());
        assert_eq!(merged.id, 7);
        assert_eq!(merged.bio.as_deref(), Some("Helping out"));
    }

    #[test]
    fn test_prefs_round_trip() {
        let s = store();
        assert_eq!(s.last_seen_notification(), 0);
        s.set_last_seen_notification(12).unwrap();
        assert_eq!(s.last_seen_notification(), 12);

        assert_eq!(s.selected_item(), None);
        s.set_selected_item(4).unwrap();
        assert_eq!(s.selected_item(), Some(4));

        assert_eq!(s.theme(), Theme::Light);
        s.set_theme(Theme::Light.toggled()).unwrap();
        assert_eq!(s.theme(), Theme::Dark);
    }

    #[test]
    fn test_welcome_shown_once_per_session() {
        let s = store();
        assert!(s.take_welcome());
        assert!(!s.take_welcome());
    }
}
