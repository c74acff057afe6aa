//! FindIt Core
//!
//! Browser-independent pieces of the FindIt frontend:
//! - models: backend records (items, notifications, stats)
//! - pipeline: filter/sort/paginate over the loaded item list
//! - session: user record + client prefs over a key-value storage trait
//! - notify: notification watermark and unread badge
//! - validate: form checks that run before any request
//! - api: `{success, ...}` envelope parsing and request bodies
//! - format: relative dates and labels
//! - toast: transient message type

pub mod api;
pub mod format;
pub mod models;
pub mod notify;
pub mod pipeline;
pub mod session;
pub mod toast;
pub mod validate;

pub use api::ApiError;
pub use models::{Category, Item, ItemImage, ItemStatus, Notification, UserStats};
pub use pipeline::{FilterState, ListState, SortKey};
pub use session::{KeyValueStore, SessionStore, StorageError, StorageScope, UserSession};
pub use toast::{Toast, ToastKind};
pub use validate::ValidationError;
