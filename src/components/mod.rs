//! UI Components
//!
//! Reusable Leptos components.

mod nav_bar;
mod toast_host;
mod notification_menu;
mod item_card;
mod item_list;
mod filter_bar;
mod delete_confirm_button;
mod modal;
mod password_field;

pub use nav_bar::{NavBar, NavMenu};
pub use toast_host::ToastHost;
pub use notification_menu::NotificationBell;
pub use item_card::{ItemCard, ItemImageView};
pub use item_list::{ItemList, ListConfig};
pub use filter_bar::FilterBar;
pub use delete_confirm_button::DeleteConfirmButton;
pub use modal::Modal;
pub use password_field::PasswordField;
