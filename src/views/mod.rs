//! Pages
//!
//! One component per `Page`, switched in `App`.

mod home;
mod browse;
mod item_detail;
mod report_form;
mod login;
mod register;
mod profile;
mod my_items;
mod edit_profile;

pub use home::HomePage;
pub use browse::BrowsePage;
pub use item_detail::ItemDetailPage;
pub use report_form::ReportFormPage;
pub use login::LoginPage;
pub use register::RegisterPage;
pub use profile::ProfilePage;
pub use my_items::MyItemsPage;
pub use edit_profile::EditProfilePage;
