//! UI Components
//!
//! Leptos view components, one file per view.

mod booking_modal;
mod books_page;
mod breadcrumbs;
mod buyers_table;
mod cart_sidebar;
mod categories_page;
mod confirm_dialog;
mod dashboard;
mod error_page;
mod footer;
mod my_products;
mod pager;
mod sellers_table;
mod subscription_page;
mod wishlist_page;
mod wishlist_sidebar;

// Re-export the components mounted by the app root
pub use booking_modal::BookingModal;
pub use books_page::BooksPage;
pub use cart_sidebar::CartSidebar;
pub use categories_page::CategoriesPage;
pub use dashboard::Dashboard;
pub use error_page::ErrorPage;
pub use footer::Footer;
pub use subscription_page::SubscriptionPage;
pub use wishlist_page::WishlistPage;
pub use wishlist_sidebar::WishlistSidebar;
