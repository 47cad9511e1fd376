//! Application Context
//!
//! Shared navigation and overlay state provided via Leptos Context API.

use leptos::prelude::*;

/// Top-level views. Navigation is an in-app switch, not a URL router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Books,
    Categories,
    Subscription,
    Wishlist,
    Dashboard,
    NotFound,
}

/// Product handed to the booking modal
#[derive(Debug, Clone, PartialEq)]
pub struct BookingTarget {
    pub product_name: String,
    pub price: f64,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current top-level view - read
    pub view: ReadSignal<View>,
    set_view: WriteSignal<View>,
    /// Product currently in the booking modal (None = closed) - read
    pub booking: ReadSignal<Option<BookingTarget>>,
    set_booking: WriteSignal<Option<BookingTarget>>,
    /// Trigger to re-fetch the wishlist sidebar contents - read
    pub wishlist_refresh: ReadSignal<u32>,
    set_wishlist_refresh: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        view: (ReadSignal<View>, WriteSignal<View>),
        booking: (ReadSignal<Option<BookingTarget>>, WriteSignal<Option<BookingTarget>>),
        wishlist_refresh: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            view: view.0,
            set_view: view.1,
            booking: booking.0,
            set_booking: booking.1,
            wishlist_refresh: wishlist_refresh.0,
            set_wishlist_refresh: wishlist_refresh.1,
        }
    }

    /// Switch the main view and scroll back to the top
    pub fn navigate(&self, view: View) {
        self.set_view.set(view);
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }

    pub fn open_booking(&self, target: BookingTarget) {
        self.set_booking.set(Some(target));
    }

    pub fn close_booking(&self) {
        self.set_booking.set(None);
    }

    /// Ask the wishlist sidebar to hydrate from the backend
    pub fn refresh_wishlist(&self) {
        self.set_wishlist_refresh.update(|v| *v += 1);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
