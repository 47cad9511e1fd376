//! BookVault Application Root
//!
//! Top-level layout: header with navigation and sidebar toggles, the
//! current view, global overlays (sidebars, booking modal, toasts) and
//! the footer.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::auth::AuthContext;
use crate::components::{
    BookingModal, BooksPage, CartSidebar, CategoriesPage, Dashboard, ErrorPage, Footer,
    SubscriptionPage, WishlistPage, WishlistSidebar,
};
use crate::context::{AppContext, View};
use crate::models::Role;
use crate::store::{cart_toggle, wishlist_toggle, AppState, AppStateStoreFields};
use crate::toast::{ToastContext, Toaster};

const NAV: &[(&str, View)] = &[
    ("Books", View::Books),
    ("Categories", View::Categories),
    ("Plans", View::Subscription),
    ("Dashboard", View::Dashboard),
];

/// Initial view from the location hash; routing proper is out of scope,
/// but an unknown hash still lands on the 404 page.
fn initial_view() -> View {
    let hash = web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    match hash.trim_start_matches('#') {
        "" | "books" => View::Books,
        "categories" => View::Categories,
        "plans" => View::Subscription,
        "wishlist" => View::Wishlist,
        "dashboard" => View::Dashboard,
        _ => View::NotFound,
    }
}

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::hydrated());
    provide_context(store);

    let auth = AuthContext::new();
    provide_context(auth);
    if let Some(session) = crate::auth::restore_session() {
        auth.sign_in(session);
    }

    let toast = ToastContext::new();
    provide_context(toast);

    let (view, set_view) = signal(initial_view());
    let (booking, set_booking) = signal(None);
    let (wishlist_refresh, set_wishlist_refresh) = signal(0u32);

    // Provide context to all children
    let ctx = AppContext::new(
        (view, set_view),
        (booking, set_booking),
        (wishlist_refresh, set_wishlist_refresh),
    );
    provide_context(ctx);

    // Resolve the backend role whenever the session changes; lookup
    // failures fall back to Buyer.
    Effect::new(move |_| {
        let Some(session) = auth.user().get() else {
            return;
        };
        spawn_local(async move {
            match api::fetch_role(&session.token).await {
                Ok(role) => auth.set_role(role),
                Err(err) => {
                    web_sys::console::warn_1(&format!("[AUTH] role lookup failed: {}", err).into());
                    auth.set_role(Role::Buyer);
                }
            }
        });
    });

    let cart_count = move || store.cart().read().items.len();
    let wishlist_count = move || store.wishlist().read().items.len();

    let open_wishlist = move |_| {
        wishlist_toggle(&store);
        // Hydrate only when the toggle just opened the sidebar
        if store.wishlist().read_untracked().is_open {
            ctx.refresh_wishlist();
        }
    };

    view! {
        <div class="app-shell">
            <header class="app-header">
                <button class="brand" on:click=move |_| ctx.navigate(View::Books)>
                    "BookVault"
                </button>

                <nav class="app-nav">
                    {NAV.iter().map(|(label, target)| {
                        let target = *target;
                        view! {
                            <button
                                class=move || {
                                    if ctx.view.get() == target { "nav-btn active" } else { "nav-btn" }
                                }
                                on:click=move |_| ctx.navigate(target)
                            >
                                {*label}
                            </button>
                        }
                    }).collect_view()}
                </nav>

                <div class="header-actions">
                    {move || auth.user().get().map(|session| view! {
                        <span class="header-user">{session.email}</span>
                        <button class="link-btn" on:click=move |_| auth.sign_out()>
                            "Sign out"
                        </button>
                    })}
                    <button class="header-icon-btn" on:click=open_wishlist>
                        "♡" <span class="badge">{wishlist_count}</span>
                    </button>
                    <button class="header-icon-btn" on:click=move |_| cart_toggle(&store)>
                        "🛒" <span class="badge">{cart_count}</span>
                    </button>
                </div>
            </header>

            <main class="app-main">
                {move || match ctx.view.get() {
                    View::Books => view! { <BooksPage /> }.into_any(),
                    View::Categories => view! { <CategoriesPage /> }.into_any(),
                    View::Subscription => view! { <SubscriptionPage /> }.into_any(),
                    View::Wishlist => view! { <WishlistPage /> }.into_any(),
                    View::Dashboard => view! { <Dashboard /> }.into_any(),
                    View::NotFound => view! { <ErrorPage /> }.into_any(),
                }}
            </main>

            <Footer />

            <CartSidebar />
            <WishlistSidebar />
            <BookingModal />
            <Toaster />
        </div>
    }
}
