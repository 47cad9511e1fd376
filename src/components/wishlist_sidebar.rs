//! Wishlist Sidebar Component
//!
//! Slide-over panel hydrated from the backend each time it opens.
//! Hydration is fire-and-forget: concurrent fetches race and the last
//! response to resolve wins.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::auth::use_auth;
use crate::context::{use_app_context, View};
use crate::models::WishlistItem;
use crate::store::{
    use_app_store, wishlist_clear, wishlist_remove, wishlist_set, wishlist_toggle,
    AppStateStoreFields,
};

#[component]
pub fn WishlistSidebar() -> impl IntoView {
    let store = use_app_store();
    let auth = use_auth();
    let ctx = use_app_context();
    let (loading, set_loading) = signal(false);

    // Re-fetch whenever the header button bumps the refresh trigger.
    // No user signed in means there is nothing to fetch.
    Effect::new(move |_| {
        if ctx.wishlist_refresh.get() == 0 {
            return;
        }
        if !store.wishlist().read_untracked().is_open {
            return;
        }
        let Some(session) = auth.user().get_untracked() else {
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            match api::user_wishlist(&session.uid).await {
                Ok(items) => wishlist_set(&store, items),
                Err(err) => {
                    web_sys::console::warn_1(&format!("[WISHLIST] fetch failed: {}", err).into())
                }
            }
            set_loading.set(false);
        });
    });

    let items = move || store.wishlist().read().items.clone();
    let count = move || store.wishlist().read().items.len();
    let is_empty = move || store.wishlist().read().items.is_empty();

    let browse_books = move |_| {
        wishlist_toggle(&store);
        ctx.navigate(View::Books);
    };
    let view_full = move |_| {
        wishlist_toggle(&store);
        ctx.navigate(View::Wishlist);
    };

    view! {
        <Show when=move || store.wishlist().read().is_open>
            <div class="sidebar-backdrop" on:click=move |_| wishlist_toggle(&store) />
            <div class="sidebar wishlist-sidebar">
                <div class="sidebar-header">
                    <div>
                        <h2>"Your Wishlist"</h2>
                        <p class="sidebar-subtitle">
                            {move || {
                                let n = count();
                                format!("{} {}", n, if n == 1 { "item" } else { "items" })
                            }}
                        </p>
                    </div>
                    <button class="close-btn" on:click=move |_| wishlist_toggle(&store)>"×"</button>
                </div>

                <div class="sidebar-body">
                    {move || {
                        if loading.get() {
                            view! { <div class="sidebar-loading">"Loading..."</div> }.into_any()
                        } else if is_empty() {
                            view! {
                                <div class="sidebar-empty">
                                    <h3>"Your wishlist is empty"</h3>
                                    <p>"Add books you like to your wishlist"</p>
                                    <button class="primary-btn" on:click=browse_books>
                                        "Browse Books"
                                    </button>
                                </div>
                            }
                            .into_any()
                        } else {
                            view! {
                                <ul class="wishlist-items">
                                    <For
                                        each=items
                                        key=|item| item.id.clone()
                                        children=move |item: WishlistItem| {
                                            let remove_id = item.id.clone();
                                            let label = item
                                                .title
                                                .clone()
                                                .unwrap_or_else(|| item.id.clone());
                                            view! {
                                                <li class="wishlist-item">
                                                    <div class="wishlist-item-image">
                                                        {item.image.clone().map(|src| view! {
                                                            <img src=src alt=label.clone() />
                                                        })}
                                                    </div>
                                                    <div class="wishlist-item-info">
                                                        <h3>{label.clone()}</h3>
                                                        {item.author.clone().map(|author| view! {
                                                            <p class="wishlist-item-author">{author}</p>
                                                        })}
                                                    </div>
                                                    <button
                                                        class="remove-btn"
                                                        on:click=move |_| wishlist_remove(&store, &remove_id)
                                                    >
                                                        "Remove"
                                                    </button>
                                                </li>
                                            }
                                        }
                                    />
                                </ul>
                            }
                            .into_any()
                        }
                    }}
                </div>

                <Show when=move || !is_empty()>
                    <div class="sidebar-footer">
                        <button class="link-btn danger" on:click=move |_| wishlist_clear(&store)>
                            "Clear Wishlist"
                        </button>
                        <button class="link-btn" on:click=view_full>
                            "View Full"
                        </button>
                    </div>
                </Show>
            </div>
        </Show>
    }
}
