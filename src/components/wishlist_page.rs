//! Wishlist Page Component
//!
//! Full-page wishlist table for the signed-in user, fetched by email.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::auth::use_auth;
use crate::models::WishlistEntry;
use crate::title::use_title;

#[component]
pub fn WishlistPage() -> impl IntoView {
    use_title("My Wishlist");

    let auth = use_auth();
    let (entries, set_entries) = signal(Vec::<WishlistEntry>::new());

    Effect::new(move |_| {
        let Some(session) = auth.user().get() else {
            return;
        };
        spawn_local(async move {
            match api::wishlist_by_email(&session.email).await {
                Ok(loaded) => set_entries.set(loaded),
                Err(err) => {
                    web_sys::console::warn_1(&format!("[WISHLIST] fetch failed: {}", err).into())
                }
            }
        });
    });

    view! {
        <div class="wishlist-page">
            <h2>"My Wishlist"</h2>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Name"</th>
                        <th>"Price"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show when=move || entries.get().is_empty()>
                        <tr>
                            <td colspan="4" class="table-empty">"Nothing saved yet"</td>
                        </tr>
                    </Show>
                    {move || {
                        entries
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(i, entry)| view! {
                                <tr>
                                    <td>{i + 1}</td>
                                    <td>{entry.name.clone().unwrap_or_default()}</td>
                                    <td>
                                        {entry
                                            .price
                                            .map(|v| format!("${:.2}", v))
                                            .unwrap_or_default()}
                                    </td>
                                    <td>{entry.status.clone().unwrap_or_else(|| "Available".to_string())}</td>
                                </tr>
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
