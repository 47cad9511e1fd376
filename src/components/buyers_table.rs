//! Buyers Table Component
//!
//! Admin listing of buyer accounts with search, pagination and
//! confirmed deletion.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::catalog;
use crate::models::{Role, UserAccount};
use crate::toast::use_toast;

use super::confirm_dialog::ConfirmDialog;
use super::pager::Pager;

const PER_PAGE: usize = 10;

#[component]
pub fn BuyersTable() -> impl IntoView {
    let toast = use_toast();

    let (buyers, set_buyers) = signal(Vec::<UserAccount>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(false);
    let (query, set_query) = signal(String::new());
    let (page, set_page) = signal(1usize);
    let (confirm_delete, set_confirm_delete) = signal(None::<UserAccount>);

    let load = move || {
        spawn_local(async move {
            match api::list_users(Role::Buyer).await {
                Ok(loaded) => {
                    set_buyers.set(loaded);
                    set_error.set(false);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[BUYERS] fetch failed: {}", err).into());
                    set_error.set(true);
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        load();
    });

    let filtered = Memo::new(move |_| {
        let q = query.get();
        buyers
            .get()
            .into_iter()
            .filter(|b| catalog::matches_account(b, &q))
            .collect::<Vec<_>>()
    });
    let total = Signal::derive(move || filtered.get().len());
    let pages = Signal::derive(move || catalog::total_pages(filtered.get().len(), PER_PAGE).max(1));

    let page_items = move || {
        let all = filtered.get();
        let (start, end) = catalog::page_bounds(page.get(), PER_PAGE, all.len());
        all[start..end].to_vec()
    };

    let do_delete = move |account: UserAccount| {
        spawn_local(async move {
            match api::delete_user(&account.id).await {
                Ok(()) => {
                    toast.success("Buyer deleted");
                    set_confirm_delete.set(None);
                    load();
                }
                Err(err) => toast.error(format!("Delete failed: {}", err)),
            }
        });
    };

    view! {
        <div class="accounts-table">
            <div class="table-toolbar">
                <h2>"All Buyers"</h2>
                <input
                    type="text"
                    placeholder="Search name or email"
                    prop:value=move || query.get()
                    on:input=move |ev| {
                        set_query.set(event_target_value(&ev));
                        set_page.set(1);
                    }
                />
            </div>

            {move || {
                if loading.get() {
                    return view! { <div class="spinner">"Loading buyers..."</div> }.into_any();
                }
                if error.get() {
                    return view! { <div class="error-panel">"Error loading buyers"</div> }.into_any();
                }
                view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"#"</th>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || page_items().is_empty()>
                                <tr>
                                    <td colspan="4" class="table-empty">"No buyers found"</td>
                                </tr>
                            </Show>
                            {move || {
                                let offset = (page.get() - 1) * PER_PAGE;
                                page_items()
                                    .into_iter()
                                    .enumerate()
                                    .map(|(i, buyer)| {
                                        let target = buyer.clone();
                                        view! {
                                            <tr>
                                                <td>{offset + i + 1}</td>
                                                <td>{buyer.name.clone().unwrap_or_default()}</td>
                                                <td>{buyer.email.clone().unwrap_or_default()}</td>
                                                <td>
                                                    <button
                                                        class="danger-btn small"
                                                        on:click=move |_| set_confirm_delete.set(Some(target.clone()))
                                                    >
                                                        "Delete"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                }
                .into_any()
            }}

            <Pager page=page set_page=set_page total=total pages=pages />

            {move || confirm_delete.get().map(|account| {
                let name = account.name.clone().unwrap_or_default();
                let email = account.email.clone().unwrap_or_default();
                view! {
                    <ConfirmDialog
                        title="Delete buyer"
                        message=format!("Are you sure you want to delete {} ({})?", name, email)
                        confirm_label="Delete"
                        on_confirm=Callback::new(move |_| do_delete(account.clone()))
                        on_cancel=Callback::new(move |_| set_confirm_delete.set(None))
                    />
                }
            })}
        </div>
    }
}
