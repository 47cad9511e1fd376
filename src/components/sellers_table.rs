//! Sellers Table Component
//!
//! Admin listing of seller accounts with search, pagination, confirmed
//! deletion, and an edit modal issuing account updates.

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
pub fn SellersTable() -> impl IntoView {
    let toast = use_toast();

    let (sellers, set_sellers) = signal(Vec::<UserAccount>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(false);
    let (query, set_query) = signal(String::new());
    let (page, set_page) = signal(1usize);
    let (editing, set_editing) = signal(None::<UserAccount>);
    let (confirm_delete, set_confirm_delete) = signal(None::<UserAccount>);

    let load = move || {
        spawn_local(async move {
            match api::list_users(Role::Seller).await {
                Ok(loaded) => {
                    set_sellers.set(loaded);
                    set_error.set(false);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[SELLERS] fetch failed: {}", err).into());
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
        sellers
            .get()
            .into_iter()
            .filter(|s| catalog::matches_account(s, &q))
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
                    toast.success("Seller deleted");
                    set_confirm_delete.set(None);
                    load();
                }
                Err(err) => toast.error(format!("Delete failed: {}", err)),
            }
        });
    };

    let save_edit = move |(id, update): (String, api::UserUpdate)| {
        spawn_local(async move {
            match api::update_user(&id, &update).await {
                Ok(()) => {
                    toast.success("Seller updated");
                    set_editing.set(None);
                    load();
                }
                Err(err) => toast.error(format!("Update failed: {}", err)),
            }
        });
    };

    view! {
        <div class="accounts-table">
            <div class="table-toolbar">
                <h2>"All Sellers"</h2>
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
                    return view! { <div class="spinner">"Loading sellers..."</div> }.into_any();
                }
                if error.get() {
                    return view! { <div class="error-panel">"Error loading sellers"</div> }.into_any();
                }
                view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"#"</th>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th>"Role"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || page_items().is_empty()>
                                <tr>
                                    <td colspan="5" class="table-empty">"No sellers found"</td>
                                </tr>
                            </Show>
                            {move || {
                                let offset = (page.get() - 1) * PER_PAGE;
                                page_items()
                                    .into_iter()
                                    .enumerate()
                                    .map(|(i, seller)| {
                                        let edit_target = seller.clone();
                                        let delete_target = seller.clone();
                                        view! {
                                            <tr>
                                                <td>{offset + i + 1}</td>
                                                <td>{seller.name.clone().unwrap_or_default()}</td>
                                                <td>{seller.email.clone().unwrap_or_default()}</td>
                                                <td>{seller.role.clone().unwrap_or_else(|| "seller".to_string())}</td>
                                                <td>
                                                    <button
                                                        class="secondary-btn small"
                                                        on:click=move |_| set_editing.set(Some(edit_target.clone()))
                                                    >
                                                        "Edit"
                                                    </button>
                                                    <button
                                                        class="danger-btn small"
                                                        on:click=move |_| set_confirm_delete.set(Some(delete_target.clone()))
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

            {move || editing.get().map(|account| view! {
                <EditSellerForm
                    account=account
                    on_save=Callback::new(save_edit)
                    on_cancel=Callback::new(move |_| set_editing.set(None))
                />
            })}

            {move || confirm_delete.get().map(|account| {
                let name = account.name.clone().unwrap_or_default();
                let email = account.email.clone().unwrap_or_default();
                view! {
                    <ConfirmDialog
                        title="Delete seller"
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

/// Edit modal for a single seller account
#[component]
fn EditSellerForm(
    account: UserAccount,
    #[prop(into)] on_save: Callback<(String, api::UserUpdate)>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let id = account.id.clone();
    let (name, set_name) = signal(account.name.clone().unwrap_or_default());
    let (email, set_email) = signal(account.email.clone().unwrap_or_default());
    let (role, set_role) = signal(account.role.clone().unwrap_or_else(|| "seller".to_string()));

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_save.run((
            id.clone(),
            api::UserUpdate {
                name: name.get_untracked(),
                email: email.get_untracked(),
                role: role.get_untracked(),
            },
        ));
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_cancel.run(()) />
        <div class="modal edit-dialog">
            <h3>"Edit Seller"</h3>
            <form on:submit=submit>
                <label>"Name"</label>
                <input
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <label>"Email"</label>
                <input
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <label>"Role"</label>
                <select on:change=move |ev| set_role.set(event_target_value(&ev))>
                    {["seller", "user", "admin"].into_iter().map(|option| view! {
                        <option value=option selected=move || role.get() == option>
                            {option}
                        </option>
                    }).collect_view()}
                </select>
                <div class="dialog-actions">
                    <button type="button" class="secondary-btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="primary-btn">"Save"</button>
                </div>
            </form>
        </div>
    }
}
