//! My Products Component
//!
//! Seller inventory: rows fetched by the signed-in seller's email, with
//! advertise, delete and mark-as-sold actions plus an XML report export
//! of the current rows.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::auth::use_auth;
use crate::models::SellerProduct;
use crate::report;
use crate::title::use_title;
use crate::toast::use_toast;

#[component]
pub fn MyProducts() -> impl IntoView {
    use_title("My Products");

    let auth = use_auth();
    let toast = use_toast();

    let (products, set_products) = signal(Vec::<SellerProduct>::new());
    let (loading, set_loading) = signal(true);

    let load = move || {
        let Some(session) = auth.user().get_untracked() else {
            set_loading.set(false);
            return;
        };
        spawn_local(async move {
            match api::my_products(&session.email).await {
                Ok(loaded) => set_products.set(loaded),
                Err(err) => {
                    web_sys::console::error_1(&format!("[PRODUCTS] fetch failed: {}", err).into());
                    toast.error("Failed to load your products");
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        load();
    });

    // Advertise re-posts the product under /myproduct/new with the
    // fields fetched by id, keyed to the seller's email.
    let advertise = move |id: String| {
        let Some(session) = auth.user().get_untracked() else {
            toast.error("Please sign in to advertise");
            return;
        };
        spawn_local(async move {
            let product = match api::get_product(&id).await {
                Ok(p) => p,
                Err(err) => {
                    toast.error(format!("Advertise failed: {}", err));
                    return;
                }
            };
            let listing = api::AdvertiseRequest::from_product(product, &session.email);
            match api::advertise_product(&listing).await {
                Ok(()) => toast.success("Product successfully advertised!"),
                Err(err) => toast.error(format!("Advertise failed: {}", err)),
            }
        });
    };

    let delete = move |id: String| {
        spawn_local(async move {
            match api::delete_product(&id).await {
                Ok(()) => {
                    toast.success("Product successfully deleted");
                    load();
                }
                Err(err) => toast.error(format!("Delete failed: {}", err)),
            }
        });
    };

    let mark_sold = move |id: String| {
        spawn_local(async move {
            match api::mark_sold(&id).await {
                Ok(()) => toast.success("Product marked as sold"),
                Err(err) => toast.error(format!("Update failed: {}", err)),
            }
        });
    };

    let download_report = move |_| {
        let rows: Vec<Vec<(String, String)>> = products
            .get_untracked()
            .iter()
            .map(|p| {
                vec![
                    ("name".to_string(), p.name.clone()),
                    (
                        "price".to_string(),
                        p.price.map(|v| format!("{:.2}", v)).unwrap_or_default(),
                    ),
                    (
                        "condition".to_string(),
                        p.condition.clone().unwrap_or_default(),
                    ),
                ]
            })
            .collect();
        if rows.is_empty() {
            toast.error("No data to export!");
            return;
        }
        report::download_xml("my-products", &rows);
    };

    view! {
        <div class="my-products">
            <div class="table-toolbar">
                <h2>"My Products"</h2>
                <button class="secondary-btn" on:click=download_report>
                    "Download Report"
                </button>
            </div>

            {move || {
                if loading.get() {
                    return view! { <div class="spinner">"Loading products..."</div> }.into_any();
                }
                if auth.user().get().is_none() {
                    return view! {
                        <div class="empty-panel">"Sign in as a seller to manage your products"</div>
                    }
                    .into_any();
                }
                view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"#"</th>
                                <th>"Name"</th>
                                <th>"Price"</th>
                                <th>"Delete"</th>
                                <th>"Advertise"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || products.get().is_empty()>
                                <tr>
                                    <td colspan="6" class="table-empty">"No products yet"</td>
                                </tr>
                            </Show>
                            {move || {
                                products
                                    .get()
                                    .into_iter()
                                    .enumerate()
                                    .map(|(i, product)| {
                                        let delete_id = product.id.clone();
                                        let advertise_id = product.id.clone();
                                        let sold_id = product.id.clone();
                                        view! {
                                            <tr>
                                                <td>{i + 1}</td>
                                                <td>{product.name.clone()}</td>
                                                <td>
                                                    {product
                                                        .price
                                                        .map(|v| format!("${:.2}", v))
                                                        .unwrap_or_default()}
                                                </td>
                                                <td>
                                                    <button
                                                        class="danger-btn small"
                                                        on:click=move |_| delete(delete_id.clone())
                                                    >
                                                        "Delete"
                                                    </button>
                                                </td>
                                                <td>
                                                    <button
                                                        class="secondary-btn small"
                                                        on:click=move |_| advertise(advertise_id.clone())
                                                    >
                                                        "Advertise"
                                                    </button>
                                                </td>
                                                <td>
                                                    <button
                                                        class="secondary-btn small"
                                                        on:click=move |_| mark_sold(sold_id.clone())
                                                    >
                                                        "Mark as sold"
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
        </div>
    }
}
