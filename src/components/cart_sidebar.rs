//! Cart Sidebar Component
//!
//! Slide-over panel listing cart entries with quantity controls,
//! subtotal, checkout and clear actions.

use leptos::prelude::*;

use crate::models::CartItem;
use crate::store::{
    cart_clear, cart_remove, cart_set_quantity, cart_toggle, use_app_store, AppStateStoreFields,
};

#[component]
pub fn CartSidebar() -> impl IntoView {
    let store = use_app_store();

    let items = move || store.cart().read().items.clone();
    let is_empty = move || store.cart().read().items.is_empty();
    let subtotal = move || format!("${:.2}", store.cart().read().subtotal());

    let checkout = move |_| {
        let count = store.cart().read().items.len();
        web_sys::console::log_1(&format!("[CART] proceeding to checkout with {} entries", count).into());
    };

    view! {
        <Show when=move || store.cart().read().is_open>
            <div class="sidebar-backdrop" on:click=move |_| cart_toggle(&store) />
            <div class="sidebar cart-sidebar">
                <div class="sidebar-header">
                    <h2>"Your Cart"</h2>
                    <button class="close-btn" on:click=move |_| cart_toggle(&store)>"×"</button>
                </div>

                <div class="sidebar-body">
                    <Show when=is_empty>
                        <div class="sidebar-empty">
                            <p>"Your cart is empty"</p>
                            <button class="primary-btn" on:click=move |_| cart_toggle(&store)>
                                "Continue Shopping"
                            </button>
                        </div>
                    </Show>

                    <Show when=move || !is_empty()>
                        <ul class="cart-items">
                            <For
                                each=items
                                key=|item| item.id.clone()
                                children=move |item: CartItem| {
                                    let minus_id = item.id.clone();
                                    let plus_id = item.id.clone();
                                    let remove_id = item.id.clone();
                                    let quantity = item.quantity;
                                    view! {
                                        <li class="cart-item">
                                            <div class="cart-item-image">
                                                {item.image.clone().map(|src| view! {
                                                    <img src=src alt=item.title.clone() />
                                                })}
                                            </div>
                                            <div class="cart-item-info">
                                                <h3>{item.title.clone()}</h3>
                                                <p class="cart-item-price">{format!("${:.2}", item.price)}</p>
                                                <div class="quantity-controls">
                                                    <button
                                                        on:click=move |_| {
                                                            // Quantities below 1 are rejected here;
                                                            // the trash button is the way out.
                                                            if quantity > 1 {
                                                                cart_set_quantity(&store, &minus_id, quantity - 1);
                                                            }
                                                        }
                                                    >
                                                        "−"
                                                    </button>
                                                    <span class="quantity">{quantity}</span>
                                                    <button
                                                        on:click=move |_| cart_set_quantity(&store, &plus_id, quantity + 1)
                                                    >
                                                        "+"
                                                    </button>
                                                </div>
                                            </div>
                                            <button
                                                class="remove-btn"
                                                on:click=move |_| cart_remove(&store, &remove_id)
                                            >
                                                "Remove"
                                            </button>
                                        </li>
                                    }
                                }
                            />
                        </ul>

                        <div class="cart-summary">
                            <div class="summary-row">
                                <span>"Subtotal:"</span>
                                <span>{subtotal}</span>
                            </div>
                            <div class="summary-row">
                                <span>"Shipping:"</span>
                                <span>"Free"</span>
                            </div>
                            <div class="summary-row summary-total">
                                <span>"Total:"</span>
                                <span>{subtotal}</span>
                            </div>
                            <button class="primary-btn checkout-btn" on:click=checkout>
                                "Proceed to Checkout"
                            </button>
                            <button class="link-btn danger" on:click=move |_| cart_clear(&store)>
                                "Clear Cart"
                            </button>
                        </div>
                    </Show>
                </div>
            </div>
        </Show>
    }
}
