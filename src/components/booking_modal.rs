//! Booking Modal Component
//!
//! Collects a phone number and meeting place for the product handed
//! over via `AppContext::open_booking`, then posts the booking.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::auth::use_auth;
use crate::context::use_app_context;
use crate::models::BookingRequest;
use crate::toast::use_toast;

#[component]
pub fn BookingModal() -> impl IntoView {
    let ctx = use_app_context();
    let auth = use_auth();
    let toast = use_toast();

    let (phone, set_phone) = signal(String::new());
    let (place, set_place) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(target) = ctx.booking.get_untracked() else {
            return;
        };
        let Some(session) = auth.user().get_untracked() else {
            toast.error("Please sign in to book a product");
            return;
        };
        let booking = BookingRequest {
            email: session.email,
            phone_number: phone.get_untracked(),
            place: place.get_untracked(),
            product_name: target.product_name.clone(),
            price: target.price,
        };
        let name = target.product_name;
        spawn_local(async move {
            match api::create_booking(&booking).await {
                Ok(()) => toast.success(format!("{} booked successfully", name)),
                Err(err) => {
                    web_sys::console::error_1(&format!("[BOOKING] failed: {}", err).into());
                    toast.error("Booking failed, please try again");
                }
            }
        });
        set_phone.set(String::new());
        set_place.set(String::new());
        ctx.close_booking();
    };

    view! {
        {move || ctx.booking.get().map(|target| view! {
            <div class="modal-backdrop" on:click=move |_| ctx.close_booking() />
            <div class="modal booking-modal">
                <button class="close-btn" on:click=move |_| ctx.close_booking()>"✕"</button>
                <h3>{target.product_name.clone()}</h3>
                <form class="booking-form" on:submit=submit>
                    <input
                        type="text"
                        disabled
                        prop:value=move || {
                            auth.user()
                                .get()
                                .and_then(|u| u.display_name)
                                .unwrap_or_default()
                        }
                        placeholder="Your Name"
                    />
                    <input
                        type="text"
                        disabled
                        prop:value=move || {
                            auth.user().get().map(|u| u.email).unwrap_or_default()
                        }
                    />
                    <input type="text" disabled prop:value=target.product_name.clone() />
                    <input type="text" disabled prop:value=format!("${:.2}", target.price) />
                    <input
                        type="text"
                        placeholder="Phone Number"
                        required
                        prop:value=move || phone.get()
                        on:input=move |ev| set_phone.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Meeting Location"
                        required
                        prop:value=move || place.get()
                        on:input=move |ev| set_place.set(event_target_value(&ev))
                    />
                    <button type="submit" class="primary-btn">"Submit"</button>
                </form>
            </div>
        })}
    }
}
