//! Error Page Component
//!
//! 404 fallback with a way back to the catalog.

use leptos::prelude::*;

use crate::context::{use_app_context, View};
use crate::title::use_title;

#[component]
pub fn ErrorPage() -> impl IntoView {
    use_title("Page Not Found");

    let ctx = use_app_context();

    view! {
        <div class="error-page">
            <h1>"404"</h1>
            <h2>"Page Not Found"</h2>
            <p>"The page you are looking for drifted off the shelf."</p>
            <div class="error-actions">
                <button class="primary-btn" on:click=move |_| ctx.navigate(View::Books)>
                    "Browse Books"
                </button>
                <button class="secondary-btn" on:click=move |_| ctx.navigate(View::Categories)>
                    "Explore Categories"
                </button>
            </div>
        </div>
    }
}
