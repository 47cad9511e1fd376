//! Breadcrumbs Component

use leptos::prelude::*;

/// Breadcrumb trail; the last entry renders as the current page
#[component]
pub fn Breadcrumbs(trail: Vec<String>) -> impl IntoView {
    if trail.is_empty() {
        return None;
    }
    let last = trail.len() - 1;
    Some(view! {
        <nav class="breadcrumbs" aria-label="Breadcrumb">
            <ol>
                {trail.into_iter().enumerate().map(|(i, label)| {
                    let class = if i == last { "crumb current" } else { "crumb" };
                    view! {
                        <li class=class>
                            {label}
                            <Show when=move || i != last>
                                <span class="crumb-sep">"›"</span>
                            </Show>
                        </li>
                    }
                }).collect_view()}
            </ol>
        </nav>
    })
}
