//! Pager Component
//!
//! Prev/next pager with a result count, shared by the account tables.

use leptos::prelude::*;

#[component]
pub fn Pager(
    page: ReadSignal<usize>,
    set_page: WriteSignal<usize>,
    #[prop(into)] total: Signal<usize>,
    #[prop(into)] pages: Signal<usize>,
) -> impl IntoView {
    view! {
        <div class="pager">
            <div class="pager-total">{move || format!("{} result(s)", total.get())}</div>
            <div class="pager-controls">
                <button
                    disabled=move || page.get() <= 1
                    on:click=move |_| set_page.update(|p| *p = p.saturating_sub(1).max(1))
                >
                    "Prev"
                </button>
                <span>{move || format!("{} / {}", page.get(), pages.get())}</span>
                <button
                    disabled=move || page.get() >= pages.get()
                    on:click=move |_| {
                        let last = pages.get();
                        set_page.update(|p| *p = (*p + 1).min(last));
                    }
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}
