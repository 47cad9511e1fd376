//! Footer Component

use leptos::prelude::*;

const COLUMNS: &[(&str, &[&str])] = &[
    ("Product", &["Download", "Premium Books", "Book Store", "Categories"]),
    ("Company", &["About", "Jobs", "Brand", "Blog"]),
    ("Resources", &["Support", "Safety", "Community", "Developers"]),
    ("Policies", &["Terms", "Privacy", "Guidelines", "Acknowledgements"]),
];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-watermark">"BOOKVAULT"</div>
            <div class="footer-columns">
                {COLUMNS.iter().map(|(heading, links)| view! {
                    <div class="footer-column">
                        <h3>{*heading}</h3>
                        <ul>
                            {links.iter().map(|link| view! {
                                <li><a href="#">{*link}</a></li>
                            }).collect_view()}
                        </ul>
                    </div>
                }).collect_view()}
            </div>
            <div class="footer-bottom">
                <p>"© 2026 BookVault. All rights reserved."</p>
            </div>
        </footer>
    }
}
