//! Categories Page Component
//!
//! Static grid of genre tiles linking into the filtered catalog.

use leptos::prelude::*;

use crate::context::{use_app_context, View};
use crate::models::Category;
use crate::title::use_title;

const CATEGORIES: &[Category] = &[
    Category { name: "Fiction", count: 125, image: "/images/categories/fiction.jpg" },
    Category { name: "Mystery", count: 89, image: "/images/categories/mystery.jpg" },
    Category { name: "Science Fiction", count: 76, image: "/images/categories/scifi.jpg" },
    Category { name: "Fantasy", count: 112, image: "/images/categories/fantasy.jpg" },
    Category { name: "Romance", count: 143, image: "/images/categories/romance.jpg" },
    Category { name: "Biography", count: 67, image: "/images/categories/biography.jpg" },
    Category { name: "History", count: 54, image: "/images/categories/history.jpg" },
    Category { name: "Self-Help", count: 98, image: "/images/categories/selfhelp.jpg" },
];

#[component]
pub fn CategoriesPage() -> impl IntoView {
    use_title("Categories");

    let ctx = use_app_context();

    view! {
        <div class="categories-page">
            <div class="page-heading">
                <h1>"Explore Our Categories"</h1>
                <p>"Discover books from various genres and find your next favorite read."</p>
            </div>
            <div class="categories-grid">
                {CATEGORIES.iter().map(|category| view! {
                    <div class="category-tile" on:click=move |_| ctx.navigate(View::Books)>
                        <img src=category.image alt=category.name />
                        <div class="category-label">
                            <h3>{category.name}</h3>
                            <p>{format!("{} books", category.count)}</p>
                        </div>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}
