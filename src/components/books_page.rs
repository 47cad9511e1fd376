//! Books Page Component
//!
//! Catalog listing: fetched once on mount, then searched, genre-filtered
//! and paginated entirely client-side.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::auth::use_auth;
use crate::catalog;
use crate::context::{use_app_context, BookingTarget};
use crate::models::{Book, CartItem, Role, WishlistItem};
use crate::store::{cart_add, use_app_store, wishlist_add};
use crate::title::use_title;
use crate::toast::use_toast;

const PAGE_SIZES: &[usize] = &[10, 20, 30];

#[component]
pub fn BooksPage() -> impl IntoView {
    use_title("Books");

    let store = use_app_store();
    let auth = use_auth();
    let ctx = use_app_context();
    let toast = use_toast();

    let (books, set_books) = signal(Vec::<Book>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (search, set_search) = signal(String::new());
    let (genre, set_genre) = signal(catalog::ALL_GENRES.to_string());
    let (page, set_page) = signal(1usize);
    let (per_page, set_per_page) = signal(10usize);
    let (show_genres, set_show_genres) = signal(true);

    // Load the catalog on mount
    Effect::new(move |_| {
        spawn_local(async move {
            set_loading.set(true);
            match api::list_books().await {
                Ok(loaded) => {
                    set_books.set(loaded);
                    set_error.set(None);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[BOOKS] fetch failed: {}", err).into());
                    set_error.set(Some(err.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    let filtered = Memo::new(move |_| {
        catalog::filter_books(&books.get(), &search.get(), &genre.get())
    });
    let total_pages = Memo::new(move |_| catalog::total_pages(filtered.get().len(), per_page.get()));

    let page_items = move || {
        let all = filtered.get();
        let (start, end) = catalog::page_bounds(page.get(), per_page.get(), all.len());
        all[start..end].to_vec()
    };

    let go_to = move |target: usize| {
        set_page.set(target);
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    };

    let add_to_cart = move |book: &Book| {
        // Sellers and admins browse, buyers purchase
        if auth.user().get_untracked().is_some() && !auth.has_role(Role::Buyer) {
            toast.error("You need to be a buyer to add items to cart");
            return;
        }
        cart_add(&store, CartItem::from_book(book));
        toast.success(format!("{} added to cart!", book.display_title()));
    };

    // Re-fetch the record before booking so the modal carries the
    // current price, falling back to the card's copy.
    let book_now = move |book: &Book| {
        let id = book.id.clone();
        let fallback = BookingTarget {
            product_name: book.display_title().to_string(),
            price: book.price.unwrap_or(0.0),
        };
        spawn_local(async move {
            let target = match api::get_book(&id).await {
                Ok(detail) => BookingTarget {
                    product_name: detail.display_title().to_string(),
                    price: detail.price.unwrap_or(0.0),
                },
                Err(err) => {
                    web_sys::console::warn_1(&format!("[BOOKS] detail fetch failed: {}", err).into());
                    fallback
                }
            };
            ctx.open_booking(target);
        });
    };

    let add_to_wishlist = move |book: &Book| {
        wishlist_add(&store, WishlistItem::from_book(book));
        toast.success(format!("{} added to wishlist", book.display_title()));
        // Persist remotely when signed in; fire-and-forget.
        if let Some(session) = auth.user().get_untracked() {
            let entry = api::WishlistCreate {
                name: book.display_title().to_string(),
                price: book.price,
                email: session.email,
                user_image: None,
                product_image: book.image_url.clone(),
            };
            spawn_local(async move {
                if let Err(err) = api::add_wishlist_entry(&entry).await {
                    web_sys::console::warn_1(
                        &format!("[WISHLIST] remote add failed: {}", err).into(),
                    );
                }
            });
        }
    };

    view! {
        <div class="books-page">
            // Genre filter sidebar
            <aside class="filter-sidebar">
                <div class="filter-header" on:click=move |_| set_show_genres.update(|v| *v = !*v)>
                    <h3>"Categories"</h3>
                    <span>{move || if show_genres.get() { "▲" } else { "▼" }}</span>
                </div>
                <Show when=move || show_genres.get()>
                    <ul class="genre-list">
                        <For
                            each=move || catalog::genre_options(&books.get())
                            key=|g| g.clone()
                            children=move |option: String| {
                                let value = option.clone();
                                let active = {
                                    let option = option.clone();
                                    move || genre.get() == option
                                };
                                view! {
                                    <li
                                        class=move || if active() { "genre-item active" } else { "genre-item" }
                                        on:click=move |_| {
                                            set_genre.set(value.clone());
                                            set_page.set(1);
                                        }
                                    >
                                        {option.clone()}
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </aside>

            <main class="books-main">
                <div class="books-heading">
                    <h1>"Our Book Collection"</h1>
                    <p>"Discover a world of knowledge and adventure"</p>
                </div>

                // Search and page-size controls
                <div class="books-controls">
                    <input
                        type="text"
                        class="search-input"
                        placeholder="Search by title, author, or genre..."
                        prop:value=move || search.get()
                        on:input=move |ev| {
                            set_search.set(event_target_value(&ev));
                            set_page.set(1);
                        }
                    />
                    <label class="page-size">
                        "Show:"
                        <select on:change=move |ev| {
                            if let Ok(size) = event_target_value(&ev).parse() {
                                set_per_page.set(size);
                                set_page.set(1);
                            }
                        }>
                            {PAGE_SIZES.iter().map(|size| view! {
                                <option value=size.to_string() selected=move || per_page.get() == *size>
                                    {size.to_string()}
                                </option>
                            }).collect_view()}
                        </select>
                        "per page"
                    </label>
                </div>

                {move || {
                    if loading.get() {
                        return view! { <div class="spinner">"Loading books..."</div> }.into_any();
                    }
                    if let Some(message) = error.get() {
                        return view! {
                            <div class="error-panel">
                                <h2>"Error Loading Books"</h2>
                                <p>{message}</p>
                            </div>
                        }
                        .into_any();
                    }
                    if filtered.get().is_empty() {
                        return view! {
                            <div class="empty-panel">
                                <h3>"No books found"</h3>
                                <p>"Try adjusting your search or filter to find what you're looking for."</p>
                            </div>
                        }
                        .into_any();
                    }
                    view! {
                        <div class="books-grid">
                            <For
                                each=page_items
                                key=|book| book.id.clone()
                                children=move |book: Book| {
                                    let cart_book = book.clone();
                                    let wish_book = book.clone();
                                    let booking_book = book.clone();
                                    view! {
                                        <div class="book-card">
                                            <div class="book-cover">
                                                {book.image_url.clone().map(|src| view! {
                                                    <img src=src alt=book.display_title().to_string() loading="lazy" />
                                                })}
                                                <button
                                                    class="icon-btn wishlist-btn"
                                                    title="Add to wishlist"
                                                    on:click=move |_| add_to_wishlist(&wish_book)
                                                >
                                                    "♡"
                                                </button>
                                                <button
                                                    class="icon-btn cart-btn"
                                                    title="Add to cart"
                                                    on:click=move |_| add_to_cart(&cart_book)
                                                >
                                                    "🛒"
                                                </button>
                                            </div>
                                            <div class="book-info">
                                                <h3>{book.display_title().to_string()}</h3>
                                                <p class="book-author">
                                                    "by " {book.author.clone().unwrap_or_else(|| "Unknown".to_string())}
                                                </p>
                                                {book.price.map(|price| view! {
                                                    <p class="book-price">{format!("${:.2}", price)}</p>
                                                })}
                                                {book.genre.clone().map(|genre| view! {
                                                    <span class="genre-tag">{genre}</span>
                                                })}
                                                <button
                                                    class="secondary-btn"
                                                    on:click=move |_| book_now(&booking_book)
                                                >
                                                    "Book Now"
                                                </button>
                                            </div>
                                        </div>
                                    }
                                }
                            />
                        </div>
                    }
                    .into_any()
                }}

                // Pagination
                <Show when=move || (total_pages.get() > 1)>
                    <div class="pagination">
                        <div class="pagination-summary">
                            {move || {
                                let all = filtered.get();
                                let (start, end) = catalog::page_bounds(page.get(), per_page.get(), all.len());
                                format!("Showing {} to {} of {} results", start + 1, end, all.len())
                            }}
                        </div>
                        <div class="pagination-controls">
                            <button
                                disabled=move || page.get() == 1
                                on:click=move |_| {
                                    if page.get() > 1 {
                                        go_to(page.get() - 1);
                                    }
                                }
                            >
                                "‹"
                            </button>
                            <For
                                each=move || catalog::page_window(page.get(), total_pages.get())
                                key=|n| *n
                                children=move |n: usize| {
                                    view! {
                                        <button
                                            class=move || if page.get() == n { "page-btn active" } else { "page-btn" }
                                            on:click=move |_| go_to(n)
                                        >
                                            {n}
                                        </button>
                                    }
                                }
                            />
                            <Show when=move || {
                                let total = total_pages.get();
                                total > 5 && page.get() < total - 2
                            }>
                                <span class="pagination-ellipsis">"..."</span>
                                <button class="page-btn" on:click=move |_| go_to(total_pages.get())>
                                    {move || total_pages.get()}
                                </button>
                            </Show>
                            <button
                                disabled=move || page.get() >= total_pages.get()
                                on:click=move |_| {
                                    if page.get() < total_pages.get() {
                                        go_to(page.get() + 1);
                                    }
                                }
                            >
                                "›"
                            </button>
                        </div>
                    </div>
                </Show>
            </main>
        </div>
    }
}
