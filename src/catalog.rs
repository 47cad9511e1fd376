//! Catalog Utilities
//!
//! Pure helpers for client-side search, genre filtering and pagination.

use crate::models::{Book, UserAccount};

/// Sentinel genre meaning "no filter"
pub const ALL_GENRES: &str = "All";

/// Genres always offered in the filter sidebar; genres found on fetched
/// books are appended when missing.
pub const BASE_GENRES: &[&str] = &[
    "History",
    "Technology",
    "Fiction",
    "Science",
    "Fantasy",
    "War",
    "Love",
    "Medicine",
    "Art",
    "Craft",
    "Self help",
];

/// Case-insensitive match against title, author, or genre
pub fn matches_search(book: &Book, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    let contains = |field: Option<&str>| {
        field
            .map(|f| f.to_lowercase().contains(&term))
            .unwrap_or(false)
    };
    book.title.to_lowercase().contains(&term)
        || contains(book.original_title.as_deref())
        || contains(book.author.as_deref())
        || contains(book.genre.as_deref())
}

pub fn matches_genre(book: &Book, genre: &str) -> bool {
    genre == ALL_GENRES || book.genre.as_deref() == Some(genre)
}

pub fn filter_books(books: &[Book], term: &str, genre: &str) -> Vec<Book> {
    books
        .iter()
        .filter(|b| matches_search(b, term) && matches_genre(b, genre))
        .cloned()
        .collect()
}

/// Search accounts by name or email, case-insensitive
pub fn matches_account(account: &UserAccount, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let q = query.to_lowercase();
    let contains = |field: Option<&str>| {
        field
            .map(|f| f.to_lowercase().contains(&q))
            .unwrap_or(false)
    };
    contains(account.name.as_deref()) || contains(account.email.as_deref())
}

/// Build the filter sidebar list: "All", the base genres, then any
/// genres seen on the fetched books that are not already present.
pub fn genre_options(books: &[Book]) -> Vec<String> {
    let mut options: Vec<String> = std::iter::once(ALL_GENRES)
        .chain(BASE_GENRES.iter().copied())
        .map(str::to_string)
        .collect();
    for book in books {
        if let Some(genre) = &book.genre {
            if !genre.is_empty() && !options.iter().any(|g| g == genre) {
                options.push(genre.clone());
            }
        }
    }
    options
}

/// Number of pages needed for `len` items (0 when the list is empty)
pub fn total_pages(len: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    len.div_ceil(per_page)
}

/// Half-open index range of the given 1-based page
pub fn page_bounds(page: usize, per_page: usize, len: usize) -> (usize, usize) {
    let start = page.saturating_sub(1) * per_page;
    (start.min(len), (start + per_page).min(len))
}

/// Up to five visible page numbers around the current page, clamped at
/// both edges of the range.
pub fn page_window(current: usize, total: usize) -> Vec<usize> {
    if total <= 5 {
        return (1..=total).collect();
    }
    let first = if current <= 3 {
        1
    } else if current >= total - 2 {
        total - 4
    } else {
        current - 2
    };
    (first..first + 5).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_book(id: &str, title: &str, author: &str, genre: &str) -> Book {
        Book {
            id: id.to_string(),
            title: title.to_string(),
            original_title: None,
            author: Some(author.to_string()),
            genre: Some(genre.to_string()),
            price: Some(10.0),
            image_url: None,
            description: None,
        }
    }

    #[test]
    fn search_spans_title_author_and_genre() {
        let book = make_book("1", "Dune", "Frank Herbert", "Science");
        assert!(matches_search(&book, "dune"));
        assert!(matches_search(&book, "herbert"));
        assert!(matches_search(&book, "SCIENCE"));
        assert!(!matches_search(&book, "romance"));
        assert!(matches_search(&book, ""));
    }

    #[test]
    fn genre_filter_with_all_sentinel() {
        let book = make_book("1", "Dune", "Frank Herbert", "Science");
        assert!(matches_genre(&book, ALL_GENRES));
        assert!(matches_genre(&book, "Science"));
        assert!(!matches_genre(&book, "Fiction"));
    }

    #[test]
    fn filter_combines_search_and_genre() {
        let books = vec![
            make_book("1", "Dune", "Frank Herbert", "Science"),
            make_book("2", "Emma", "Jane Austen", "Fiction"),
        ];
        let hits = filter_books(&books, "e", "Fiction");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "2");
    }

    #[test]
    fn genre_options_appends_unseen_genres_once() {
        let books = vec![
            make_book("1", "a", "b", "Cyberpunk"),
            make_book("2", "c", "d", "Cyberpunk"),
            make_book("3", "e", "f", "Fiction"),
        ];
        let options = genre_options(&books);
        assert_eq!(options[0], ALL_GENRES);
        assert_eq!(options.iter().filter(|g| *g == "Cyberpunk").count(), 1);
        assert_eq!(options.iter().filter(|g| *g == "Fiction").count(), 1);
    }

    #[test]
    fn page_bounds_clamp_to_length() {
        assert_eq!(page_bounds(1, 10, 25), (0, 10));
        assert_eq!(page_bounds(3, 10, 25), (20, 25));
        assert_eq!(page_bounds(4, 10, 25), (30.min(25), 25));
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
    }

    #[test]
    fn page_window_small_range_lists_everything() {
        assert_eq!(page_window(1, 4), vec![1, 2, 3, 4]);
    }

    #[test]
    fn page_window_clamps_at_both_edges() {
        assert_eq!(page_window(1, 9), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(3, 9), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(5, 9), vec![3, 4, 5, 6, 7]);
        assert_eq!(page_window(8, 9), vec![5, 6, 7, 8, 9]);
        assert_eq!(page_window(9, 9), vec![5, 6, 7, 8, 9]);
    }
}
