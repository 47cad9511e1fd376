//! Frontend Models
//!
//! Data structures matching backend payloads. Upstream endpoints are
//! inconsistent about their primary-key field (`id` vs `_id`); every
//! shape here normalizes to a single `id` at the serde boundary so the
//! rest of the app never matches both.

use serde::{Deserialize, Serialize};

/// Account role as understood by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Role {
    #[default]
    Buyer,
    Seller,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Buyer => "Buyer",
            Role::Seller => "Seller",
            Role::Admin => "Admin",
        }
    }

    /// Backend responses spell roles inconsistently ("buyer", "Seller").
    /// Unknown values fall back to Buyer.
    pub fn from_str(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "seller" => Role::Seller,
            "admin" => Role::Admin,
            _ => Role::Buyer,
        }
    }
}

/// Catalog book (GET /books, GET /books/{id})
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Book {
    /// Display title: some records carry the title in `original_title`
    pub fn display_title(&self) -> &str {
        match &self.original_title {
            Some(t) if !t.is_empty() => t,
            _ => &self.title,
        }
    }
}

/// Cart entry. Quantity is at least 1; entries are unique by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub image: Option<String>,
    pub quantity: u32,
}

impl CartItem {
    pub fn from_book(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            title: book.display_title().to_string(),
            price: book.price.unwrap_or(0.0),
            image: book.image_url.clone(),
            quantity: 1,
        }
    }
}

/// Wishlist entry shown in the sidebar. No quantity field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistItem {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl WishlistItem {
    pub fn from_book(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            title: Some(book.display_title().to_string()),
            author: book.author.clone(),
            image: book.image_url.clone(),
        }
    }

    /// Normalize a loosely-shaped remote record. Different endpoints use
    /// `title`/`name` and `image`/`image_url`; records with no usable id
    /// are dropped by the caller.
    pub fn from_remote(raw: RawWishlistRecord) -> Option<Self> {
        let id = raw.id.filter(|id| !id.is_empty())?;
        Some(Self {
            id,
            title: raw.title.or(raw.name),
            author: raw.author,
            image: raw.image.or(raw.image_url).or(raw.product_image),
        })
    }
}

/// Raw wishlist record as returned by the backend, before normalization
#[derive(Debug, Clone, Deserialize)]
pub struct RawWishlistRecord {
    #[serde(alias = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, rename = "productImage")]
    pub product_image: Option<String>,
}

/// Row of the full wishlist table (GET /wishlist?email=)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistEntry {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Backend account record (GET /users?role=)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Seller inventory row (GET /myproducts?email=)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerProduct {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub mobile_number: Option<String>,
    #[serde(default)]
    pub place: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub user_image: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub email: Option<String>,
}

/// Booking request (POST /booking)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub email: String,
    pub phone_number: String,
    pub place: String,
    pub product_name: String,
    pub price: f64,
}

/// Static category tile
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: &'static str,
    pub count: u32,
    pub image: &'static str,
}

/// Subscription tier for the plans page
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_accepts_either_id_field() {
        let a: Book = serde_json::from_str(r#"{"_id":"b1","title":"Dune"}"#).unwrap();
        let b: Book = serde_json::from_str(r#"{"id":"b2","title":"Dune"}"#).unwrap();
        assert_eq!(a.id, "b1");
        assert_eq!(b.id, "b2");
    }

    #[test]
    fn wishlist_record_normalizes_underscore_id() {
        let raw: RawWishlistRecord =
            serde_json::from_str(r#"{"_id":"a","name":"Dune","image_url":"x.png"}"#).unwrap();
        let item = WishlistItem::from_remote(raw).unwrap();
        assert_eq!(item.id, "a");
        assert_eq!(item.title.as_deref(), Some("Dune"));
        assert_eq!(item.image.as_deref(), Some("x.png"));
    }

    #[test]
    fn wishlist_record_without_id_is_dropped() {
        let raw: RawWishlistRecord = serde_json::from_str(r#"{"name":"Dune"}"#).unwrap();
        assert!(WishlistItem::from_remote(raw).is_none());
    }

    #[test]
    fn role_parsing_is_case_insensitive() {
        assert_eq!(Role::from_str("seller"), Role::Seller);
        assert_eq!(Role::from_str("Admin"), Role::Admin);
        assert_eq!(Role::from_str("whatever"), Role::Buyer);
    }

    #[test]
    fn display_title_prefers_original_title() {
        let book: Book = serde_json::from_str(
            r#"{"id":"b1","title":"t","original_title":"The Real Title"}"#,
        )
        .unwrap();
        assert_eq!(book.display_title(), "The Real Title");
    }
}
