//! Wishlist Endpoints
//!
//! Three wishlist surfaces with three payload shapes; everything is
//! normalized to the canonical models before it leaves this module.

use serde::{Deserialize, Serialize};

use crate::models::{RawWishlistRecord, WishlistEntry, WishlistItem};

use super::{api_base, client, encode_segment, expect_json, expect_ok, ApiError};

#[derive(Deserialize)]
struct WishlistEnvelope {
    #[serde(default)]
    wishlist: Vec<RawWishlistRecord>,
}

/// New wishlist entry (POST /wishlist)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistCreate {
    pub name: String,
    pub price: Option<f64>,
    pub email: String,
    pub user_image: Option<String>,
    pub product_image: Option<String>,
}

/// Sidebar hydration (GET /users/{id}/wishlist). Records without a
/// usable id are dropped during normalization.
pub async fn user_wishlist(user_id: &str) -> Result<Vec<WishlistItem>, ApiError> {
    let res = client()
        .get(format!(
            "{}/users/{}/wishlist",
            api_base(),
            encode_segment(user_id)
        ))
        .send()
        .await?;
    let envelope: WishlistEnvelope = expect_json(res).await?;
    Ok(envelope
        .wishlist
        .into_iter()
        .filter_map(WishlistItem::from_remote)
        .collect())
}

/// Full wishlist page rows (GET /wishlist?email=)
pub async fn wishlist_by_email(email: &str) -> Result<Vec<WishlistEntry>, ApiError> {
    let res = client()
        .get(format!("{}/wishlist", api_base()))
        .query(&[("email", email)])
        .send()
        .await?;
    expect_json(res).await
}

pub async fn add_wishlist_entry(entry: &WishlistCreate) -> Result<(), ApiError> {
    let res = client()
        .post(format!("{}/wishlist", api_base()))
        .json(entry)
        .send()
        .await?;
    expect_ok(res)
}
