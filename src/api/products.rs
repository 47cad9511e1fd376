//! Seller Inventory Endpoints

use serde::Serialize;

use crate::models::SellerProduct;

use super::{api_base, client, encode_segment, expect_json, expect_ok, ApiError};

/// Advertised listing (POST /myproduct/new). Same fields as the
/// inventory row, keyed to the advertising seller's email.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvertiseRequest {
    pub name: String,
    pub price: Option<f64>,
    pub original_price: Option<f64>,
    pub condition: Option<String>,
    pub mobile_number: Option<String>,
    pub place: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub image: Option<String>,
    pub user_name: Option<String>,
    pub user_image: Option<String>,
    pub is_verified: bool,
    pub email: String,
}

impl AdvertiseRequest {
    pub fn from_product(product: SellerProduct, seller_email: &str) -> Self {
        Self {
            name: product.name,
            price: product.price,
            original_price: product.original_price,
            condition: product.condition,
            mobile_number: product.mobile_number,
            place: product.place,
            description: product.description,
            date: product.date,
            image: product.image,
            user_name: product.user_name,
            user_image: product.user_image,
            is_verified: product.is_verified,
            email: seller_email.to_string(),
        }
    }
}

pub async fn my_products(email: &str) -> Result<Vec<SellerProduct>, ApiError> {
    let res = client()
        .get(format!("{}/myproducts", api_base()))
        .query(&[("email", email)])
        .send()
        .await?;
    expect_json(res).await
}

pub async fn get_product(id: &str) -> Result<SellerProduct, ApiError> {
    let res = client()
        .get(format!("{}/myproduct/{}", api_base(), encode_segment(id)))
        .send()
        .await?;
    expect_json(res).await
}

pub async fn advertise_product(listing: &AdvertiseRequest) -> Result<(), ApiError> {
    let res = client()
        .post(format!("{}/myproduct/new", api_base()))
        .json(listing)
        .send()
        .await?;
    expect_ok(res)
}

pub async fn delete_product(id: &str) -> Result<(), ApiError> {
    let res = client()
        .delete(format!("{}/myproducts/{}", api_base(), encode_segment(id)))
        .send()
        .await?;
    expect_ok(res)
}

/// Take an advertised listing down once the product sells
pub async fn mark_sold(id: &str) -> Result<(), ApiError> {
    let res = client()
        .delete(format!("{}/advertised/{}", api_base(), encode_segment(id)))
        .send()
        .await?;
    expect_ok(res)
}
