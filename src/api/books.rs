//! Book Catalog Endpoints

use crate::models::Book;

use super::{api_base, client, expect_json, ApiError};

pub async fn list_books() -> Result<Vec<Book>, ApiError> {
    let res = client()
        .get(format!("{}/books", api_base()))
        .send()
        .await?;
    expect_json(res).await
}

pub async fn get_book(id: &str) -> Result<Book, ApiError> {
    let res = client()
        .get(format!("{}/books/{}", api_base(), super::encode_segment(id)))
        .send()
        .await?;
    expect_json(res).await
}
