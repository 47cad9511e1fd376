//! Booking Endpoint

use crate::models::BookingRequest;

use super::{api_base, client, expect_ok, ApiError};

pub async fn create_booking(booking: &BookingRequest) -> Result<(), ApiError> {
    let res = client()
        .post(format!("{}/booking", api_base()))
        .json(booking)
        .send()
        .await?;
    expect_ok(res)
}
