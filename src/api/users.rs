//! Account Endpoints
//!
//! Role-filtered listings, account removal/update, and the role lookup
//! used by the session context.

use serde::{Deserialize, Serialize};

use crate::models::{Role, UserAccount};

use super::{api_base, client, encode_segment, expect_json, expect_ok, ApiError};

/// Editable account fields (PUT /users/{id})
#[derive(Debug, Clone, Serialize)]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
    pub role: String,
}

#[derive(Deserialize)]
struct RoleResponse {
    role: String,
}

pub async fn list_users(role: Role) -> Result<Vec<UserAccount>, ApiError> {
    let res = client()
        .get(format!("{}/users", api_base()))
        .query(&[("role", role.as_str())])
        .send()
        .await?;
    expect_json(res).await
}

pub async fn delete_user(id: &str) -> Result<(), ApiError> {
    let res = client()
        .delete(format!("{}/users/{}", api_base(), encode_segment(id)))
        .send()
        .await?;
    expect_ok(res)
}

pub async fn update_user(id: &str, update: &UserUpdate) -> Result<(), ApiError> {
    let res = client()
        .put(format!("{}/users/{}", api_base(), encode_segment(id)))
        .json(update)
        .send()
        .await?;
    expect_ok(res)
}

/// Look up the signed-in user's role. The identity token rides in the
/// Authorization header.
pub async fn fetch_role(token: &str) -> Result<Role, ApiError> {
    let res = client()
        .get(format!("{}/user/role", api_base()))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await?;
    let body: RoleResponse = expect_json(res).await?;
    Ok(Role::from_str(&body.role))
}
