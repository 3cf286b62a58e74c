use serde::Serialize;

use super::entities::CurrentUser;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    // 秒
    pub expires_in: i64,
    pub user: CurrentUser,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: CurrentUser,
}
