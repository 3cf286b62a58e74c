use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::AuthService;
use crate::models::auth::entities::{Account, CurrentUser};
use crate::models::auth::requests::LoginRequest;
use crate::models::auth::responses::LoginResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{bad_request, internal_error};
use crate::utils::jwt::JwtUtils;
use crate::utils::password::verify_password;
use crate::utils::time::now_iso;
use crate::utils::validate::normalize_email;

fn auth_failed() -> HttpResponse {
    HttpResponse::Unauthorized().json(ApiResponse::error_empty(
        ErrorCode::AuthFailed,
        "Email or password is incorrect",
    ))
}

pub async fn handle_login(
    service: &AuthService,
    request: &HttpRequest,
    login_request: LoginRequest,
) -> ActixResult<HttpResponse> {
    let (Some(email), Some(password)) = (login_request.email, login_request.password) else {
        return Ok(bad_request(
            ErrorCode::ValidationFailed,
            "Email and password are required",
        ));
    };

    let storage = service.get_storage(request);
    let email = normalize_email(&email);
    let key = Account::storage_key(&email);

    // 1. 读取账号
    let mut account: Account = match storage.get(&key).await {
        Ok(Some(value)) => match serde_json::from_value(value) {
            Ok(account) => account,
            Err(e) => return Ok(internal_error("Login failed", e)),
        },
        Ok(None) => return Ok(auth_failed()),
        Err(e) => return Ok(internal_error("Login failed", e)),
    };

    // 2. 校验密码
    if !verify_password(&password, &account.password_hash) {
        info!("Failed login attempt for {}", email);
        return Ok(auth_failed());
    }

    // 3. 更新最后登录时间，失败不影响登录
    account.last_login = Some(now_iso());
    match serde_json::to_value(&account) {
        Ok(value) => {
            if let Err(e) = storage.set(&key, value).await {
                warn!("Failed to update last login for {}: {}", email, e);
            }
        }
        Err(e) => warn!("Failed to serialize account {}: {}", email, e),
    }

    // 4. 签发 token
    match JwtUtils::generate_access_token(&account.email, &account.id) {
        Ok(access_token) => {
            info!("Account {} logged in", account.email);
            Ok(HttpResponse::Ok().json(ApiResponse::success(LoginResponse {
                access_token,
                expires_in: JwtUtils::access_token_ttl_secs(),
                user: CurrentUser::from(&account),
            })))
        }
        Err(e) => Ok(internal_error("Login failed, unable to generate token", e)),
    }
}
