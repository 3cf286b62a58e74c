use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AuthService;
use crate::errors::Result;
use crate::models::auth::entities::{Account, CurrentUser};
use crate::models::auth::requests::SignupRequest;
use crate::models::auth::responses::UserResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{bad_request, internal_error};
use crate::storage::Storage;
use crate::utils::password::hash_password;
use crate::utils::time::now_iso;
use crate::utils::validate::{normalize_email, validate_email, validate_name, validate_password};

pub async fn handle_signup(
    service: &AuthService,
    request: &HttpRequest,
    signup_request: SignupRequest,
) -> ActixResult<HttpResponse> {
    let (Some(name), Some(email), Some(password)) = (
        signup_request.name,
        signup_request.email,
        signup_request.password,
    ) else {
        return Ok(bad_request(
            ErrorCode::ValidationFailed,
            "Name, email and password are required",
        ));
    };

    if let Err(msg) = validate_name(&name) {
        return Ok(bad_request(ErrorCode::ValidationFailed, msg));
    }
    let email = normalize_email(&email);
    if let Err(msg) = validate_email(&email) {
        return Ok(bad_request(ErrorCode::AccountEmailInvalid, msg));
    }
    if let Err(msg) = validate_password(&password) {
        return Ok(bad_request(ErrorCode::AccountPasswordInvalid, msg));
    }

    let storage = service.get_storage(request);
    match storage.get(&Account::storage_key(&email)).await {
        Ok(Some(_)) => {
            return Ok(bad_request(
                ErrorCode::AccountAlreadyExists,
                "An account with this email already exists",
            ));
        }
        Ok(None) => {}
        Err(e) => return Ok(internal_error("Failed to create account", e)),
    }

    match create_account(storage.as_ref(), name.trim(), &email, &password).await {
        Ok(account) => {
            info!("Account {} created", account.email);
            Ok(HttpResponse::Created().json(ApiResponse::success(UserResponse {
                user: CurrentUser::from(&account),
            })))
        }
        Err(e) => Ok(internal_error("Failed to create account", e)),
    }
}

/// 创建并保存账号，调用方负责校验和查重
pub async fn create_account(
    storage: &dyn Storage,
    name: &str,
    email: &str,
    password: &str,
) -> Result<Account> {
    let account = Account {
        id: uuid::Uuid::new_v4().to_string(),
        name: name.to_string(),
        email: email.to_string(),
        password_hash: hash_password(password)?,
        created_at: now_iso(),
        last_login: None,
    };

    storage
        .set(
            &Account::storage_key(email),
            serde_json::to_value(&account)?,
        )
        .await?;
    Ok(account)
}
