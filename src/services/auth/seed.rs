//! 首次启动时创建默认教师账号

use rand::Rng;
use rand::distr::Alphanumeric;
use tracing::{info, warn};

use super::signup::create_account;
use crate::errors::Result;
use crate::models::auth::entities::ACCOUNT_PREFIX;
use crate::storage::Storage;
use crate::utils::validate::normalize_email;

const DEFAULT_ADMIN_EMAIL: &str = "admin@seice.local";
const DEFAULT_ADMIN_NAME: &str = "Administrador";

fn generate_password() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect()
}

/// 没有任何账号时创建默认账号，返回是否创建
pub async fn seed_default_account(storage: &dyn Storage) -> Result<bool> {
    if !storage.get_by_prefix(ACCOUNT_PREFIX).await?.is_empty() {
        return Ok(false);
    }

    let email = normalize_email(
        &std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| DEFAULT_ADMIN_EMAIL.to_string()),
    );
    let (password, generated) = match std::env::var("ADMIN_PASSWORD") {
        Ok(password) if !password.is_empty() => (password, false),
        _ => (generate_password(), true),
    };

    create_account(storage, DEFAULT_ADMIN_NAME, &email, &password).await?;

    if generated {
        warn!(
            "Created default account {} with generated password: {}",
            email, password
        );
    } else {
        info!("Created default account {}", email);
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory_storage::MemoryStorage;

    #[actix_web::test]
    async fn test_seed_only_once() {
        let storage = MemoryStorage::new();
        assert!(seed_default_account(&storage).await.unwrap());
        assert!(!seed_default_account(&storage).await.unwrap());
        assert_eq!(storage.get_by_prefix(ACCOUNT_PREFIX).await.unwrap().len(), 1);
    }

    #[test]
    fn test_generated_password_shape() {
        let password = generate_password();
        assert_eq!(password.len(), 16);
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
