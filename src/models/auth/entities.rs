use serde::{Deserialize, Serialize};

/// 教师账号，以 `accounts:{规范化邮箱}` 为键存储
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<String>,
}

impl Account {
    pub fn storage_key(email: &str) -> String {
        format!("{ACCOUNT_PREFIX}{email}")
    }
}

pub const ACCOUNT_PREFIX: &str = "accounts:";

/// 当前登录用户，不含密码哈希，可安全返回给客户端
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<String>,
}

impl From<&Account> for CurrentUser {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.clone(),
            name: account.name.clone(),
            email: account.email.clone(),
            last_login: account.last_login.clone(),
        }
    }
}
