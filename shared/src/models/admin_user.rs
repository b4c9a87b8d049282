//! Admin User Model

use serde::{Deserialize, Serialize};

/// Back-office account row. Password hashes stay inside the server; the
/// type deliberately has no Serialize derive.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct AdminUser {
    pub id: i64,
    pub username: String,
    /// Argon2 PHC string, never plaintext
    pub password_hash: String,
    pub role: String,
    pub last_login: Option<i64>,
}

/// Sanitized account shape returned by login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminAccount {
    pub id: i64,
    pub username: String,
    pub role: String,
}

impl From<&AdminUser> for AdminAccount {
    fn from(user: &AdminUser) -> Self {
        AdminAccount {
            id: user.id,
            username: user.username.clone(),
            role: user.role.clone(),
        }
    }
}

/// Login payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login result body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: AdminAccount,
}
