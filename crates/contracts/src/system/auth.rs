use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

/// Профиль текущего пользователя (`GET /auth/me`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    #[serde(default, alias = "fullName")]
    pub full_name: Option<String>,
    #[serde(alias = "roleName")]
    pub role: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl UserInfo {
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.username)
    }

    pub fn is_admin(&self) -> bool {
        super::access::is_admin_role(&self.role)
    }
}

/// Полезная нагрузка JWT (подпись на клиенте не проверяется)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
    /// Unix seconds
    pub exp: i64,
}

impl TokenClaims {
    pub fn is_expired(&self, now_unix: i64) -> bool {
        self.exp <= now_unix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_info_accepts_backend_aliases() {
        let json = r#"{"id":3,"username":"caja1","fullName":"Ana Quispe","roleName":"CAJERO","permissions":["sales"]}"#;
        let user: UserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(user.display_name(), "Ana Quispe");
        assert_eq!(user.role, "CAJERO");
        assert!(!user.is_admin());
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        let user = UserInfo {
            id: 1,
            username: "admin".into(),
            full_name: Some("  ".into()),
            role: "ADMIN".into(),
            permissions: vec![],
        };
        assert_eq!(user.display_name(), "admin");
        assert!(user.is_admin());
    }

    #[test]
    fn test_claims_expiry() {
        let claims = TokenClaims {
            sub: "1".into(),
            username: None,
            role: None,
            permissions: vec![],
            exp: 1_000,
        };
        assert!(!claims.is_expired(999));
        assert!(claims.is_expired(1_000));
    }
}
