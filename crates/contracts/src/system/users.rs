use serde::{Deserialize, Serialize};

use crate::shared::validation::{validate_email, validate_optional_text, validate_text};
use crate::shared::RuleError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default, alias = "fullName")]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(alias = "roleId")]
    pub role_id: i64,
    #[serde(default, alias = "roleName")]
    pub role_name: String,
    #[serde(alias = "isActive", alias = "estado")]
    pub active: bool,
    #[serde(default, alias = "createdAt")]
    pub created_at: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserDto {
    pub id: Option<i64>,
    pub username: String,
    /// Только при создании
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub full_name: String,
    pub email: String,
    pub role_id: Option<i64>,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordDto {
    pub new_password: String,
}

pub const MIN_PASSWORD_LEN: usize = 6;

impl UserDto {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: Some(user.id),
            username: user.username.clone(),
            password: None,
            full_name: user.full_name.clone().unwrap_or_default(),
            email: user.email.clone().unwrap_or_default(),
            role_id: Some(user.role_id),
            active: user.active,
        }
    }

    pub fn validate(&self) -> Result<(), RuleError> {
        validate_username(&self.username)?;
        if self.id.is_none() {
            validate_password(self.password.as_deref().unwrap_or(""))?;
        }
        validate_text("nombre completo", &self.full_name, 3, 100)?;
        validate_optional_text("correo", &self.email, 100)?;
        validate_email("correo", &self.email)?;
        if self.role_id.is_none() {
            return Err(RuleError::field("rol", "es obligatorio"));
        }
        Ok(())
    }
}

/// 3..=30 символов `[a-z0-9._]`
pub fn validate_username(username: &str) -> Result<(), RuleError> {
    let len = username.chars().count();
    if !(3..=30).contains(&len) {
        return Err(RuleError::field("usuario", "debe tener entre 3 y 30 caracteres"));
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '.' || c == '_')
    {
        return Err(RuleError::field(
            "usuario",
            "solo minúsculas, dígitos, punto y guion bajo",
        ));
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), RuleError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(RuleError::field(
            "contraseña",
            format!("debe tener al menos {} caracteres", MIN_PASSWORD_LEN),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user() -> UserDto {
        UserDto {
            id: None,
            username: "caja.01".into(),
            password: Some("secreto".into()),
            full_name: "Rosa Mamani".into(),
            email: String::new(),
            role_id: Some(2),
            active: true,
        }
    }

    #[test]
    fn test_valid_new_user() {
        assert!(new_user().validate().is_ok());
    }

    #[test]
    fn test_username_rules() {
        assert!(validate_username("ab").is_err());
        assert!(validate_username("Caja01").is_err());
        assert!(validate_username("caja-01").is_err());
        assert!(validate_username("caja_01").is_ok());
    }

    #[test]
    fn test_password_only_required_on_create() {
        let mut dto = new_user();
        dto.password = Some("123".into());
        assert!(dto.validate().is_err());
        dto.id = Some(10);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_role_required() {
        let mut dto = new_user();
        dto.role_id = None;
        assert_eq!(
            dto.validate().unwrap_err(),
            RuleError::field("rol", "es obligatorio")
        );
    }

    #[test]
    fn test_password_not_serialized_on_update() {
        let mut dto = new_user();
        dto.password = None;
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("password").is_none());
    }
}
