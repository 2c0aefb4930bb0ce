use contracts::shared::RuleError;
use contracts::system::roles::{Role, RoleDto};

use crate::shared::api_error::ApiError;
use crate::shared::crud;

pub const RESOURCE: &str = "/roles";

pub async fn fetch_roles() -> Result<Vec<Role>, ApiError> {
    crud::fetch_all(RESOURCE).await
}

pub async fn save_role(dto: &RoleDto) -> Result<(), ApiError> {
    dto.validate()?;
    crud::save(RESOURCE, dto.id, dto).await
}

/// Роль ADMIN не удаляется
pub fn check_deletable(role: &Role) -> Result<(), RuleError> {
    if role.is_protected() {
        return Err(RuleError::Rule(
            "El rol ADMIN no se puede eliminar".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role(name: &str) -> Role {
        Role {
            id: 1,
            name: name.to_string(),
            description: None,
            permissions: vec![],
        }
    }

    #[test]
    fn test_admin_role_not_deletable() {
        assert!(check_deletable(&role("Admin")).is_err());
        assert!(check_deletable(&role("CAJERO")).is_ok());
    }
}
