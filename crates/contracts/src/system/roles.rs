use serde::{Deserialize, Serialize};

use super::access::{is_admin_role, Module};
use crate::shared::validation::{validate_name, validate_optional_text};
use crate::shared::RuleError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl Role {
    /// Роль администратора нельзя удалить или лишить прав
    pub fn is_protected(&self) -> bool {
        is_admin_role(&self.name)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoleDto {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub permissions: Vec<String>,
}

impl RoleDto {
    pub fn from_role(role: &Role) -> Self {
        Self {
            id: Some(role.id),
            name: role.name.clone(),
            description: role.description.clone().unwrap_or_default(),
            permissions: role.permissions.clone(),
        }
    }

    pub fn has(&self, module: Module) -> bool {
        self.permissions.iter().any(|p| p == module.key())
    }

    pub fn toggle(&mut self, module: Module, enabled: bool) {
        let key = module.key();
        self.permissions.retain(|p| p != key);
        if enabled {
            self.permissions.push(key.to_string());
        }
    }

    pub fn validate(&self) -> Result<(), RuleError> {
        validate_name("nombre", &self.name)?;
        validate_optional_text("descripción", &self.description, 200)?;
        if self.permissions.is_empty() && !is_admin_role(&self.name) {
            return Err(RuleError::field("permisos", "seleccione al menos un módulo"));
        }
        if let Some(unknown) = self
            .permissions
            .iter()
            .find(|p| p.as_str() != "*" && Module::from_key(p).is_none())
        {
            return Err(RuleError::field(
                "permisos",
                format!("módulo desconocido: {}", unknown),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_permissions() {
        let mut dto = RoleDto {
            name: "Cajero".into(),
            ..Default::default()
        };
        dto.toggle(Module::Sales, true);
        dto.toggle(Module::Sales, true);
        assert_eq!(dto.permissions, vec!["sales".to_string()]);
        assert!(dto.has(Module::Sales));
        dto.toggle(Module::Sales, false);
        assert!(!dto.has(Module::Sales));
    }

    #[test]
    fn test_role_needs_permissions() {
        let dto = RoleDto {
            name: "Almacén".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_err());

        let admin = RoleDto {
            name: "ADMIN".into(),
            ..Default::default()
        };
        assert!(admin.validate().is_ok());
    }

    #[test]
    fn test_unknown_permission_rejected() {
        let dto = RoleDto {
            name: "Almacén".into(),
            permissions: vec!["inventory".into(), "bogus".into()],
            ..Default::default()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_admin_role_is_protected() {
        let role = Role {
            id: 1,
            name: "Admin".into(),
            description: None,
            permissions: vec![],
        };
        assert!(role.is_protected());
    }
}
