use serde::{Deserialize, Serialize};

use crate::domain::common::{non_empty, EntityId};
use crate::shared::validation::{validate_name, validate_optional_text};
use crate::shared::RuleError;

/// Категория товаров
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: EntityId,
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(default, alias = "descripcion")]
    pub description: Option<String>,
    #[serde(alias = "estado", alias = "isActive")]
    pub active: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryDto {
    #[serde(skip_serializing)]
    pub id: Option<EntityId>,
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
}

impl CategoryDto {
    pub fn new() -> Self {
        Self {
            active: true,
            ..Default::default()
        }
    }

    pub fn from_entity(c: &Category) -> Self {
        Self {
            id: Some(c.id),
            name: c.name.clone(),
            description: c.description.clone(),
            active: c.active,
        }
    }

    pub fn validate(&self) -> Result<(), RuleError> {
        validate_name("nombre", &self.name)?;
        validate_optional_text("descripción", self.description.as_deref().unwrap_or(""), 200)
    }

    /// Нормализация перед отправкой: trim, пустые строки → None
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.description = self.description.as_deref().and_then(non_empty);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_names() {
        let json = r#"{"id":5,"nombre":"Bebidas","descripcion":null,"estado":true}"#;
        let c: Category = serde_json::from_str(json).unwrap();
        assert_eq!(c.name, "Bebidas");
        assert!(c.active);
    }

    #[test]
    fn test_normalized_drops_blank_description() {
        let dto = CategoryDto {
            name: "  Snacks ".into(),
            description: Some("   ".into()),
            ..CategoryDto::new()
        }
        .normalized();
        assert_eq!(dto.name, "Snacks");
        assert_eq!(dto.description, None);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_id_not_sent_in_body() {
        let dto = CategoryDto {
            id: Some(3),
            name: "Lácteos".into(),
            ..CategoryDto::new()
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("id").is_none());
    }
}
