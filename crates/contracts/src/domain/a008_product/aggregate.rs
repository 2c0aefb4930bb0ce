use serde::{Deserialize, Serialize};

use crate::domain::common::{non_empty, EntityId};
use crate::shared::validation::{validate_optional_text, validate_text};
use crate::shared::RuleError;

/// Товар. Продаваемые варианты - `Presentation` (a009).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: EntityId,
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(default, alias = "descripcion")]
    pub description: Option<String>,
    #[serde(alias = "categoriaId", alias = "categoryId")]
    pub category_id: EntityId,
    #[serde(default, alias = "categoriaNombre", alias = "categoryName")]
    pub category_name: String,
    #[serde(default, alias = "marcaId", alias = "brandId")]
    pub brand_id: Option<EntityId>,
    #[serde(default, alias = "marcaNombre", alias = "brandName")]
    pub brand_name: Option<String>,
    #[serde(alias = "estado", alias = "isActive")]
    pub active: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductDto {
    #[serde(skip_serializing)]
    pub id: Option<EntityId>,
    pub name: String,
    pub description: Option<String>,
    pub category_id: Option<EntityId>,
    pub brand_id: Option<EntityId>,
    pub active: bool,
}

impl ProductDto {
    pub fn new() -> Self {
        Self {
            active: true,
            ..Default::default()
        }
    }

    pub fn from_entity(p: &Product) -> Self {
        Self {
            id: Some(p.id),
            name: p.name.clone(),
            description: p.description.clone(),
            category_id: Some(p.category_id),
            brand_id: p.brand_id,
            active: p.active,
        }
    }

    pub fn validate(&self) -> Result<(), RuleError> {
        validate_text("nombre", &self.name, 2, 120)?;
        validate_optional_text("descripción", self.description.as_deref().unwrap_or(""), 500)?;
        if self.category_id.is_none() {
            return Err(RuleError::field("categoría", "es obligatoria"));
        }
        Ok(())
    }

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
    fn test_category_required() {
        let mut dto = ProductDto {
            name: "Gaseosa".into(),
            ..ProductDto::new()
        };
        assert!(dto.validate().is_err());
        dto.category_id = Some(1);
        assert!(dto.validate().is_ok());
    }
}
