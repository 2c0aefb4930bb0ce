use serde::{Deserialize, Serialize};

use crate::domain::common::{non_empty, EntityId};
use crate::shared::validation::{validate_hex_color, validate_name};
use crate::shared::RuleError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub id: EntityId,
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(default, alias = "codigo")]
    pub hex: Option<String>,
    #[serde(alias = "estado", alias = "isActive")]
    pub active: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColorDto {
    #[serde(skip_serializing)]
    pub id: Option<EntityId>,
    pub name: String,
    pub hex: Option<String>,
    pub active: bool,
}

impl ColorDto {
    pub fn new() -> Self {
        Self {
            active: true,
            ..Default::default()
        }
    }

    pub fn from_entity(c: &Color) -> Self {
        Self {
            id: Some(c.id),
            name: c.name.clone(),
            hex: c.hex.clone(),
            active: c.active,
        }
    }

    pub fn validate(&self) -> Result<(), RuleError> {
        validate_name("nombre", &self.name)?;
        validate_hex_color("código", self.hex.as_deref().unwrap_or(""))
    }

    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.hex = self
            .hex
            .as_deref()
            .and_then(non_empty)
            .map(|h| h.to_uppercase());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_uppercased_and_validated() {
        let dto = ColorDto {
            name: "Rojo".into(),
            hex: Some("#ff0000".into()),
            ..ColorDto::new()
        }
        .normalized();
        assert_eq!(dto.hex.as_deref(), Some("#FF0000"));
        assert!(dto.validate().is_ok());

        let bad = ColorDto {
            name: "Rojo".into(),
            hex: Some("red".into()),
            ..ColorDto::new()
        };
        assert!(bad.validate().is_err());
    }
}
