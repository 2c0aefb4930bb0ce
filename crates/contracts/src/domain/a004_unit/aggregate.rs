use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;
use crate::shared::validation::{validate_name, validate_text};
use crate::shared::RuleError;

/// Единица измерения (UND, KG, CJ ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: EntityId,
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(alias = "abreviatura")]
    pub abbreviation: String,
    #[serde(alias = "estado", alias = "isActive")]
    pub active: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnitDto {
    #[serde(skip_serializing)]
    pub id: Option<EntityId>,
    pub name: String,
    pub abbreviation: String,
    pub active: bool,
}

impl UnitDto {
    pub fn new() -> Self {
        Self {
            active: true,
            ..Default::default()
        }
    }

    pub fn from_entity(u: &Unit) -> Self {
        Self {
            id: Some(u.id),
            name: u.name.clone(),
            abbreviation: u.abbreviation.clone(),
            active: u.active,
        }
    }

    pub fn validate(&self) -> Result<(), RuleError> {
        validate_name("nombre", &self.name)?;
        validate_text("abreviatura", &self.abbreviation, 1, 10)
    }

    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.abbreviation = self.abbreviation.trim().to_uppercase();
        self
    }
}
