use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;
use crate::shared::validation::validate_name;
use crate::shared::RuleError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub id: EntityId,
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(alias = "estado", alias = "isActive")]
    pub active: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrandDto {
    #[serde(skip_serializing)]
    pub id: Option<EntityId>,
    pub name: String,
    pub active: bool,
}

impl BrandDto {
    pub fn new() -> Self {
        Self {
            active: true,
            ..Default::default()
        }
    }

    pub fn from_entity(b: &Brand) -> Self {
        Self {
            id: Some(b.id),
            name: b.name.clone(),
            active: b.active,
        }
    }

    pub fn validate(&self) -> Result<(), RuleError> {
        validate_name("nombre", &self.name)
    }

    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self
    }
}
