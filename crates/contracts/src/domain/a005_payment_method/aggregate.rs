use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;
use crate::shared::validation::validate_name;
use crate::shared::RuleError;

/// Метод оплаты. `is_cash` - деньги попадают в кассовый ящик.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: EntityId,
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(default, alias = "esEfectivo", alias = "isCash")]
    pub is_cash: bool,
    #[serde(alias = "estado", alias = "isActive")]
    pub active: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentMethodDto {
    #[serde(skip_serializing)]
    pub id: Option<EntityId>,
    pub name: String,
    pub is_cash: bool,
    pub active: bool,
}

impl PaymentMethodDto {
    pub fn new() -> Self {
        Self {
            active: true,
            ..Default::default()
        }
    }

    pub fn from_entity(p: &PaymentMethod) -> Self {
        Self {
            id: Some(p.id),
            name: p.name.clone(),
            is_cash: p.is_cash,
            active: p.active,
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
