use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;
use crate::shared::validation::{validate_non_negative, validate_positive, validate_text};
use crate::shared::RuleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AdjustmentKind {
    #[default]
    #[serde(alias = "ENTRADA")]
    Entry,
    #[serde(alias = "SALIDA")]
    Exit,
}

impl AdjustmentKind {
    pub fn label(&self) -> &'static str {
        match self {
            AdjustmentKind::Entry => "Entrada",
            AdjustmentKind::Exit => "Salida",
        }
    }
}

/// Ручная корректировка остатка (`POST /inventory/adjustments`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdjustmentDto {
    pub presentation_id: Option<EntityId>,
    pub kind: AdjustmentKind,
    pub quantity: f64,
    /// Обязательна для входа; для выхода backend берёт среднюю себестоимость
    pub unit_cost: Option<f64>,
    pub reason: String,
}

impl AdjustmentDto {
    pub fn validate(&self, current_stock: f64) -> Result<(), RuleError> {
        if self.presentation_id.is_none() {
            return Err(RuleError::field("presentación", "es obligatoria"));
        }
        validate_positive("cantidad", self.quantity)?;
        match self.kind {
            AdjustmentKind::Entry => {
                let cost = self
                    .unit_cost
                    .ok_or_else(|| RuleError::field("costo unitario", "es obligatorio"))?;
                validate_non_negative("costo unitario", cost)?;
            }
            AdjustmentKind::Exit => {
                if self.quantity > current_stock {
                    return Err(RuleError::InsufficientStock {
                        item: "la presentación".into(),
                        available: current_stock,
                        requested: self.quantity,
                    });
                }
            }
        }
        validate_text("motivo", &self.reason, 3, 200)
    }
}

/// Строка истории движений (`GET /inventory/movements`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryMovement {
    pub id: EntityId,
    #[serde(alias = "presentacionId", alias = "presentationId")]
    pub presentation_id: EntityId,
    #[serde(default, alias = "presentacion", alias = "presentationName")]
    pub presentation_name: String,
    #[serde(alias = "tipo")]
    pub kind: AdjustmentKind,
    #[serde(alias = "cantidad")]
    pub quantity: f64,
    #[serde(default, alias = "costoUnitario", alias = "unitCost")]
    pub unit_cost: Option<f64>,
    #[serde(default, alias = "motivo")]
    pub reason: String,
    #[serde(default, alias = "usuario", alias = "userName")]
    pub user_name: String,
    #[serde(alias = "fecha", alias = "createdAt")]
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> AdjustmentDto {
        AdjustmentDto {
            presentation_id: Some(7),
            kind: AdjustmentKind::Entry,
            quantity: 12.0,
            unit_cost: Some(3.5),
            reason: "Compra local".into(),
        }
    }

    #[test]
    fn test_entry_requires_cost() {
        assert!(entry().validate(0.0).is_ok());
        let mut e = entry();
        e.unit_cost = None;
        assert!(e.validate(0.0).is_err());
    }

    #[test]
    fn test_exit_cannot_exceed_stock() {
        let mut e = entry();
        e.kind = AdjustmentKind::Exit;
        e.unit_cost = None;
        assert!(matches!(
            e.validate(5.0),
            Err(RuleError::InsufficientStock { .. })
        ));
        assert!(e.validate(12.0).is_ok());
    }

    #[test]
    fn test_quantity_must_be_positive() {
        let mut e = entry();
        e.quantity = 0.0;
        assert!(e.validate(100.0).is_err());
    }
}
