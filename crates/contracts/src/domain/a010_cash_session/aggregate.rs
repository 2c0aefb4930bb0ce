use serde::{Deserialize, Serialize};

use super::denomination::DenominationCount;
use crate::domain::common::EntityId;
use crate::shared::validation::{validate_non_negative, validate_positive, validate_text};
use crate::shared::RuleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CashSessionStatus {
    #[serde(alias = "ABIERTA")]
    Open,
    #[serde(alias = "CERRADA")]
    Closed,
}

impl CashSessionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CashSessionStatus::Open => "Abierta",
            CashSessionStatus::Closed => "Cerrada",
        }
    }
}

/// Кассовая смена: период между открытием и закрытием денежного ящика
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashSession {
    pub id: EntityId,
    #[serde(default, alias = "usuario", alias = "userName")]
    pub user_name: String,
    #[serde(alias = "fechaApertura", alias = "openedAt")]
    pub opened_at: String,
    #[serde(default, alias = "fechaCierre", alias = "closedAt")]
    pub closed_at: Option<String>,
    #[serde(alias = "montoInicial", alias = "openingAmount")]
    pub opening_amount: f64,
    #[serde(default, alias = "montoEsperado", alias = "expectedAmount")]
    pub expected_amount: Option<f64>,
    #[serde(default, alias = "montoReal", alias = "countedAmount")]
    pub counted_amount: Option<f64>,
    #[serde(default, alias = "diferencia")]
    pub difference: Option<f64>,
    #[serde(alias = "estado")]
    pub status: CashSessionStatus,
    #[serde(default, alias = "observacion")]
    pub notes: Option<String>,
}

impl CashSession {
    pub fn is_open(&self) -> bool {
        self.status == CashSessionStatus::Open
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MovementKind {
    #[serde(alias = "INGRESO")]
    Income,
    #[serde(alias = "EGRESO")]
    Expense,
}

impl MovementKind {
    pub fn label(&self) -> &'static str {
        match self {
            MovementKind::Income => "Ingreso",
            MovementKind::Expense => "Egreso",
        }
    }
}

/// Ручное движение наличных внутри смены (не продажа)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    pub id: EntityId,
    #[serde(alias = "cajaId", alias = "sessionId")]
    pub session_id: EntityId,
    #[serde(alias = "tipo")]
    pub kind: MovementKind,
    #[serde(alias = "monto")]
    pub amount: f64,
    #[serde(alias = "concepto")]
    pub concept: String,
    #[serde(default, alias = "fecha", alias = "createdAt")]
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenSessionDto {
    pub opening_amount: f64,
}

impl OpenSessionDto {
    pub fn validate(&self) -> Result<(), RuleError> {
        validate_non_negative("monto inicial", self.opening_amount)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementDto {
    pub kind: MovementKind,
    pub amount: f64,
    pub concept: String,
}

impl MovementDto {
    /// `cash_available` - ожидаемая сумма в ящике на данный момент
    pub fn validate(&self, cash_available: f64) -> Result<(), RuleError> {
        validate_positive("monto", self.amount)?;
        validate_text("concepto", &self.concept, 1, 150)?;
        if self.kind == MovementKind::Expense
            && crate::shared::money::to_cents(self.amount)
                > crate::shared::money::to_cents(cash_available)
        {
            return Err(RuleError::InsufficientFunds {
                available: cash_available,
                required: self.amount,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloseSessionDto {
    pub counted_amount: f64,
    pub denominations: Vec<DenominationCount>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_accepts_spanish_wire_values() {
        let s: CashSessionStatus = serde_json::from_str("\"ABIERTA\"").unwrap();
        assert_eq!(s, CashSessionStatus::Open);
        let s: CashSessionStatus = serde_json::from_str("\"CLOSED\"").unwrap();
        assert_eq!(s, CashSessionStatus::Closed);
        assert_eq!(serde_json::to_string(&CashSessionStatus::Open).unwrap(), "\"OPEN\"");
    }

    #[test]
    fn test_open_session_amount() {
        assert!(OpenSessionDto { opening_amount: 0.0 }.validate().is_ok());
        assert!(OpenSessionDto { opening_amount: -1.0 }.validate().is_err());
    }

    #[test]
    fn test_expense_cannot_exceed_drawer() {
        let dto = MovementDto {
            kind: MovementKind::Expense,
            amount: 150.0,
            concept: "Pago de luz".into(),
        };
        assert_eq!(
            dto.validate(100.0).unwrap_err(),
            RuleError::InsufficientFunds {
                available: 100.0,
                required: 150.0
            }
        );
        assert!(dto.validate(150.0).is_ok());

        let income = MovementDto {
            kind: MovementKind::Income,
            ..dto
        };
        assert!(income.validate(0.0).is_ok());
    }

    #[test]
    fn test_movement_requires_concept_and_positive_amount() {
        let dto = MovementDto {
            kind: MovementKind::Income,
            amount: 0.0,
            concept: "Sencillo".into(),
        };
        assert!(dto.validate(0.0).is_err());
        let dto = MovementDto {
            kind: MovementKind::Income,
            amount: 10.0,
            concept: " ".into(),
        };
        assert!(dto.validate(0.0).is_err());
        let dto = MovementDto {
            kind: MovementKind::Income,
            amount: 10.0,
            concept: "Ok".into(),
        };
        assert!(dto.validate(0.0).is_ok());
    }
}
