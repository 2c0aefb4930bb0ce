use thiserror::Error;

/// Нарушение бизнес-правила, обнаруженное на клиенте до отправки запроса.
///
/// Тексты на испанском: показываются пользователю как есть.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuleError {
    #[error("{field}: {message}")]
    Field { field: &'static str, message: String },

    #[error("El arqueo no cuadra: contado {counted:.2}, esperado {expected:.2} (diferencia {difference:+.2})")]
    CashMismatch {
        counted: f64,
        expected: f64,
        difference: f64,
    },

    #[error("Fondos insuficientes: disponible {available:.2}, requerido {required:.2}")]
    InsufficientFunds { available: f64, required: f64 },

    #[error("Stock insuficiente para {item}: disponible {available}, solicitado {requested}")]
    InsufficientStock {
        item: String,
        available: f64,
        requested: f64,
    },

    #[error("Transición no permitida: {from} → {to}")]
    InvalidTransition { from: String, to: String },

    #[error("{0}")]
    Rule(String),
}

impl RuleError {
    pub fn field(field: &'static str, message: impl Into<String>) -> Self {
        Self::Field {
            field,
            message: message.into(),
        }
    }

    pub fn rule(message: impl Into<String>) -> Self {
        Self::Rule(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            RuleError::field("nombre", "es obligatorio").to_string(),
            "nombre: es obligatorio"
        );
        assert_eq!(
            RuleError::InsufficientFunds {
                available: 10.0,
                required: 12.5
            }
            .to_string(),
            "Fondos insuficientes: disponible 10.00, requerido 12.50"
        );
        assert_eq!(
            RuleError::CashMismatch {
                counted: 99.5,
                expected: 100.0,
                difference: -0.5
            }
            .to_string(),
            "El arqueo no cuadra: contado 99.50, esperado 100.00 (diferencia -0.50)"
        );
    }
}
