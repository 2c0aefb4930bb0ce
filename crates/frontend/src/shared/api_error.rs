//! Ошибки обращения к backend и их текст для пользователя

use contracts::shared::RuleError;
use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unauthorized")]
    Unauthorized,
    #[error("forbidden")]
    Forbidden,
    #[error("not found")]
    NotFound,
    #[error("validation failed")]
    Validation(BTreeMap<String, Vec<String>>),
    #[error("insufficient funds: available {available}, required {required}")]
    InsufficientFunds { available: f64, required: f64 },
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },
    #[error("decode error: {0}")]
    Decode(String),
    #[error("not authenticated")]
    NotAuthenticated,
    /// Локальная проверка правил до отправки
    #[error(transparent)]
    Rule(#[from] RuleError),
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default, alias = "mensaje", alias = "error")]
    message: Option<String>,
    #[serde(default)]
    errors: Option<BTreeMap<String, Vec<String>>>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default, alias = "disponible")]
    available: Option<f64>,
    #[serde(default, alias = "requerido")]
    required: Option<f64>,
}

impl ApiError {
    /// Разбор не-2xx ответа по статусу и телу
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();

        if parsed.code.as_deref() == Some("INSUFFICIENT_FUNDS") {
            return ApiError::InsufficientFunds {
                available: parsed.available.unwrap_or(0.0),
                required: parsed.required.unwrap_or(0.0),
            };
        }
        if let Some(errors) = parsed.errors.filter(|e| !e.is_empty()) {
            return ApiError::Validation(errors);
        }

        let message = parsed
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| body.trim().chars().take(200).collect());

        match status {
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden,
            404 => ApiError::NotFound,
            409 => ApiError::Conflict(message),
            400 | 422 if !message.is_empty() => {
                let mut map = BTreeMap::new();
                map.insert(String::new(), vec![message]);
                ApiError::Validation(map)
            }
            _ => ApiError::Server { status, message },
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized | ApiError::NotAuthenticated)
    }

    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => {
                "No se pudo conectar con el servidor. Verifique su conexión.".to_string()
            }
            ApiError::Unauthorized | ApiError::NotAuthenticated => {
                "Su sesión ha expirado. Inicie sesión nuevamente.".to_string()
            }
            ApiError::Forbidden => "No tiene permisos para realizar esta acción.".to_string(),
            ApiError::NotFound => "El registro solicitado no existe.".to_string(),
            ApiError::Validation(map) => map
                .iter()
                .map(|(field, msgs)| {
                    if field.is_empty() {
                        msgs.join(", ")
                    } else {
                        format!("{}: {}", field, msgs.join(", "))
                    }
                })
                .collect::<Vec<_>>()
                .join("\n"),
            ApiError::InsufficientFunds {
                available,
                required,
            } => format!(
                "Fondos insuficientes en caja: disponible {:.2}, requerido {:.2}",
                available, required
            ),
            ApiError::Conflict(msg) => msg.clone(),
            ApiError::Server { status, message } if message.is_empty() => {
                format!("Error del servidor ({})", status)
            }
            ApiError::Server { status, message } => {
                format!("Error del servidor ({}): {}", status, message)
            }
            ApiError::Decode(_) => "Respuesta inesperada del servidor.".to_string(),
            ApiError::Rule(rule) => rule.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_map_sorted_by_field() {
        let err = ApiError::from_response(
            422,
            r#"{"errors":{"nombre":["es obligatorio"],"email":["inválido","duplicado"]}}"#,
        );
        assert_eq!(
            err.user_message(),
            "email: inválido, duplicado\nnombre: es obligatorio"
        );
    }

    #[test]
    fn test_insufficient_funds() {
        let err = ApiError::from_response(
            400,
            r#"{"code":"INSUFFICIENT_FUNDS","available":12.5,"required":40}"#,
        );
        assert_eq!(
            err,
            ApiError::InsufficientFunds {
                available: 12.5,
                required: 40.0
            }
        );
        assert_eq!(
            err.user_message(),
            "Fondos insuficientes en caja: disponible 12.50, requerido 40.00"
        );
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::from_response(401, ""), ApiError::Unauthorized);
        assert_eq!(ApiError::from_response(403, "{}"), ApiError::Forbidden);
        assert_eq!(ApiError::from_response(404, ""), ApiError::NotFound);
        assert_eq!(
            ApiError::from_response(409, r#"{"message":"Ya existe"}"#),
            ApiError::Conflict("Ya existe".into())
        );
        assert_eq!(
            ApiError::from_response(500, "boom"),
            ApiError::Server {
                status: 500,
                message: "boom".into()
            }
        );
    }

    #[test]
    fn test_plain_message_on_bad_request() {
        let err = ApiError::from_response(400, r#"{"message":"Caja cerrada"}"#);
        assert_eq!(err.user_message(), "Caja cerrada");
    }

    #[test]
    fn test_rule_error_message() {
        let err: ApiError = RuleError::field("nombre", "es obligatorio").into();
        assert_eq!(err.user_message(), "nombre: es obligatorio");
    }
}
