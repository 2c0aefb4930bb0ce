//! Общие типы для всех записей backend

pub mod order;

use serde::{Deserialize, Serialize};

/// Идентификатор записи на стороне backend
pub type EntityId = i64;

/// Тело `PATCH /<resource>/{id}/status`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActiveDto {
    pub active: bool,
}

/// Ответ backend на создание записи
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: EntityId,
}

/// Пустую строку формы превращает в `None`
pub fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  "), None);
        assert_eq!(non_empty(" abc "), Some("abc".to_string()));
    }
}
