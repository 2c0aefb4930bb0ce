use serde::{Deserialize, Serialize};

use crate::domain::common::{non_empty, EntityId};
use crate::shared::validation::{
    validate_digits, validate_email, validate_optional_text, validate_phone, validate_text,
};
use crate::shared::RuleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentType {
    #[default]
    Dni,
    Ruc,
    /// Carné de extranjería
    Ce,
}

impl DocumentType {
    pub const ALL: [DocumentType; 3] = [DocumentType::Dni, DocumentType::Ruc, DocumentType::Ce];

    pub fn code(&self) -> &'static str {
        match self {
            DocumentType::Dni => "DNI",
            DocumentType::Ruc => "RUC",
            DocumentType::Ce => "CE",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|d| d.code() == code)
    }
}

/// RUC: 11 цифр, префикс 10/15/17/20
pub fn validate_ruc(field: &'static str, value: &str) -> Result<(), RuleError> {
    validate_digits(field, value, 11)?;
    let prefix = &value.trim()[..2];
    if !matches!(prefix, "10" | "15" | "17" | "20") {
        return Err(RuleError::field(field, "debe empezar con 10, 15, 17 o 20"));
    }
    Ok(())
}

pub fn validate_document(doc_type: DocumentType, number: &str) -> Result<(), RuleError> {
    const FIELD: &str = "número de documento";
    match doc_type {
        DocumentType::Dni => validate_digits(FIELD, number, 8),
        DocumentType::Ruc => validate_ruc(FIELD, number),
        DocumentType::Ce => {
            let n = number.trim();
            if (9..=12).contains(&n.len()) && n.chars().all(|c| c.is_ascii_alphanumeric()) {
                Ok(())
            } else {
                Err(RuleError::field(FIELD, "debe tener entre 9 y 12 caracteres alfanuméricos"))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: EntityId,
    #[serde(alias = "tipoDocumento")]
    pub document_type: DocumentType,
    #[serde(alias = "numeroDocumento")]
    pub document_number: String,
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(default, alias = "telefono")]
    pub phone: Option<String>,
    #[serde(default, alias = "correo")]
    pub email: Option<String>,
    #[serde(default, alias = "direccion")]
    pub address: Option<String>,
    #[serde(alias = "estado", alias = "isActive")]
    pub active: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientDto {
    #[serde(skip_serializing)]
    pub id: Option<EntityId>,
    pub document_type: DocumentType,
    pub document_number: String,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub active: bool,
}

impl ClientDto {
    pub fn new() -> Self {
        Self {
            active: true,
            ..Default::default()
        }
    }

    pub fn from_entity(c: &Client) -> Self {
        Self {
            id: Some(c.id),
            document_type: c.document_type,
            document_number: c.document_number.clone(),
            name: c.name.clone(),
            phone: c.phone.clone(),
            email: c.email.clone(),
            address: c.address.clone(),
            active: c.active,
        }
    }

    pub fn validate(&self) -> Result<(), RuleError> {
        validate_document(self.document_type, &self.document_number)?;
        validate_text("nombre", &self.name, 2, 150)?;
        validate_phone("teléfono", self.phone.as_deref().unwrap_or(""))?;
        validate_email("correo", self.email.as_deref().unwrap_or(""))?;
        validate_optional_text("dirección", self.address.as_deref().unwrap_or(""), 200)
    }

    pub fn normalized(mut self) -> Self {
        self.document_number = self.document_number.trim().to_uppercase();
        self.name = self.name.trim().to_string();
        self.phone = self.phone.as_deref().and_then(non_empty);
        self.email = self.email.as_deref().and_then(non_empty);
        self.address = self.address.as_deref().and_then(non_empty);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_validation() {
        assert!(validate_document(DocumentType::Dni, "45781236").is_ok());
        assert!(validate_document(DocumentType::Dni, "4578123").is_err());
        assert!(validate_document(DocumentType::Ruc, "20512345678").is_ok());
        assert!(validate_document(DocumentType::Ruc, "30512345678").is_err());
        assert!(validate_document(DocumentType::Ce, "X12345678").is_ok());
        assert!(validate_document(DocumentType::Ce, "X1234").is_err());
    }

    #[test]
    fn test_document_type_wire_format() {
        assert_eq!(serde_json::to_string(&DocumentType::Ruc).unwrap(), "\"RUC\"");
        assert_eq!(DocumentType::from_code("CE"), Some(DocumentType::Ce));
    }

    #[test]
    fn test_client_dto_validation() {
        let dto = ClientDto {
            document_number: "45781236".into(),
            name: "Juan Pérez".into(),
            phone: Some("987654321".into()),
            email: Some(String::new()),
            ..ClientDto::new()
        }
        .normalized();
        assert!(dto.validate().is_ok());
        assert_eq!(dto.email, None);
    }
}
