use serde::{Deserialize, Serialize};

use crate::domain::a006_client::validate_ruc;
use crate::domain::common::{non_empty, EntityId};
use crate::shared::validation::{
    validate_email, validate_optional_text, validate_phone, validate_text,
};
use crate::shared::RuleError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: EntityId,
    pub ruc: String,
    #[serde(alias = "razonSocial")]
    pub business_name: String,
    #[serde(default, alias = "contacto")]
    pub contact_name: Option<String>,
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
pub struct SupplierDto {
    #[serde(skip_serializing)]
    pub id: Option<EntityId>,
    pub ruc: String,
    pub business_name: String,
    pub contact_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub active: bool,
}

impl SupplierDto {
    pub fn new() -> Self {
        Self {
            active: true,
            ..Default::default()
        }
    }

    pub fn from_entity(s: &Supplier) -> Self {
        Self {
            id: Some(s.id),
            ruc: s.ruc.clone(),
            business_name: s.business_name.clone(),
            contact_name: s.contact_name.clone(),
            phone: s.phone.clone(),
            email: s.email.clone(),
            address: s.address.clone(),
            active: s.active,
        }
    }

    pub fn validate(&self) -> Result<(), RuleError> {
        validate_ruc("RUC", &self.ruc)?;
        validate_text("razón social", &self.business_name, 2, 150)?;
        validate_optional_text("contacto", self.contact_name.as_deref().unwrap_or(""), 100)?;
        validate_phone("teléfono", self.phone.as_deref().unwrap_or(""))?;
        validate_email("correo", self.email.as_deref().unwrap_or(""))?;
        validate_optional_text("dirección", self.address.as_deref().unwrap_or(""), 200)
    }

    pub fn normalized(mut self) -> Self {
        self.ruc = self.ruc.trim().to_string();
        self.business_name = self.business_name.trim().to_string();
        self.contact_name = self.contact_name.as_deref().and_then(non_empty);
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
    fn test_supplier_requires_valid_ruc() {
        let mut dto = SupplierDto {
            ruc: "20100070970".into(),
            business_name: "Distribuidora Andina SAC".into(),
            ..SupplierDto::new()
        };
        assert!(dto.validate().is_ok());
        dto.ruc = "2010007097".into();
        assert!(dto.validate().is_err());
    }
}
