use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;
use crate::shared::money::{round2, to_cents};
use crate::shared::validation::{is_digits, validate_non_negative, validate_text};
use crate::shared::RuleError;

/// Презентация (SKU): продаваемая упаковка товара со своей ценой и остатком
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presentation {
    pub id: EntityId,
    #[serde(alias = "productoId", alias = "productId")]
    pub product_id: EntityId,
    #[serde(default, alias = "productoNombre", alias = "productName")]
    pub product_name: String,
    #[serde(default, alias = "categoriaId", alias = "categoryId")]
    pub category_id: Option<EntityId>,
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(default, alias = "codigoBarras")]
    pub barcode: Option<String>,
    #[serde(default, alias = "unidadId", alias = "unitId")]
    pub unit_id: Option<EntityId>,
    #[serde(default, alias = "colorId")]
    pub color_id: Option<EntityId>,
    #[serde(alias = "precioCompra", alias = "costPrice")]
    pub cost_price: f64,
    #[serde(alias = "precioVenta", alias = "salePrice")]
    pub sale_price: f64,
    #[serde(default)]
    pub stock: f64,
    #[serde(default, alias = "stockMinimo", alias = "minStock")]
    pub min_stock: f64,
    #[serde(alias = "estado", alias = "isActive")]
    pub active: bool,
}

impl Presentation {
    /// "Gaseosa 500 ml" - товар + презентация
    pub fn full_name(&self) -> String {
        if self.product_name.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.product_name, self.name)
        }
    }

    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.min_stock
    }

    pub fn margin_percent(&self) -> f64 {
        margin_percent(self.cost_price, self.sale_price)
    }
}

/// Маржа в процентах от цены продажи; 0 если цена продажи 0
pub fn margin_percent(cost_price: f64, sale_price: f64) -> f64 {
    if to_cents(sale_price) == 0 {
        return 0.0;
    }
    round2((sale_price - cost_price) / sale_price * 100.0)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PresentationDto {
    #[serde(skip_serializing)]
    pub id: Option<EntityId>,
    pub product_id: Option<EntityId>,
    pub name: String,
    pub barcode: Option<String>,
    pub unit_id: Option<EntityId>,
    pub color_id: Option<EntityId>,
    pub cost_price: f64,
    pub sale_price: f64,
    pub min_stock: f64,
    pub active: bool,
}

impl PresentationDto {
    pub fn new() -> Self {
        Self {
            active: true,
            ..Default::default()
        }
    }

    pub fn from_entity(p: &Presentation) -> Self {
        Self {
            id: Some(p.id),
            product_id: Some(p.product_id),
            name: p.name.clone(),
            barcode: p.barcode.clone(),
            unit_id: p.unit_id,
            color_id: p.color_id,
            cost_price: p.cost_price,
            sale_price: p.sale_price,
            min_stock: p.min_stock,
            active: p.active,
        }
    }

    pub fn validate(&self) -> Result<(), RuleError> {
        if self.product_id.is_none() {
            return Err(RuleError::field("producto", "es obligatorio"));
        }
        validate_text("presentación", &self.name, 1, 80)?;
        if let Some(code) = self.barcode.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
            if !is_digits(code) || !(8..=14).contains(&code.len()) {
                return Err(RuleError::field("código de barras", "debe tener entre 8 y 14 dígitos"));
            }
        }
        if self.unit_id.is_none() {
            return Err(RuleError::field("unidad", "es obligatoria"));
        }
        validate_non_negative("precio de compra", self.cost_price)?;
        validate_non_negative("precio de venta", self.sale_price)?;
        validate_non_negative("stock mínimo", self.min_stock)?;
        validate_prices(self.cost_price, self.sale_price)
    }
}

/// Цена продажи не может быть ниже закупочной
pub fn validate_prices(cost_price: f64, sale_price: f64) -> Result<(), RuleError> {
    if to_cents(sale_price) < to_cents(cost_price) {
        return Err(RuleError::field(
            "precio de venta",
            format!(
                "no puede ser menor que el precio de compra ({:.2})",
                cost_price
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> PresentationDto {
        PresentationDto {
            product_id: Some(1),
            name: "500 ml".into(),
            unit_id: Some(1),
            cost_price: 1.2,
            sale_price: 2.0,
            ..PresentationDto::new()
        }
    }

    #[test]
    fn test_sale_price_not_below_cost() {
        assert!(dto().validate().is_ok());
        let mut d = dto();
        d.sale_price = 1.19;
        assert!(d.validate().is_err());
        d.sale_price = 1.2;
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_barcode_rules() {
        let mut d = dto();
        d.barcode = Some("7750182000017".into());
        assert!(d.validate().is_ok());
        d.barcode = Some("77501".into());
        assert!(d.validate().is_err());
        d.barcode = Some("   ".into());
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_margin() {
        assert_eq!(margin_percent(1.2, 2.0), 40.0);
        assert_eq!(margin_percent(1.0, 0.0), 0.0);
    }
}
