use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;
use crate::shared::money::{from_cents, to_cents};
use crate::shared::validation::validate_optional_text;
use crate::shared::RuleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SaleStatus {
    #[serde(alias = "COMPLETADA")]
    Completed,
    #[serde(alias = "ANULADA")]
    Voided,
}

impl SaleStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SaleStatus::Completed => "Completada",
            SaleStatus::Voided => "Anulada",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleItem {
    #[serde(alias = "presentacionId", alias = "presentationId")]
    pub presentation_id: EntityId,
    #[serde(default, alias = "descripcion")]
    pub description: String,
    #[serde(alias = "cantidad")]
    pub quantity: f64,
    #[serde(alias = "precioUnitario", alias = "unitPrice")]
    pub unit_price: f64,
    #[serde(default, alias = "descuento")]
    pub discount: f64,
}

impl SaleItem {
    pub fn gross_cents(&self) -> i64 {
        to_cents(self.quantity * self.unit_price)
    }

    /// Сумма строки: кол-во × цена − скидка, не меньше нуля
    pub fn line_total(&self) -> f64 {
        from_cents((self.gross_cents() - to_cents(self.discount)).max(0))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalePayment {
    #[serde(alias = "metodoPagoId", alias = "paymentMethodId")]
    pub payment_method_id: EntityId,
    #[serde(default, alias = "metodoPago", alias = "methodName")]
    pub method_name: String,
    #[serde(alias = "monto")]
    pub amount: f64,
    #[serde(default, alias = "esEfectivo", alias = "isCash")]
    pub is_cash: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: EntityId,
    #[serde(alias = "numero")]
    pub number: String,
    #[serde(default, alias = "clienteId", alias = "clientId")]
    pub client_id: Option<EntityId>,
    #[serde(default, alias = "cliente", alias = "clientName")]
    pub client_name: Option<String>,
    #[serde(default, alias = "cajaId", alias = "sessionId")]
    pub session_id: Option<EntityId>,
    #[serde(default, alias = "detalles")]
    pub items: Vec<SaleItem>,
    #[serde(default, alias = "pagos")]
    pub payments: Vec<SalePayment>,
    #[serde(default)]
    pub subtotal: f64,
    #[serde(default, alias = "descuento")]
    pub discount: f64,
    pub total: f64,
    #[serde(alias = "estado")]
    pub status: SaleStatus,
    #[serde(alias = "fecha", alias = "createdAt")]
    pub created_at: String,
    #[serde(default, alias = "usuario", alias = "userName")]
    pub user_name: String,
}

impl Sale {
    pub fn payment_summary(&self) -> String {
        self.payments
            .iter()
            .map(|p| p.method_name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Тело `POST /sales`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewSaleDto {
    pub client_id: Option<EntityId>,
    pub items: Vec<SaleItem>,
    pub payments: Vec<SalePayment>,
    pub discount: f64,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SaleTotals {
    pub subtotal: f64,
    pub discount: f64,
    pub total: f64,
    pub paid: f64,
    pub cash_paid: f64,
    pub non_cash_paid: f64,
    /// Сдача (только из наличных)
    pub change: f64,
    /// Сколько ещё не оплачено
    pub pending: f64,
}

impl NewSaleDto {
    pub fn totals(&self) -> SaleTotals {
        let subtotal: i64 = self.items.iter().map(|i| to_cents(i.line_total())).sum();
        let discount = to_cents(self.discount).clamp(0, subtotal);
        let total = subtotal - discount;
        let cash: i64 = self
            .payments
            .iter()
            .filter(|p| p.is_cash)
            .map(|p| to_cents(p.amount))
            .sum();
        let non_cash: i64 = self
            .payments
            .iter()
            .filter(|p| !p.is_cash)
            .map(|p| to_cents(p.amount))
            .sum();
        let paid = cash + non_cash;
        let due_in_cash = (total - non_cash).max(0);
        SaleTotals {
            subtotal: from_cents(subtotal),
            discount: from_cents(discount),
            total: from_cents(total),
            paid: from_cents(paid),
            cash_paid: from_cents(cash),
            non_cash_paid: from_cents(non_cash),
            change: from_cents((cash - due_in_cash).max(0)),
            pending: from_cents((total - paid).max(0)),
        }
    }

    /// Добавить товар в корзину; повторное добавление увеличивает количество
    pub fn add_item(&mut self, presentation_id: EntityId, description: &str, unit_price: f64) {
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|i| i.presentation_id == presentation_id)
        {
            item.quantity += 1.0;
        } else {
            self.items.push(SaleItem {
                presentation_id,
                description: description.to_string(),
                quantity: 1.0,
                unit_price,
                discount: 0.0,
            });
        }
    }

    pub fn remove_item(&mut self, presentation_id: EntityId) {
        self.items.retain(|i| i.presentation_id != presentation_id);
    }

    /// `stock_of` возвращает текущий остаток презентации (None - неизвестна)
    pub fn validate(
        &self,
        session_open: bool,
        stock_of: impl Fn(EntityId) -> Option<f64>,
    ) -> Result<(), RuleError> {
        if !session_open {
            return Err(RuleError::rule(
                "No hay una caja abierta. Abra la caja antes de vender.",
            ));
        }
        if self.items.is_empty() {
            return Err(RuleError::rule("Agregue al menos un producto"));
        }
        for item in &self.items {
            if !item.quantity.is_finite() || item.quantity <= 0.0 {
                return Err(RuleError::field("cantidad", format!("inválida para {}", item.description)));
            }
            if item.discount < 0.0 || to_cents(item.discount) > item.gross_cents() {
                return Err(RuleError::field(
                    "descuento",
                    format!("no puede superar el importe de {}", item.description),
                ));
            }
            let available = stock_of(item.presentation_id).unwrap_or(0.0);
            if item.quantity > available {
                return Err(RuleError::InsufficientStock {
                    item: item.description.clone(),
                    available,
                    requested: item.quantity,
                });
            }
        }
        if self.discount < 0.0 {
            return Err(RuleError::field("descuento", "no puede ser negativo"));
        }
        let subtotal: i64 = self.items.iter().map(|i| to_cents(i.line_total())).sum();
        if to_cents(self.discount) > subtotal {
            return Err(RuleError::field(
                "descuento",
                format!("no puede superar el subtotal ({:.2})", from_cents(subtotal)),
            ));
        }
        if self.payments.iter().any(|p| p.amount <= 0.0) {
            return Err(RuleError::field("pago", "los montos deben ser mayores que cero"));
        }
        let totals = self.totals();
        if to_cents(totals.non_cash_paid) > to_cents(totals.total) {
            return Err(RuleError::rule(
                "Los pagos que no son en efectivo no pueden superar el total",
            ));
        }
        if to_cents(totals.paid) < to_cents(totals.total) {
            return Err(RuleError::rule(format!(
                "Falta cobrar {:.2}",
                totals.pending
            )));
        }
        validate_optional_text("observación", self.notes.as_deref().unwrap_or(""), 200)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cash(amount: f64) -> SalePayment {
        SalePayment {
            payment_method_id: 1,
            method_name: "Efectivo".into(),
            amount,
            is_cash: true,
        }
    }

    fn card(amount: f64) -> SalePayment {
        SalePayment {
            payment_method_id: 2,
            method_name: "Tarjeta".into(),
            amount,
            is_cash: false,
        }
    }

    fn cart() -> NewSaleDto {
        let mut dto = NewSaleDto::default();
        dto.add_item(1, "Gaseosa 500 ml", 2.5);
        dto.add_item(1, "Gaseosa 500 ml", 2.5);
        dto.add_item(2, "Galleta", 1.2);
        dto
    }

    #[test]
    fn test_add_item_merges_same_presentation() {
        let dto = cart();
        assert_eq!(dto.items.len(), 2);
        assert_eq!(dto.items[0].quantity, 2.0);
    }

    #[test]
    fn test_totals_with_discount_and_change() {
        let mut dto = cart();
        dto.items[1].discount = 0.2;
        dto.discount = 1.0;
        dto.payments = vec![card(2.0), cash(10.0)];
        let t = dto.totals();
        assert_eq!(t.subtotal, 6.0);
        assert_eq!(t.total, 5.0);
        assert_eq!(t.paid, 12.0);
        assert_eq!(t.change, 7.0);
        assert_eq!(t.pending, 0.0);
    }

    #[test]
    fn test_line_total_never_negative() {
        let item = SaleItem {
            presentation_id: 1,
            description: String::new(),
            quantity: 1.0,
            unit_price: 1.0,
            discount: 5.0,
        };
        assert_eq!(item.line_total(), 0.0);
    }

    #[test]
    fn test_validate_requires_open_session() {
        let mut dto = cart();
        dto.payments = vec![cash(10.0)];
        assert!(dto.validate(false, |_| Some(100.0)).is_err());
        assert!(dto.validate(true, |_| Some(100.0)).is_ok());
    }

    #[test]
    fn test_validate_stock() {
        let mut dto = cart();
        dto.payments = vec![cash(10.0)];
        let err = dto
            .validate(true, |id| if id == 1 { Some(1.0) } else { Some(10.0) })
            .unwrap_err();
        assert!(matches!(err, RuleError::InsufficientStock { .. }));
    }

    #[test]
    fn test_validate_payment_rules() {
        let mut dto = cart();
        dto.payments = vec![cash(3.0)];
        assert_eq!(
            dto.validate(true, |_| Some(100.0)).unwrap_err(),
            RuleError::Rule("Falta cobrar 3.20".into())
        );
        dto.payments = vec![card(7.0)];
        assert!(dto.validate(true, |_| Some(100.0)).is_err());
        dto.payments = vec![card(6.2)];
        assert!(dto.validate(true, |_| Some(100.0)).is_ok());
    }

    #[test]
    fn test_global_discount_not_above_subtotal() {
        let mut dto = cart();
        dto.payments = vec![cash(10.0)];
        dto.discount = 50.0;
        assert_eq!(
            dto.validate(true, |_| Some(100.0)).unwrap_err(),
            RuleError::field("descuento", "no puede superar el subtotal (6.20)")
        );
        dto.discount = 6.2;
        assert!(dto.validate(true, |_| Some(100.0)).is_ok());
    }

    #[test]
    fn test_payment_summary() {
        let json = r#"{"id":1,"numero":"V-0001","total":5.0,"estado":"COMPLETADA","fecha":"2024-05-01T10:00:00",
            "pagos":[{"metodoPagoId":1,"metodoPago":"Efectivo","monto":3.0,"esEfectivo":true},
                     {"metodoPagoId":2,"metodoPago":"Yape","monto":2.0}]}"#;
        let sale: Sale = serde_json::from_str(json).unwrap();
        assert_eq!(sale.payment_summary(), "Efectivo, Yape");
        assert_eq!(sale.status, SaleStatus::Completed);
    }
}
