//! Общие правила для заказов клиентов и заказов поставщикам

use serde::{Deserialize, Serialize};

use super::EntityId;
use crate::shared::money::{from_cents, to_cents};
use crate::shared::RuleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    #[default]
    #[serde(alias = "BORRADOR")]
    Draft,
    #[serde(alias = "CONFIRMADO")]
    Confirmed,
    #[serde(alias = "ENTREGADO", alias = "COMPLETADO")]
    Fulfilled,
    #[serde(alias = "ANULADO", alias = "CANCELADO")]
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Draft,
        OrderStatus::Confirmed,
        OrderStatus::Fulfilled,
        OrderStatus::Cancelled,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Draft => "DRAFT",
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::Fulfilled => "FULFILLED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Draft => "Borrador",
            OrderStatus::Confirmed => "Confirmado",
            OrderStatus::Fulfilled => "Entregado",
            OrderStatus::Cancelled => "Anulado",
        }
    }

    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Draft, OrderStatus::Confirmed)
                | (OrderStatus::Confirmed, OrderStatus::Fulfilled)
                | (OrderStatus::Draft, OrderStatus::Cancelled)
                | (OrderStatus::Confirmed, OrderStatus::Cancelled)
        )
    }

    /// Статусы, в которые можно перейти из текущего
    pub fn next_statuses(&self) -> Vec<OrderStatus> {
        Self::ALL
            .into_iter()
            .filter(|s| self.can_transition_to(*s))
            .collect()
    }

    pub fn accepts_payments(&self) -> bool {
        matches!(self, OrderStatus::Draft | OrderStatus::Confirmed)
    }

    pub fn items_editable(&self) -> bool {
        matches!(self, OrderStatus::Draft)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(alias = "presentacionId", alias = "presentationId")]
    pub presentation_id: EntityId,
    #[serde(default, alias = "descripcion")]
    pub description: String,
    #[serde(alias = "cantidad")]
    pub quantity: f64,
    #[serde(alias = "precioUnitario", alias = "unitPrice", alias = "precio")]
    pub unit_price: f64,
}

impl OrderItem {
    pub fn line_total(&self) -> f64 {
        from_cents(to_cents(self.quantity * self.unit_price))
    }

    pub fn validate(&self) -> Result<(), RuleError> {
        if !self.quantity.is_finite() || self.quantity <= 0.0 {
            return Err(RuleError::field(
                "cantidad",
                format!("debe ser mayor que cero ({})", self.description),
            ));
        }
        if !self.unit_price.is_finite() || self.unit_price < 0.0 {
            return Err(RuleError::field(
                "precio",
                format!("no puede ser negativo ({})", self.description),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderPaymentKind {
    #[default]
    #[serde(alias = "PAGO")]
    Payment,
    #[serde(alias = "DEVOLUCION")]
    Refund,
}

impl OrderPaymentKind {
    pub fn label(&self) -> &'static str {
        match self {
            OrderPaymentKind::Payment => "Pago",
            OrderPaymentKind::Refund => "Devolución",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPayment {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(alias = "tipo")]
    pub kind: OrderPaymentKind,
    #[serde(alias = "monto")]
    pub amount: f64,
    #[serde(default, alias = "metodoPagoId", alias = "paymentMethodId")]
    pub payment_method_id: Option<EntityId>,
    #[serde(default, alias = "fecha", alias = "createdAt")]
    pub created_at: String,
    #[serde(default, alias = "nota")]
    pub note: Option<String>,
}

/// Заказ клиента или поставщика: `party_*` указывает на контрагента
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: EntityId,
    #[serde(alias = "numero")]
    pub number: String,
    #[serde(alias = "clientId", alias = "supplierId", alias = "clienteId", alias = "proveedorId")]
    pub party_id: EntityId,
    #[serde(default, alias = "clientName", alias = "supplierName", alias = "cliente", alias = "proveedor")]
    pub party_name: String,
    #[serde(default, alias = "detalles")]
    pub items: Vec<OrderItem>,
    #[serde(default, alias = "pagos")]
    pub payments: Vec<OrderPayment>,
    #[serde(alias = "estado")]
    pub status: OrderStatus,
    #[serde(default)]
    pub total: f64,
    #[serde(alias = "fecha", alias = "createdAt")]
    pub created_at: String,
    #[serde(default, alias = "fechaEntrega", alias = "expectedDate")]
    pub expected_date: Option<String>,
    #[serde(default, alias = "observaciones")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrderBalance {
    pub total: f64,
    pub paid: f64,
    pub refunded: f64,
    pub net_paid: f64,
    pub balance: f64,
}

pub fn items_total(items: &[OrderItem]) -> f64 {
    from_cents(items.iter().map(|i| to_cents(i.line_total())).sum())
}

pub fn balance_of(items: &[OrderItem], payments: &[OrderPayment]) -> OrderBalance {
    let total = to_cents(items_total(items));
    let of_kind = |kind: OrderPaymentKind| -> i64 {
        payments
            .iter()
            .filter(|p| p.kind == kind)
            .map(|p| to_cents(p.amount))
            .sum()
    };
    let paid = of_kind(OrderPaymentKind::Payment);
    let refunded = of_kind(OrderPaymentKind::Refund);
    let net = paid - refunded;
    OrderBalance {
        total: from_cents(total),
        paid: from_cents(paid),
        refunded: from_cents(refunded),
        net_paid: from_cents(net),
        balance: from_cents(total - net),
    }
}

impl Order {
    pub fn balance(&self) -> OrderBalance {
        balance_of(&self.items, &self.payments)
    }

    pub fn validate_transition(&self, next: OrderStatus) -> Result<(), RuleError> {
        if !self.status.can_transition_to(next) {
            return Err(RuleError::InvalidTransition {
                from: self.status.label().to_string(),
                to: next.label().to_string(),
            });
        }
        if next == OrderStatus::Fulfilled && to_cents(self.balance().balance) != 0 {
            return Err(RuleError::rule(format!(
                "El pedido tiene un saldo pendiente de {:.2}",
                self.balance().balance
            )));
        }
        Ok(())
    }

    pub fn validate_payment(&self, dto: &OrderPaymentDto) -> Result<(), RuleError> {
        if !dto.amount.is_finite() || dto.amount <= 0.0 {
            return Err(RuleError::field("monto", "debe ser mayor que cero"));
        }
        let b = self.balance();
        match dto.kind {
            OrderPaymentKind::Payment => {
                if !self.status.accepts_payments() {
                    return Err(RuleError::rule(format!(
                        "No se admiten pagos en un pedido {}",
                        self.status.label().to_lowercase()
                    )));
                }
                if to_cents(dto.amount) > to_cents(b.balance) {
                    return Err(RuleError::field(
                        "monto",
                        format!("supera el saldo pendiente ({:.2})", b.balance),
                    ));
                }
            }
            OrderPaymentKind::Refund => {
                if self.status == OrderStatus::Fulfilled {
                    return Err(RuleError::rule(
                        "No se admiten devoluciones en un pedido entregado",
                    ));
                }
                if to_cents(dto.amount) > to_cents(b.net_paid) {
                    return Err(RuleError::field(
                        "monto",
                        format!("supera lo pagado ({:.2})", b.net_paid),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Тело `POST /<orders>` и `PUT /<orders>/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderDto {
    #[serde(skip_serializing)]
    pub id: Option<EntityId>,
    pub party_id: Option<EntityId>,
    pub items: Vec<OrderItem>,
    pub expected_date: Option<String>,
    pub notes: Option<String>,
}

impl OrderDto {
    pub fn from_order(order: &Order) -> Self {
        Self {
            id: Some(order.id),
            party_id: Some(order.party_id),
            items: order.items.clone(),
            expected_date: order.expected_date.clone(),
            notes: order.notes.clone(),
        }
    }

    pub fn total(&self) -> f64 {
        items_total(&self.items)
    }

    pub fn validate(&self, party_label: &'static str) -> Result<(), RuleError> {
        if self.party_id.is_none() {
            return Err(RuleError::field(party_label, "es obligatorio"));
        }
        if self.items.is_empty() {
            return Err(RuleError::rule("Agregue al menos un producto"));
        }
        for item in &self.items {
            item.validate()?;
        }
        crate::shared::validation::validate_optional_text(
            "observaciones",
            self.notes.as_deref().unwrap_or(""),
            250,
        )
    }
}

/// Тело `POST /<orders>/{id}/payments`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPaymentDto {
    pub kind: OrderPaymentKind,
    pub amount: f64,
    pub payment_method_id: Option<EntityId>,
    pub note: Option<String>,
}

/// Тело `PATCH /<orders>/{id}/status`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderStatusDto {
    pub status: OrderStatus,
}

/// Вид заказа: клиентский или поставщику
pub trait OrderKind {
    /// Путь ресурса на backend, например `/client-orders`
    const RESOURCE: &'static str;
    /// Подпись контрагента в формах
    const PARTY_LABEL: &'static str;
    const TITLE: &'static str;

    fn status_url(id: EntityId) -> String {
        format!("{}/{}/status", Self::RESOURCE, id)
    }

    fn payments_url(id: EntityId) -> String {
        format!("{}/{}/payments", Self::RESOURCE, id)
    }

    fn item_url(id: EntityId) -> String {
        format!("{}/{}", Self::RESOURCE, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: f64, unit_price: f64) -> OrderItem {
        OrderItem {
            presentation_id: 1,
            description: "Arroz 5 kg".into(),
            quantity,
            unit_price,
        }
    }

    fn payment(kind: OrderPaymentKind, amount: f64) -> OrderPayment {
        OrderPayment {
            id: None,
            kind,
            amount,
            payment_method_id: Some(1),
            created_at: String::new(),
            note: None,
        }
    }

    fn order(status: OrderStatus, payments: Vec<OrderPayment>) -> Order {
        Order {
            id: 1,
            number: "PC-0001".into(),
            party_id: 3,
            party_name: "Bodega Sur".into(),
            items: vec![item(3.0, 10.5), item(1.0, 0.1)],
            payments,
            status,
            total: 0.0,
            created_at: "2024-05-01".into(),
            expected_date: None,
            notes: None,
        }
    }

    fn pay_dto(kind: OrderPaymentKind, amount: f64) -> OrderPaymentDto {
        OrderPaymentDto {
            kind,
            amount,
            payment_method_id: Some(1),
            note: None,
        }
    }

    #[test]
    fn test_transitions() {
        use OrderStatus::*;
        assert!(Draft.can_transition_to(Confirmed));
        assert!(Confirmed.can_transition_to(Fulfilled));
        assert!(Draft.can_transition_to(Cancelled));
        assert!(Confirmed.can_transition_to(Cancelled));
        assert!(!Draft.can_transition_to(Fulfilled));
        assert!(!Fulfilled.can_transition_to(Cancelled));
        assert!(!Cancelled.can_transition_to(Draft));
        assert_eq!(Draft.next_statuses(), vec![Confirmed, Cancelled]);
        assert!(Fulfilled.next_statuses().is_empty());
    }

    #[test]
    fn test_balance() {
        let o = order(
            OrderStatus::Confirmed,
            vec![
                payment(OrderPaymentKind::Payment, 20.0),
                payment(OrderPaymentKind::Refund, 5.0),
            ],
        );
        let b = o.balance();
        assert_eq!(b.total, 31.6);
        assert_eq!(b.net_paid, 15.0);
        assert_eq!(b.balance, 16.6);
    }

    #[test]
    fn test_payment_limited_by_balance() {
        let o = order(OrderStatus::Draft, vec![payment(OrderPaymentKind::Payment, 30.0)]);
        assert!(o.validate_payment(&pay_dto(OrderPaymentKind::Payment, 1.6)).is_ok());
        assert!(o.validate_payment(&pay_dto(OrderPaymentKind::Payment, 1.61)).is_err());
        assert!(o.validate_payment(&pay_dto(OrderPaymentKind::Payment, 0.0)).is_err());
    }

    #[test]
    fn test_refund_limited_by_net_paid() {
        let o = order(OrderStatus::Cancelled, vec![payment(OrderPaymentKind::Payment, 10.0)]);
        assert!(o.validate_payment(&pay_dto(OrderPaymentKind::Refund, 10.0)).is_ok());
        assert!(o.validate_payment(&pay_dto(OrderPaymentKind::Refund, 10.01)).is_err());
        assert!(o.validate_payment(&pay_dto(OrderPaymentKind::Payment, 1.0)).is_err());
    }

    #[test]
    fn test_fulfill_requires_zero_balance() {
        let mut o = order(OrderStatus::Confirmed, vec![payment(OrderPaymentKind::Payment, 31.0)]);
        assert!(o.validate_transition(OrderStatus::Fulfilled).is_err());
        o.payments.push(payment(OrderPaymentKind::Payment, 0.6));
        assert!(o.validate_transition(OrderStatus::Fulfilled).is_ok());
        let draft = order(OrderStatus::Draft, vec![]);
        assert_eq!(
            draft.validate_transition(OrderStatus::Fulfilled).unwrap_err(),
            RuleError::InvalidTransition {
                from: "Borrador".into(),
                to: "Entregado".into()
            }
        );
    }

    #[test]
    fn test_dto_validation() {
        let mut dto = OrderDto::default();
        assert!(dto.validate("cliente").is_err());
        dto.party_id = Some(1);
        assert!(dto.validate("cliente").is_err());
        dto.items.push(item(0.0, 1.0));
        assert!(dto.validate("cliente").is_err());
        dto.items[0].quantity = 2.0;
        assert!(dto.validate("cliente").is_ok());
        assert_eq!(dto.total(), 2.0);
    }

    #[test]
    fn test_deserialize_spanish_fields() {
        let json = r#"{"id":7,"numero":"PC-7","clienteId":2,"cliente":"Ana","estado":"CONFIRMADO",
            "fecha":"2024-05-02","detalles":[{"presentacionId":1,"cantidad":2,"precio":1.5}],
            "pagos":[{"tipo":"PAGO","monto":1.0}]}"#;
        let o: Order = serde_json::from_str(json).unwrap();
        assert_eq!(o.status, OrderStatus::Confirmed);
        assert_eq!(o.party_name, "Ana");
        assert_eq!(o.balance().balance, 2.0);
    }
}
