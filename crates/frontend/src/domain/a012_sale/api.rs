use contracts::domain::a005_payment_method::PaymentMethod;
use contracts::domain::a012_sale::{NewSaleDto, Sale, SalePayment};
use contracts::domain::common::EntityId;
use contracts::shared::money::{from_cents, to_cents};

use crate::shared::api_error::ApiError;
use crate::shared::http;

const BASE: &str = "/sales";

pub async fn fetch_sales() -> Result<Vec<Sale>, ApiError> {
    http::get_json(BASE).await
}

pub async fn create_sale(dto: &NewSaleDto) -> Result<Sale, ApiError> {
    http::post_json(BASE, dto).await
}

pub async fn void_sale(id: EntityId) -> Result<(), ApiError> {
    http::patch_empty(&format!("{}/{}/void", BASE, id)).await
}

/// Сумма по методу оплаты: 0 удаляет платёж, иначе заменяет или добавляет
pub fn set_payment(payments: &mut Vec<SalePayment>, method: &PaymentMethod, amount: f64) {
    payments.retain(|p| p.payment_method_id != method.id);
    if to_cents(amount) > 0 {
        payments.push(SalePayment {
            payment_method_id: method.id,
            method_name: method.name.clone(),
            amount,
            is_cash: method.is_cash,
        });
    }
}

pub fn payment_amount(payments: &[SalePayment], method_id: EntityId) -> f64 {
    payments
        .iter()
        .find(|p| p.payment_method_id == method_id)
        .map(|p| p.amount)
        .unwrap_or(0.0)
}

/// «Exacto»: наличными столько, чтобы закрыть остаток после безналичных
pub fn exact_cash(dto: &mut NewSaleDto, cash_method: &PaymentMethod) {
    let totals = dto.totals();
    let due = (to_cents(totals.total) - to_cents(totals.non_cash_paid)).max(0);
    set_payment(&mut dto.payments, cash_method, from_cents(due));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn method(id: EntityId, is_cash: bool) -> PaymentMethod {
        PaymentMethod {
            id,
            name: if is_cash { "Efectivo" } else { "Yape" }.into(),
            is_cash,
            active: true,
        }
    }

    #[test]
    fn test_set_payment_replaces_and_removes() {
        let mut payments = Vec::new();
        set_payment(&mut payments, &method(1, true), 10.0);
        set_payment(&mut payments, &method(1, true), 12.5);
        assert_eq!(payments.len(), 1);
        assert_eq!(payment_amount(&payments, 1), 12.5);
        set_payment(&mut payments, &method(1, true), 0.0);
        assert!(payments.is_empty());
    }

    #[test]
    fn test_exact_cash_covers_remaining() {
        let mut dto = NewSaleDto::default();
        dto.add_item(1, "Arroz 1 kg", 4.2);
        dto.add_item(2, "Aceite", 10.0);
        set_payment(&mut dto.payments, &method(2, false), 5.0);
        exact_cash(&mut dto, &method(1, true));
        assert_eq!(payment_amount(&dto.payments, 1), 9.2);
        let totals = dto.totals();
        assert_eq!(totals.pending, 0.0);
        assert_eq!(totals.change, 0.0);
    }
}
