use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::common::EntityId;
use crate::shared::money::{from_cents, to_cents};

/// Query of `GET /reports/sales?from&to`, dates as "YYYY-MM-DD"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesReportRequest {
    pub from: String,
    pub to: String,
}

/// Одна строка отчёта: позиция проданного товара
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesReportRow {
    #[serde(alias = "ventaId", alias = "saleId")]
    pub sale_id: EntityId,
    #[serde(alias = "numero", alias = "saleNumber")]
    pub sale_number: String,
    #[serde(alias = "fecha")]
    pub date: String,
    #[serde(alias = "presentacionId", alias = "presentationId")]
    pub presentation_id: EntityId,
    #[serde(alias = "producto", alias = "productName")]
    pub product_name: String,
    #[serde(alias = "cantidad")]
    pub quantity: f64,
    #[serde(alias = "importe")]
    pub amount: f64,
    /// Способ оплаты всей продажи
    #[serde(alias = "metodoPago", alias = "paymentMethod")]
    pub payment_method: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SalesReportTotals {
    pub sales_count: usize,
    pub units: f64,
    pub amount: f64,
    /// Средний чек
    pub average_ticket: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodBreakdown {
    pub method: String,
    pub amount: f64,
    /// Доля в процентах от общей суммы
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopProduct {
    pub presentation_id: EntityId,
    pub product_name: String,
    pub quantity: f64,
    pub amount: f64,
}

pub fn report_totals(rows: &[SalesReportRow]) -> SalesReportTotals {
    let mut sales: Vec<EntityId> = rows.iter().map(|r| r.sale_id).collect();
    sales.sort_unstable();
    sales.dedup();

    let amount: i64 = rows.iter().map(|r| to_cents(r.amount)).sum();
    let units = rows.iter().map(|r| r.quantity).sum();
    let average = if sales.is_empty() {
        0
    } else {
        (amount as f64 / sales.len() as f64).round() as i64
    };
    SalesReportTotals {
        sales_count: sales.len(),
        units,
        amount: from_cents(amount),
        average_ticket: from_cents(average),
    }
}

/// Разбивка по способам оплаты, по убыванию суммы
pub fn by_payment_method(rows: &[SalesReportRow]) -> Vec<MethodBreakdown> {
    let mut acc: BTreeMap<&str, i64> = BTreeMap::new();
    for row in rows {
        *acc.entry(row.payment_method.as_str()).or_default() += to_cents(row.amount);
    }
    let total: i64 = acc.values().sum();
    let mut out: Vec<MethodBreakdown> = acc
        .into_iter()
        .map(|(method, cents)| MethodBreakdown {
            method: method.to_string(),
            amount: from_cents(cents),
            share: if total == 0 {
                0.0
            } else {
                (cents as f64 * 10000.0 / total as f64).round() / 100.0
            },
        })
        .collect();
    out.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    out
}

/// Топ товаров по сумме продаж
pub fn top_products(rows: &[SalesReportRow], limit: usize) -> Vec<TopProduct> {
    let mut acc: BTreeMap<EntityId, TopProduct> = BTreeMap::new();
    for row in rows {
        let entry = acc.entry(row.presentation_id).or_insert_with(|| TopProduct {
            presentation_id: row.presentation_id,
            product_name: row.product_name.clone(),
            quantity: 0.0,
            amount: 0.0,
        });
        entry.quantity += row.quantity;
        entry.amount = from_cents(to_cents(entry.amount) + to_cents(row.amount));
    }
    let mut out: Vec<TopProduct> = acc.into_values().collect();
    out.sort_by(|a, b| {
        b.amount
            .total_cmp(&a.amount)
            .then_with(|| a.product_name.cmp(&b.product_name))
    });
    out.truncate(limit);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(sale_id: EntityId, pres: EntityId, name: &str, qty: f64, amount: f64, method: &str) -> SalesReportRow {
        SalesReportRow {
            sale_id,
            sale_number: format!("V-{sale_id}"),
            date: "2024-05-01".into(),
            presentation_id: pres,
            product_name: name.into(),
            quantity: qty,
            amount,
            payment_method: method.into(),
        }
    }

    fn sample() -> Vec<SalesReportRow> {
        vec![
            row(1, 10, "Leche", 2.0, 8.0, "Efectivo"),
            row(1, 11, "Pan", 5.0, 2.5, "Efectivo"),
            row(2, 10, "Leche", 1.0, 4.0, "Tarjeta"),
            row(3, 12, "Café", 1.0, 25.5, "Yape"),
        ]
    }

    #[test]
    fn test_totals() {
        let t = report_totals(&sample());
        assert_eq!(t.sales_count, 3);
        assert_eq!(t.units, 9.0);
        assert_eq!(t.amount, 40.0);
        assert_eq!(t.average_ticket, 13.33);
    }

    #[test]
    fn test_totals_empty() {
        assert_eq!(report_totals(&[]), SalesReportTotals::default());
    }

    #[test]
    fn test_by_payment_method() {
        let b = by_payment_method(&sample());
        assert_eq!(b[0].method, "Yape");
        assert_eq!(b[0].share, 63.75);
        assert_eq!(b[1].method, "Efectivo");
        assert_eq!(b[1].amount, 10.5);
        assert_eq!(b.len(), 3);
    }

    #[test]
    fn test_top_products() {
        let top = top_products(&sample(), 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].product_name, "Café");
        assert_eq!(top[1].product_name, "Leche");
        assert_eq!(top[1].quantity, 3.0);
        assert_eq!(top[1].amount, 12.0);
    }
}
