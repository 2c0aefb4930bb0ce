//! Kardex: хронологический журнал движений одной презентации со
//! средневзвешенной себестоимостью.
//!
//! Приход увеличивает количество и стоимость и пересчитывает среднюю цену.
//! Расход списывается по текущей средней цене. Backend отдаёт «сырые»
//! движения, строки журнала считаются на клиенте.

use serde::{Deserialize, Serialize};

use super::adjustment::AdjustmentKind;
use crate::shared::money::{from_cents, round2, to_cents};

/// Сырое движение из `GET /inventory/kardex/{presentation_id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KardexMovement {
    #[serde(alias = "fecha")]
    pub date: String,
    #[serde(alias = "tipo")]
    pub kind: AdjustmentKind,
    /// Документ-основание: "VENTA V-00012", "AJUSTE", "PEDIDO P-0003"
    #[serde(default, alias = "documento")]
    pub document: String,
    #[serde(alias = "cantidad")]
    pub quantity: f64,
    #[serde(default, alias = "costoUnitario", alias = "unitCost")]
    pub unit_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KardexRow {
    pub date: String,
    pub document: String,
    pub kind: AdjustmentKind,
    pub in_quantity: f64,
    pub in_unit_cost: f64,
    pub in_total: f64,
    pub out_quantity: f64,
    pub out_unit_cost: f64,
    pub out_total: f64,
    pub balance_quantity: f64,
    pub balance_unit_cost: f64,
    pub balance_total: f64,
    /// Расход больше остатка на момент движения
    pub overdrawn: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KardexTotals {
    pub in_quantity: f64,
    pub in_total: f64,
    pub out_quantity: f64,
    pub out_total: f64,
}

/// Строит журнал в порядке, в котором движения пришли от backend
/// (уже хронологическом); формат даты не разбирается.
pub fn build_kardex(movements: &[KardexMovement]) -> Vec<KardexRow> {
    let mut balance_qty = 0.0_f64;
    let mut balance_value_cents = 0_i64;
    let mut rows = Vec::with_capacity(movements.len());

    for mv in movements {
        let avg_before = average(balance_qty, balance_value_cents);
        let mut row = KardexRow {
            date: mv.date.clone(),
            document: mv.document.clone(),
            kind: mv.kind,
            in_quantity: 0.0,
            in_unit_cost: 0.0,
            in_total: 0.0,
            out_quantity: 0.0,
            out_unit_cost: 0.0,
            out_total: 0.0,
            balance_quantity: 0.0,
            balance_unit_cost: 0.0,
            balance_total: 0.0,
            overdrawn: false,
        };

        match mv.kind {
            AdjustmentKind::Entry => {
                let total_cents = to_cents(mv.quantity * mv.unit_cost);
                row.in_quantity = mv.quantity;
                row.in_unit_cost = mv.unit_cost;
                row.in_total = from_cents(total_cents);
                balance_qty += mv.quantity;
                balance_value_cents += total_cents;
            }
            AdjustmentKind::Exit => {
                row.overdrawn = mv.quantity > balance_qty + f64::EPSILON;
                // Полный (или сверх остатка) расход списывает всю стоимость, без хвоста в центах
                let total_cents = if mv.quantity >= balance_qty {
                    balance_value_cents
                } else {
                    to_cents(mv.quantity * avg_before)
                };
                row.out_quantity = mv.quantity;
                row.out_unit_cost = round2(avg_before);
                row.out_total = from_cents(total_cents);
                balance_qty -= mv.quantity;
                balance_value_cents -= total_cents;
            }
        }

        row.balance_quantity = balance_qty;
        row.balance_total = from_cents(balance_value_cents);
        row.balance_unit_cost = round2(average(balance_qty, balance_value_cents));
        rows.push(row);
    }

    rows
}

fn average(quantity: f64, value_cents: i64) -> f64 {
    if quantity <= 0.0 {
        0.0
    } else {
        from_cents(value_cents) / quantity
    }
}

pub fn totals(rows: &[KardexRow]) -> KardexTotals {
    rows.iter().fold(KardexTotals::default(), |mut acc, r| {
        acc.in_quantity += r.in_quantity;
        acc.in_total = from_cents(to_cents(acc.in_total) + to_cents(r.in_total));
        acc.out_quantity += r.out_quantity;
        acc.out_total = from_cents(to_cents(acc.out_total) + to_cents(r.out_total));
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(date: &str, kind: AdjustmentKind, quantity: f64, unit_cost: f64) -> KardexMovement {
        KardexMovement {
            date: date.into(),
            kind,
            document: String::new(),
            quantity,
            unit_cost,
        }
    }

    #[test]
    fn test_weighted_average_cost() {
        let rows = build_kardex(&[
            mv("2024-05-01", AdjustmentKind::Entry, 10.0, 2.0),
            mv("2024-05-02", AdjustmentKind::Entry, 10.0, 3.0),
            mv("2024-05-03", AdjustmentKind::Exit, 5.0, 0.0),
        ]);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].balance_quantity, 20.0);
        assert_eq!(rows[1].balance_total, 50.0);
        assert_eq!(rows[1].balance_unit_cost, 2.5);

        assert_eq!(rows[2].out_unit_cost, 2.5);
        assert_eq!(rows[2].out_total, 12.5);
        assert_eq!(rows[2].balance_quantity, 15.0);
        assert_eq!(rows[2].balance_total, 37.5);
        assert!(!rows[2].overdrawn);
    }

    #[test]
    fn test_keeps_backend_order() {
        let rows = build_kardex(&[
            mv("10/04/2024 08:00", AdjustmentKind::Entry, 5.0, 1.0),
            mv("02/05/2024 09:00", AdjustmentKind::Exit, 3.0, 0.0),
        ]);
        assert_eq!(rows[0].date, "10/04/2024 08:00");
        assert_eq!(rows[1].date, "02/05/2024 09:00");
        assert!(rows.iter().all(|r| !r.overdrawn));
        assert_eq!(rows[1].balance_quantity, 2.0);
        assert_eq!(rows[1].balance_total, 2.0);
    }

    #[test]
    fn test_full_exit_clears_value() {
        let rows = build_kardex(&[
            mv("2024-05-01", AdjustmentKind::Entry, 3.0, 1.0),
            mv("2024-05-02", AdjustmentKind::Entry, 3.0, 1.01),
            mv("2024-05-03", AdjustmentKind::Exit, 6.0, 0.0),
        ]);
        let last = rows.last().unwrap();
        assert_eq!(last.balance_quantity, 0.0);
        assert_eq!(last.balance_total, 0.0);
        assert_eq!(last.out_total, 6.03);
    }

    #[test]
    fn test_overdrawn_exit_is_flagged() {
        let rows = build_kardex(&[
            mv("2024-05-01", AdjustmentKind::Entry, 2.0, 1.0),
            mv("2024-05-02", AdjustmentKind::Exit, 3.0, 0.0),
        ]);
        assert!(rows[1].overdrawn);
        assert_eq!(rows[1].balance_quantity, -1.0);
        assert_eq!(rows[1].balance_unit_cost, 0.0);
    }

    #[test]
    fn test_totals() {
        let rows = build_kardex(&[
            mv("2024-05-01", AdjustmentKind::Entry, 10.0, 2.0),
            mv("2024-05-02", AdjustmentKind::Exit, 4.0, 0.0),
        ]);
        let t = totals(&rows);
        assert_eq!(t.in_quantity, 10.0);
        assert_eq!(t.in_total, 20.0);
        assert_eq!(t.out_quantity, 4.0);
        assert_eq!(t.out_total, 8.0);
    }
}
