//! Сверка кассы при закрытии.
//!
//! Ожидаемая сумма = начальная + продажи наличными + приходы − расходы − возвраты наличными.
//! Закрыть смену можно только если подсчитанная сумма совпадает с ожидаемой
//! в пределах допуска (по умолчанию 1 цент).

use serde::{Deserialize, Serialize};

use super::aggregate::{Movement, MovementKind};
use crate::shared::money::{from_cents, sum, to_cents, within_tolerance};
use crate::shared::RuleError;

pub const DEFAULT_TOLERANCE: f64 = 0.01;

/// Сводка смены (`GET /cash-sessions/{id}/summary`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CashSummary {
    #[serde(alias = "montoInicial", alias = "openingAmount")]
    pub opening_amount: f64,
    #[serde(default, alias = "ventasEfectivo", alias = "cashSales")]
    pub cash_sales: f64,
    #[serde(default, alias = "ingresos")]
    pub incomes: f64,
    #[serde(default, alias = "egresos")]
    pub expenses: f64,
    #[serde(default, alias = "devolucionesEfectivo", alias = "cashRefunds")]
    pub cash_refunds: f64,
    #[serde(default, alias = "ventasPorMetodo", alias = "salesByMethod")]
    pub sales_by_method: Vec<MethodTotal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodTotal {
    #[serde(alias = "metodo")]
    pub method: String,
    #[serde(alias = "total")]
    pub amount: f64,
}

impl CashSummary {
    pub fn expected_cash(&self) -> f64 {
        from_cents(
            to_cents(self.opening_amount) + to_cents(self.cash_sales) + to_cents(self.incomes)
                - to_cents(self.expenses)
                - to_cents(self.cash_refunds),
        )
    }

    pub fn total_sales(&self) -> f64 {
        sum(self.sales_by_method.iter().map(|m| m.amount))
    }

    /// Пересчитать приходы/расходы по списку движений (после добавления нового)
    pub fn with_movements(mut self, movements: &[Movement]) -> Self {
        self.incomes = sum(movements
            .iter()
            .filter(|m| m.kind == MovementKind::Income)
            .map(|m| m.amount));
        self.expenses = sum(movements
            .iter()
            .filter(|m| m.kind == MovementKind::Expense)
            .map(|m| m.amount));
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reconciliation {
    pub expected: f64,
    pub counted: f64,
    pub tolerance: f64,
}

impl Reconciliation {
    pub fn new(expected: f64, counted: f64, tolerance: f64) -> Self {
        Self {
            expected,
            counted,
            tolerance,
        }
    }

    /// counted − expected: >0 излишек (sobrante), <0 недостача (faltante)
    pub fn difference(&self) -> f64 {
        from_cents(to_cents(self.counted) - to_cents(self.expected))
    }

    pub fn is_balanced(&self) -> bool {
        within_tolerance(self.counted, self.expected, self.tolerance)
    }

    pub fn label(&self) -> &'static str {
        if self.is_balanced() {
            "Cuadrado"
        } else if self.difference() > 0.0 {
            "Sobrante"
        } else {
            "Faltante"
        }
    }

    pub fn check(&self) -> Result<(), RuleError> {
        if self.is_balanced() {
            Ok(())
        } else {
            Err(RuleError::CashMismatch {
                counted: self.counted,
                expected: self.expected,
                difference: self.difference(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> CashSummary {
        CashSummary {
            opening_amount: 100.0,
            cash_sales: 250.3,
            incomes: 20.0,
            expenses: 35.1,
            cash_refunds: 5.2,
            sales_by_method: vec![
                MethodTotal { method: "Efectivo".into(), amount: 250.3 },
                MethodTotal { method: "Yape".into(), amount: 80.0 },
            ],
        }
    }

    #[test]
    fn test_expected_cash() {
        assert_eq!(summary().expected_cash(), 330.0);
        assert_eq!(summary().total_sales(), 330.3);
    }

    #[test]
    fn test_reconciliation_within_one_cent() {
        let r = Reconciliation::new(330.0, 330.01, DEFAULT_TOLERANCE);
        assert!(r.is_balanced());
        assert!(r.check().is_ok());
        assert_eq!(r.label(), "Cuadrado");
    }

    #[test]
    fn test_reconciliation_shortage_and_surplus() {
        let short = Reconciliation::new(330.0, 329.5, DEFAULT_TOLERANCE);
        assert_eq!(short.difference(), -0.5);
        assert_eq!(short.label(), "Faltante");
        assert!(matches!(short.check(), Err(RuleError::CashMismatch { .. })));

        let surplus = Reconciliation::new(330.0, 331.0, DEFAULT_TOLERANCE);
        assert_eq!(surplus.label(), "Sobrante");
    }

    #[test]
    fn test_with_movements_recomputes_totals() {
        let mv = |id, kind, amount| Movement {
            id,
            session_id: 1,
            kind,
            amount,
            concept: "x".into(),
            created_at: String::new(),
        };
        let s = summary().with_movements(&[
            mv(1, MovementKind::Income, 10.0),
            mv(2, MovementKind::Expense, 4.5),
            mv(3, MovementKind::Income, 0.25),
        ]);
        assert_eq!(s.incomes, 10.25);
        assert_eq!(s.expenses, 4.5);
    }
}
