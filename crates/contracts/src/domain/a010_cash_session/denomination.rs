//! Подсчёт наличных по номиналам при закрытии кассы

use serde::{Deserialize, Serialize};

use crate::shared::money::{from_cents, to_cents};

/// Номиналы в центах: купюры 200..10, монеты 5..0.10
pub const DENOMINATIONS: [i64; 11] = [20000, 10000, 5000, 2000, 1000, 500, 200, 100, 50, 20, 10];

/// Номиналы от 10 и выше - купюры
pub fn is_bill(value_cents: i64) -> bool {
    value_cents >= 1000
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DenominationCount {
    /// Номинал в денежных единицах (0.5, 20.0 ...)
    pub value: f64,
    pub quantity: u32,
}

impl DenominationCount {
    pub fn subtotal_cents(&self) -> i64 {
        to_cents(self.value) * self.quantity as i64
    }

    pub fn subtotal(&self) -> f64 {
        from_cents(self.subtotal_cents())
    }
}

/// Пустая таблица подсчёта (все номиналы, количество 0)
pub fn empty_count() -> Vec<DenominationCount> {
    DENOMINATIONS
        .iter()
        .map(|&cents| DenominationCount {
            value: from_cents(cents),
            quantity: 0,
        })
        .collect()
}

pub fn counted_total(counts: &[DenominationCount]) -> f64 {
    from_cents(counts.iter().map(DenominationCount::subtotal_cents).sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_count_covers_all_denominations() {
        let counts = empty_count();
        assert_eq!(counts.len(), DENOMINATIONS.len());
        assert_eq!(counts[0].value, 200.0);
        assert_eq!(counts[10].value, 0.1);
        assert_eq!(counted_total(&counts), 0.0);
    }

    #[test]
    fn test_counted_total_is_exact() {
        let counts = vec![
            DenominationCount { value: 100.0, quantity: 2 },
            DenominationCount { value: 0.1, quantity: 3 },
            DenominationCount { value: 0.2, quantity: 1 },
            DenominationCount { value: 0.5, quantity: 1 },
        ];
        assert_eq!(counted_total(&counts), 201.0);
    }

    #[test]
    fn test_bill_or_coin() {
        assert!(is_bill(1000));
        assert!(!is_bill(500));
    }
}
