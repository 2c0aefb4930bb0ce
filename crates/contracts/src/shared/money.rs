//! Денежная арифметика в целых центах.
//!
//! Backend отдаёт суммы как `f64`; все сравнения и суммирования на клиенте
//! идут через центы, чтобы 0.1 + 0.2 не ломало арифметику кассы.

/// Сумма → центы (с округлением половины от нуля)
pub fn to_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

/// Центы → сумма
pub fn from_cents(cents: i64) -> f64 {
    cents as f64 / 100.0
}

/// Округление до 2 знаков
pub fn round2(amount: f64) -> f64 {
    from_cents(to_cents(amount))
}

/// Сумма списка значений без накопления ошибки округления
pub fn sum<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    from_cents(values.into_iter().map(to_cents).sum())
}

/// Равенство сумм с допуском `tolerance` (в денежных единицах).
pub fn within_tolerance(a: f64, b: f64, tolerance: f64) -> bool {
    (to_cents(a) - to_cents(b)).abs() <= to_cents(tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cents_roundtrip_rounding() {
        assert_eq!(to_cents(0.1 + 0.2), 30);
        assert_eq!(to_cents(10.005), 1001);
        assert_eq!(to_cents(-1.25), -125);
        assert_eq!(round2(2.345678), 2.35);
    }

    #[test]
    fn test_sum_is_exact_in_cents() {
        assert_eq!(sum(vec![0.1; 10]), 1.0);
        assert_eq!(sum(Vec::<f64>::new()), 0.0);
    }

    #[test]
    fn test_within_tolerance() {
        assert!(within_tolerance(100.0, 100.01, 0.01));
        assert!(within_tolerance(100.0, 99.99, 0.01));
        assert!(!within_tolerance(100.0, 100.02, 0.01));
        assert!(within_tolerance(50.0, 50.0, 0.0));
    }
}
