use crate::domain::a009_presentation::Presentation;
use crate::domain::common::EntityId;

/// Строка отчёта «Stock bajo»
#[derive(Debug, Clone, PartialEq)]
pub struct LowStockRow {
    pub presentation_id: EntityId,
    pub name: String,
    pub stock: f64,
    pub min_stock: f64,
    /// Сколько не хватает до минимального запаса
    pub shortage: f64,
}

/// Активные презентации со stock ≤ min_stock, сначала с наибольшей нехваткой
pub fn low_stock_rows(presentations: &[Presentation]) -> Vec<LowStockRow> {
    let mut rows: Vec<LowStockRow> = presentations
        .iter()
        .filter(|p| p.active && p.is_low_stock())
        .map(|p| LowStockRow {
            presentation_id: p.id,
            name: p.full_name(),
            stock: p.stock,
            min_stock: p.min_stock,
            shortage: (p.min_stock - p.stock).max(0.0),
        })
        .collect();
    rows.sort_by(|a, b| {
        b.shortage
            .total_cmp(&a.shortage)
            .then_with(|| a.name.cmp(&b.name))
    });
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pres(id: EntityId, name: &str, stock: f64, min_stock: f64, active: bool) -> Presentation {
        Presentation {
            id,
            product_id: 1,
            product_name: "Gaseosa".into(),
            category_id: None,
            name: name.into(),
            barcode: None,
            unit_id: None,
            color_id: None,
            cost_price: 1.0,
            sale_price: 2.0,
            stock,
            min_stock,
            active,
        }
    }

    #[test]
    fn test_low_stock_rows() {
        let rows = low_stock_rows(&[
            pres(1, "500 ml", 10.0, 5.0, true),
            pres(2, "1 L", 5.0, 5.0, true),
            pres(3, "2 L", 1.0, 6.0, true),
            pres(4, "3 L", 0.0, 6.0, false),
        ]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Gaseosa 2 L");
        assert_eq!(rows[0].shortage, 5.0);
        assert_eq!(rows[1].presentation_id, 2);
        assert_eq!(rows[1].shortage, 0.0);
    }
}
