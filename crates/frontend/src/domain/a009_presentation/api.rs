use contracts::domain::a009_presentation::{Presentation, PresentationDto};

use crate::shared::api_error::ApiError;
use crate::shared::crud;

pub const RESOURCE: &str = "/presentations";

pub async fn fetch_presentations() -> Result<Vec<Presentation>, ApiError> {
    crud::fetch_all(RESOURCE).await
}

/// Поиск для кассы и корректировок: по названию или точному штрихкоду
pub fn search_presentations<'a>(
    items: &'a [Presentation],
    query: &str,
    limit: usize,
) -> Vec<&'a Presentation> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return vec![];
    }
    if let Some(exact) = items
        .iter()
        .find(|p| p.active && p.barcode.as_deref() == Some(needle.as_str()))
    {
        return vec![exact];
    }
    items
        .iter()
        .filter(|p| p.active && p.full_name().to_lowercase().contains(&needle))
        .take(limit)
        .collect()
}

pub fn validate(dto: &PresentationDto) -> Result<(), ApiError> {
    dto.validate().map_err(ApiError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pres(id: i64, product: &str, name: &str, barcode: Option<&str>, active: bool) -> Presentation {
        Presentation {
            id,
            product_id: id,
            product_name: product.to_string(),
            category_id: None,
            name: name.to_string(),
            barcode: barcode.map(str::to_string),
            unit_id: Some(1),
            color_id: None,
            cost_price: 1.0,
            sale_price: 2.0,
            stock: 10.0,
            min_stock: 2.0,
            active,
        }
    }

    #[test]
    fn test_search_by_barcode_and_name() {
        let items = vec![
            pres(1, "Gaseosa", "500 ml", Some("7750182000123"), true),
            pres(2, "Gaseosa", "1.5 L", None, true),
            pres(3, "Galleta", "Pack", None, false),
        ];
        let by_code = search_presentations(&items, "7750182000123", 10);
        assert_eq!(by_code.len(), 1);
        assert_eq!(by_code[0].id, 1);

        let by_name = search_presentations(&items, "gaseosa", 10);
        assert_eq!(by_name.len(), 2);

        // неактивные не предлагаются
        assert!(search_presentations(&items, "galleta", 10).is_empty());
        assert!(search_presentations(&items, "  ", 10).is_empty());
    }
}
