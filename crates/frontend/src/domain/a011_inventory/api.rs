use contracts::domain::a011_inventory::{AdjustmentDto, InventoryMovement, KardexMovement};
use contracts::domain::common::EntityId;

use crate::shared::api_error::ApiError;
use crate::shared::http;

pub async fn fetch_movements() -> Result<Vec<InventoryMovement>, ApiError> {
    http::get_json("/inventory/movements").await
}

/// `current_stock` - остаток выбранной презентации, для проверки расхода
pub async fn post_adjustment(dto: &AdjustmentDto, current_stock: f64) -> Result<(), ApiError> {
    dto.validate(current_stock)?;
    http::post("/inventory/adjustments", dto).await
}

pub async fn fetch_kardex(presentation_id: EntityId) -> Result<Vec<KardexMovement>, ApiError> {
    http::get_json(&format!("/inventory/kardex/{}", presentation_id)).await
}
