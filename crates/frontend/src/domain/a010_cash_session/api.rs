use contracts::domain::a010_cash_session::{
    CashSession, CashSummary, CloseSessionDto, Movement, MovementDto, OpenSessionDto,
};
use contracts::domain::common::EntityId;

use crate::shared::api_error::ApiError;
use crate::shared::http;

const BASE: &str = "/cash-sessions";

/// Текущая открытая смена пользователя; `None` если касса закрыта
pub async fn fetch_current() -> Result<Option<CashSession>, ApiError> {
    http::get_optional(&format!("{}/current", BASE)).await
}

pub async fn fetch_history() -> Result<Vec<CashSession>, ApiError> {
    http::get_json(BASE).await
}

pub async fn open_session(dto: &OpenSessionDto) -> Result<CashSession, ApiError> {
    dto.validate()?;
    http::post_json(&format!("{}/open", BASE), dto).await
}

pub async fn fetch_summary(id: EntityId) -> Result<CashSummary, ApiError> {
    http::get_json(&format!("{}/{}/summary", BASE, id)).await
}

pub async fn fetch_movements(id: EntityId) -> Result<Vec<Movement>, ApiError> {
    http::get_json(&format!("{}/{}/movements", BASE, id)).await
}

/// `cash_available` - ожидаемая сумма в ящике; расход сверх неё отклоняется до запроса
pub async fn add_movement(
    id: EntityId,
    dto: &MovementDto,
    cash_available: f64,
) -> Result<(), ApiError> {
    dto.validate(cash_available)?;
    http::post(&format!("{}/{}/movements", BASE, id), dto).await
}

pub async fn close_session(id: EntityId, dto: &CloseSessionDto) -> Result<(), ApiError> {
    http::post(&format!("{}/{}/close", BASE, id), dto).await
}
