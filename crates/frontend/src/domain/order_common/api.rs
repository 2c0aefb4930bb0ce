use contracts::domain::common::order::{
    Order, OrderDto, OrderKind, OrderPaymentDto, OrderStatus, OrderStatusDto,
};

use crate::shared::api_error::ApiError;
use crate::shared::{crud, http};

pub async fn fetch_orders<K: OrderKind>() -> Result<Vec<Order>, ApiError> {
    http::get_json(K::RESOURCE).await
}

pub async fn save_order<K: OrderKind>(dto: &OrderDto) -> Result<(), ApiError> {
    dto.validate(K::PARTY_LABEL)?;
    crud::save(K::RESOURCE, dto.id, dto).await
}

pub async fn change_status<K: OrderKind>(order: &Order, next: OrderStatus) -> Result<(), ApiError> {
    order.validate_transition(next)?;
    http::patch(&K::status_url(order.id), &OrderStatusDto { status: next }).await
}

pub async fn add_payment<K: OrderKind>(order: &Order, dto: &OrderPaymentDto) -> Result<(), ApiError> {
    order.validate_payment(dto)?;
    http::post(&K::payments_url(order.id), dto).await
}

pub async fn fetch_order<K: OrderKind>(id: i64) -> Result<Order, ApiError> {
    http::get_json(&K::item_url(id)).await
}
