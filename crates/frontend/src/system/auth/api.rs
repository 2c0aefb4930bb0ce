use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};

use crate::shared::api_error::ApiError;
use crate::shared::http;

pub async fn login(username: String, password: String) -> Result<LoginResponse, ApiError> {
    http::post_json("/auth/login", &LoginRequest { username, password }).await
}

pub async fn refresh_token(refresh_token: String) -> Result<RefreshResponse, ApiError> {
    http::post_json("/auth/refresh", &RefreshRequest { refresh_token }).await
}

/// Отзыв refresh-токена на backend
pub async fn logout(refresh_token: Option<String>) -> Result<(), ApiError> {
    let body = RefreshRequest {
        refresh_token: refresh_token.unwrap_or_default(),
    };
    http::post("/auth/logout", &body).await
}

/// Профиль текущего пользователя (токен добавляет конвейер)
pub async fn get_current_user() -> Result<UserInfo, ApiError> {
    http::get_json("/auth/me").await
}
