use contracts::system::users::{ResetPasswordDto, User, UserDto};

use crate::shared::api_error::ApiError;
use crate::shared::{crud, http};

pub const RESOURCE: &str = "/users";

pub async fn fetch_users() -> Result<Vec<User>, ApiError> {
    crud::fetch_all(RESOURCE).await
}

pub async fn save_user(dto: &UserDto) -> Result<(), ApiError> {
    dto.validate()?;
    crud::save(RESOURCE, dto.id, dto).await
}

pub async fn reset_password(id: i64, new_password: String) -> Result<(), ApiError> {
    contracts::system::users::validate_password(&new_password)?;
    http::post(
        &format!("{}/{}/reset-password", RESOURCE, id),
        &ResetPasswordDto { new_password },
    )
    .await
}
