use contracts::system::auth::{
    AdminUser, LoginRequest, LoginResponse, RefreshRequest, SignUpRequest, UpdateProfileDto,
};

use crate::shared::error::AppError;
use crate::shared::http::{send_empty, send_json, ApiRequest};

/// Exchange credentials for a token pair and the operator profile
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, AppError> {
    send_json(ApiRequest::post("auth/login/").anonymous().json(request)?).await
}

/// Revoke the refresh token on the server
pub async fn logout(refresh: String) -> Result<(), AppError> {
    send_empty(
        ApiRequest::post("auth/logout/")
            .anonymous()
            .json(&RefreshRequest { refresh })?,
    )
    .await
}

pub async fn sign_up(request: &SignUpRequest) -> Result<(), AppError> {
    send_empty(ApiRequest::post("auth/registration/").anonymous().json(request)?).await
}

/// Current operator profile
pub async fn me() -> Result<AdminUser, AppError> {
    send_json(ApiRequest::get("auth/me/")).await
}

pub async fn update_me(dto: &UpdateProfileDto) -> Result<AdminUser, AppError> {
    send_json(ApiRequest::patch("auth/me/").json(dto)?).await
}
