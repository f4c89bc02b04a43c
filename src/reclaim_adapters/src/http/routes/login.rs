use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use reclaim_application::LoginUseCase;
use reclaim_core::{AuthenticatedUser, PasswordHasher, UserStore};
use secrecy::Secret;
use serde::{Deserialize, Serialize};

use super::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: Secret<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginHttpResponse {
    pub message: String,
    pub user: AuthenticatedUser,
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<U, H>(
    State((user_store, password_hasher)): State<(U, H)>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
{
    let use_case = LoginUseCase::new(user_store, password_hasher);

    let user = use_case.execute(&request.username, request.password).await?;

    Ok((
        StatusCode::OK,
        Json(LoginHttpResponse {
            message: String::from("Login successful!"),
            user,
        }),
    ))
}
