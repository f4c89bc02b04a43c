use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use reclaim_application::RegisterUseCase;
use reclaim_core::{ContactInfo, Email, Password, PasswordHasher, UserStore, Username};
use secrecy::Secret;
use serde::Deserialize;

use super::MessageResponse;
use super::error::ApiError;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: Secret<String>,
    pub password: Secret<String>,
    #[serde(rename = "contactInfo", default)]
    pub contact_info: String,
}

#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<U, H>(
    State((user_store, password_hasher)): State<(U, H)>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
{
    let use_case = RegisterUseCase::new(user_store, password_hasher);

    let username = Username::try_from(request.username)?;
    let email = Email::try_from(request.email)?;
    let password = Password::try_from(request.password)?;
    let contact_info = ContactInfo::from(request.contact_info);

    use_case
        .execute(username, email, password, contact_info)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: String::from("User registered successfully!"),
        }),
    ))
}
