use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use reclaim_application::GetUserUseCase;
use reclaim_core::{AuthenticatedUser, UserStore};

use super::error::ApiError;

#[tracing::instrument(name = "Get user", skip_all, fields(username = %username))]
pub async fn get_user<U>(
    State(user_store): State<U>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
{
    let use_case = GetUserUseCase::new(user_store);

    let user = use_case.execute(&username).await?;

    Ok(Json(AuthenticatedUser::from(&user)))
}
