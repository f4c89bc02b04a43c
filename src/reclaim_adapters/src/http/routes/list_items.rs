use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use reclaim_application::ListItemsUseCase;
use reclaim_core::{ItemStore, UserId, UserStore};
use uuid::Uuid;

use super::error::ApiError;

// Shares its state tuple with `create_item` because both hang off the same
// MethodRouter for /api/items.
#[tracing::instrument(name = "List items", skip_all)]
pub async fn list_items<U, I>(
    State((_, item_store)): State<(U, I)>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
    I: ItemStore + Clone + 'static,
{
    let use_case = ListItemsUseCase::new(item_store);

    let items = use_case.execute().await?;

    Ok(Json(items))
}

#[tracing::instrument(name = "List items by owner", skip_all, fields(owner = %user_id))]
pub async fn list_owner_items<I>(
    State(item_store): State<I>,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError>
where
    I: ItemStore + Clone + 'static,
{
    let use_case = ListItemsUseCase::new(item_store);

    let items = use_case.execute_for_owner(&UserId::from(user_id)).await?;

    Ok(Json(items))
}
