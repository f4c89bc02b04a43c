use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use reclaim_application::CreateItemUseCase;
use reclaim_core::{Email, ItemCategory, ItemStore, ItemType, NewItem, UserStore};
use secrecy::Secret;
use serde::Deserialize;

use super::error::ApiError;

/// The JSON carried in the `request` part of the multipart body.
#[derive(Deserialize)]
pub struct CreateItemRequest {
    pub title: String,
    pub description: String,
    pub category: ItemCategory,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub location: String,
    pub date: NaiveDate,
    pub user: OwnerRef,
}

#[derive(Deserialize)]
pub struct OwnerRef {
    pub email: Secret<String>,
}

#[tracing::instrument(name = "Create item", skip_all)]
pub async fn create_item<U, I>(
    State((user_store, item_store)): State<(U, I)>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
    I: ItemStore + Clone + 'static,
{
    let mut request: Option<CreateItemRequest> = None;
    let mut image: Vec<u8> = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(ToString::to_string);
        match name.as_deref() {
            Some("request") => {
                let bytes = field.bytes().await?;
                request = Some(
                    serde_json::from_slice(&bytes)
                        .map_err(|e| ApiError::InvalidInput(e.to_string()))?,
                );
            }
            Some("imageFile") => {
                image = field.bytes().await?.to_vec();
            }
            _ => {}
        }
    }

    let request = request.ok_or_else(|| {
        ApiError::InvalidInput(String::from("missing multipart part: request"))
    })?;

    let use_case = CreateItemUseCase::new(user_store, item_store);

    let draft = NewItem {
        title: request.title,
        description: request.description,
        category: request.category,
        item_type: request.item_type,
        location: request.location,
        date: request.date,
        owner_email: Email::try_from(request.user.email)?,
    };

    let response = use_case.execute(draft, image).await?;

    Ok((StatusCode::CREATED, Json(response)))
}
