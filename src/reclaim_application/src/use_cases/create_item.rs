use reclaim_core::{
    Item, ItemResponse, ItemStore, ItemStoreError, NewItem, UserStore, UserStoreError,
};

/// Error types specific to the create-item use case
#[derive(Debug, thiserror::Error)]
pub enum CreateItemError {
    #[error("Owner not found")]
    OwnerNotFound,
    #[error(transparent)]
    UserStore(#[from] UserStoreError),
    #[error(transparent)]
    ItemStore(#[from] ItemStoreError),
}

/// Create-item use case - resolves the owner and persists a report
pub struct CreateItemUseCase<U, I>
where
    U: UserStore,
    I: ItemStore,
{
    user_store: U,
    item_store: I,
}

impl<U, I> CreateItemUseCase<U, I>
where
    U: UserStore,
    I: ItemStore,
{
    pub fn new(user_store: U, item_store: I) -> Self {
        Self {
            user_store,
            item_store,
        }
    }

    /// Execute the create-item use case
    ///
    /// The owner is resolved by email before anything is written; an
    /// unresolvable owner means a stale caller and nothing is persisted.
    /// The image may be empty when no file was supplied.
    #[tracing::instrument(name = "CreateItemUseCase::execute", skip(self, draft, image), fields(title = %draft.title))]
    pub async fn execute(
        &self,
        draft: NewItem,
        image: Vec<u8>,
    ) -> Result<ItemResponse, CreateItemError> {
        let owner = self
            .user_store
            .find_by_email(&draft.owner_email)
            .await?
            .ok_or(CreateItemError::OwnerNotFound)?;

        let item = Item::new(draft, &owner, image);
        let item = self.item_store.add_item(item).await?;

        Ok(ItemResponse::from(&item))
    }
}
