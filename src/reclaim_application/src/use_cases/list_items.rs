use reclaim_core::{ItemResponse, ItemStore, ItemStoreError, UserId};

/// Error types specific to the list-items use case
#[derive(Debug, thiserror::Error)]
pub enum ListItemsError {
    #[error(transparent)]
    Store(#[from] ItemStoreError),
}

/// List-items use case - projects stored reports for listing
pub struct ListItemsUseCase<I>
where
    I: ItemStore,
{
    item_store: I,
}

impl<I> ListItemsUseCase<I>
where
    I: ItemStore,
{
    pub fn new(item_store: I) -> Self {
        Self { item_store }
    }

    /// All reports in the store's stable order; an empty store is an empty
    /// list, not an error.
    #[tracing::instrument(name = "ListItemsUseCase::execute", skip(self))]
    pub async fn execute(&self) -> Result<Vec<ItemResponse>, ListItemsError> {
        let items = self.item_store.get_all_items().await?;
        Ok(items.iter().map(ItemResponse::from).collect())
    }

    /// One owner's reports, same projection and ordering contract; an
    /// unknown owner simply has no reports.
    #[tracing::instrument(name = "ListItemsUseCase::execute_for_owner", skip(self))]
    pub async fn execute_for_owner(
        &self,
        owner: &UserId,
    ) -> Result<Vec<ItemResponse>, ListItemsError> {
        let items = self.item_store.get_items_by_owner(owner).await?;
        Ok(items.iter().map(ItemResponse::from).collect())
    }
}
