use std::sync::Arc;
use tokio::sync::RwLock;

use reclaim_core::{Item, ItemStore, ItemStoreError, UserId};

// Backed by a Vec so listings come back in insertion order.
#[derive(Default, Clone)]
pub struct VecItemStore {
    items: Arc<RwLock<Vec<Item>>>,
}

impl VecItemStore {
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait::async_trait]
impl ItemStore for VecItemStore {
    async fn add_item(&self, item: Item) -> Result<Item, ItemStoreError> {
        let mut items = self.items.write().await;
        items.push(item.clone());
        Ok(item)
    }

    async fn get_all_items(&self) -> Result<Vec<Item>, ItemStoreError> {
        let items = self.items.read().await;
        Ok(items.clone())
    }

    async fn get_items_by_owner(&self, owner: &UserId) -> Result<Vec<Item>, ItemStoreError> {
        let items = self.items.read().await;
        Ok(items
            .iter()
            .filter(|item| item.owner_id() == *owner)
            .cloned()
            .collect())
    }
}
