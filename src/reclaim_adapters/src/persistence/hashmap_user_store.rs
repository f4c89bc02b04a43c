use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use reclaim_core::{Email, User, UserStore, UserStoreError};

// Keyed by username; email uniqueness is enforced with a scan under the same
// write lock, so both checks observe one consistent snapshot.
#[derive(Default, Clone)]
pub struct HashMapUserStore {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    async fn add_user(&self, user: User) -> Result<User, UserStoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(user.username().as_ref()) {
            return Err(UserStoreError::DuplicateUsername);
        }
        if users.values().any(|existing| existing.email() == user.email()) {
            return Err(UserStoreError::DuplicateEmail);
        }
        users.insert(user.username().as_ref().to_string(), user.clone());
        Ok(user)
    }

    async fn username_exists(&self, username: &str) -> Result<bool, UserStoreError> {
        let users = self.users.read().await;
        Ok(users.contains_key(username))
    }

    async fn email_exists(&self, email: &Email) -> Result<bool, UserStoreError> {
        let users = self.users.read().await;
        Ok(users.values().any(|user| user.email() == email))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserStoreError> {
        let users = self.users.read().await;
        Ok(users.get(username).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError> {
        let users = self.users.read().await;
        Ok(users.values().find(|user| user.email() == email).cloned())
    }
}
