use reclaim_core::{User, UserStore, UserStoreError};

/// Error types specific to the get-user use case
#[derive(Debug, thiserror::Error)]
pub enum GetUserError {
    #[error("User not found")]
    UserNotFound,
    #[error(transparent)]
    Store(#[from] UserStoreError),
}

/// Get-user use case - looks up a user profile by username
pub struct GetUserUseCase<U>
where
    U: UserStore,
{
    user_store: U,
}

impl<U> GetUserUseCase<U>
where
    U: UserStore,
{
    pub fn new(user_store: U) -> Self {
        Self { user_store }
    }

    /// Absence is fatal to the caller here, unlike the login lookup.
    #[tracing::instrument(name = "GetUserUseCase::execute", skip(self))]
    pub async fn execute(&self, username: &str) -> Result<User, GetUserError> {
        self.user_store
            .find_by_username(username)
            .await?
            .ok_or(GetUserError::UserNotFound)
    }
}
