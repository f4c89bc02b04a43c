use reclaim_core::{
    ContactInfo, Email, Password, PasswordHasher, PasswordHasherError, User, UserStore,
    UserStoreError, Username,
};

/// Error types specific to the register use case
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("Username already exists!")]
    DuplicateUsername,
    #[error("Email already in use!")]
    DuplicateEmail,
    #[error(transparent)]
    Store(UserStoreError),
    #[error(transparent)]
    Hasher(#[from] PasswordHasherError),
}

impl From<UserStoreError> for RegisterError {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::DuplicateUsername => Self::DuplicateUsername,
            UserStoreError::DuplicateEmail => Self::DuplicateEmail,
            error @ UserStoreError::UnexpectedError(_) => Self::Store(error),
        }
    }
}

/// Register use case - handles user registration
pub struct RegisterUseCase<U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    user_store: U,
    password_hasher: H,
}

impl<U, H> RegisterUseCase<U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    pub fn new(user_store: U, password_hasher: H) -> Self {
        Self {
            user_store,
            password_hasher,
        }
    }

    /// Execute the register use case
    ///
    /// The username check runs first and short-circuits: a duplicate username
    /// never triggers the email check, the hasher or a store write. Uniqueness
    /// violations surfacing from the store itself (the authoritative guard
    /// under concurrent registration) map onto the same two variants.
    #[tracing::instrument(name = "RegisterUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        username: Username,
        email: Email,
        password: Password,
        contact_info: ContactInfo,
    ) -> Result<User, RegisterError> {
        if self.user_store.username_exists(username.as_str()).await? {
            return Err(RegisterError::DuplicateUsername);
        }
        if self.user_store.email_exists(&email).await? {
            return Err(RegisterError::DuplicateEmail);
        }

        let password_hash = self.password_hasher.hash_password(&password).await?;
        let user = User::new(username, email, password_hash, contact_info);

        Ok(self.user_store.add_user(user).await?)
    }
}
