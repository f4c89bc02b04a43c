use reclaim_core::{
    AuthenticatedUser, Password, PasswordHasher, PasswordHasherError, UserStore, UserStoreError,
};
use secrecy::Secret;

/// Error types specific to the login use case
///
/// The first three are the login machine's failure outcomes, each with its
/// own user-facing message; they must stay distinct so callers can branch on
/// the exact case.
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Username and password must not be empty")]
    EmptyCredentials,
    #[error("User not found")]
    UserNotFound,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error(transparent)]
    Store(#[from] UserStoreError),
    #[error(transparent)]
    Hasher(#[from] PasswordHasherError),
}

/// Login use case - handles user authentication
///
/// A strict ordered machine: blank credentials short-circuit before any
/// collaborator call, an unknown username short-circuits before the hasher
/// runs, and only then is the password verified.
pub struct LoginUseCase<U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    user_store: U,
    password_hasher: H,
}

impl<U, H> LoginUseCase<U, H>
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

    /// Execute the login use case
    ///
    /// Takes the raw credentials because the blank check precedes domain
    /// parsing; a successful login yields a credential-free
    /// [`AuthenticatedUser`].
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        username: &str,
        password: Secret<String>,
    ) -> Result<AuthenticatedUser, LoginError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(LoginError::EmptyCredentials);
        }
        // Password::parse rejects exactly the blank case.
        let password = Password::parse(password).map_err(|_| LoginError::EmptyCredentials)?;

        let user = self
            .user_store
            .find_by_username(username)
            .await?
            .ok_or(LoginError::UserNotFound)?;

        let matches = self
            .password_hasher
            .verify_password(&password, user.password_hash())
            .await?;
        if !matches {
            return Err(LoginError::InvalidCredentials);
        }

        Ok(AuthenticatedUser::from(&user))
    }
}
