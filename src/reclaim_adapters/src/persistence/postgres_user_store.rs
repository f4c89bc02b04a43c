use reclaim_core::{Email, User, UserStore, UserStoreError};
use secrecy::{ExposeSecret, Secret};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresUserStore {
    pool: sqlx::PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresUserStore { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    email: String,
    password_hash: String,
    contact_info: String,
}

impl UserRow {
    fn into_user(self) -> Result<User, UserStoreError> {
        User::parse(
            self.id,
            self.username,
            Secret::new(self.email),
            Secret::new(self.password_hash),
            self.contact_info,
        )
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))
    }
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn add_user(&self, user: User) -> Result<User, UserStoreError> {
        sqlx::query(
            r#"
                INSERT INTO users (id, username, email, password_hash, contact_info)
                VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user.id().as_uuid())
        .bind(user.username().as_str())
        .bind(user.email().as_ref().expose_secret())
        .bind(user.password_hash().as_ref().expose_secret())
        .bind(user.contact_info().as_str())
        .execute(&self.pool)
        .await
        .map_err(into_user_store_error)?;

        Ok(user)
    }

    #[tracing::instrument(name = "Checking username in PostgreSQL", skip_all)]
    async fn username_exists(&self, username: &str) -> Result<bool, UserStoreError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
                .bind(username)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        Ok(exists)
    }

    #[tracing::instrument(name = "Checking email in PostgreSQL", skip_all)]
    async fn email_exists(&self, email: &Email) -> Result<bool, UserStoreError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
            .bind(email.as_ref().expose_secret())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        Ok(exists)
    }

    #[tracing::instrument(name = "Retrieving user by username from PostgreSQL", skip_all)]
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserStoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, username, email, password_hash, contact_info
                FROM users
                WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        row.map(UserRow::into_user).transpose()
    }

    #[tracing::instrument(name = "Retrieving user by email from PostgreSQL", skip_all)]
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, username, email, password_hash, contact_info
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email.as_ref().expose_secret())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        row.map(UserRow::into_user).transpose()
    }
}

// The storage constraints are the authoritative uniqueness guard; a violated
// constraint reports the same duplicate variant as the existence checks.
fn into_user_store_error(error: sqlx::Error) -> UserStoreError {
    if let Some(db_error) = error.as_database_error() {
        match db_error.constraint() {
            Some("users_username_key") => return UserStoreError::DuplicateUsername,
            Some("users_email_key") => return UserStoreError::DuplicateEmail,
            _ => {}
        }
    }
    UserStoreError::UnexpectedError(error.to_string())
}
