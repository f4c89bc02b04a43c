use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    email::Email,
    item::Item,
    user::User,
    user_id::UserId,
};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("Username already exists!")]
    DuplicateUsername,
    #[error("Email already in use!")]
    DuplicateEmail,
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::DuplicateUsername, Self::DuplicateUsername) => true,
            (Self::DuplicateEmail, Self::DuplicateEmail) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Persistence port for registered users.
///
/// Absence is an [`Option`], never an error; the store is also the authority
/// on username and email uniqueness and reports violations from `add_user`.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn add_user(&self, user: User) -> Result<User, UserStoreError>;
    async fn username_exists(&self, username: &str) -> Result<bool, UserStoreError>;
    async fn email_exists(&self, email: &Email) -> Result<bool, UserStoreError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserStoreError>;
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError>;
}

// ItemStore port trait and errors
#[derive(Debug, Error)]
pub enum ItemStoreError {
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl PartialEq for ItemStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
        }
    }
}

/// Persistence port for lost-and-found reports.
#[async_trait]
pub trait ItemStore: Send + Sync {
    async fn add_item(&self, item: Item) -> Result<Item, ItemStoreError>;
    async fn get_all_items(&self) -> Result<Vec<Item>, ItemStoreError>;
    async fn get_items_by_owner(&self, owner: &UserId) -> Result<Vec<Item>, ItemStoreError>;
}
