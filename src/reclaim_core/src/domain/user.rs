use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use uuid::Uuid;

use super::contact_info::ContactInfo;
use super::email::Email;
use super::password::PasswordHash;
use super::user_id::UserId;
use super::username::Username;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UserError {
    #[error("Username must not be empty")]
    EmptyUsername,
    #[error("Username must be at most {} characters", Username::MAX_LENGTH)]
    UsernameTooLong,
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Password must not be empty")]
    EmptyPassword,
}

/// A registered account holder.
///
/// Instances are fully validated at construction and immutable afterwards;
/// stores persist and rehydrate them verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    username: Username,
    email: Email,
    password_hash: PasswordHash,
    contact_info: ContactInfo,
}

impl User {
    pub fn new(
        username: Username,
        email: Email,
        password_hash: PasswordHash,
        contact_info: ContactInfo,
    ) -> Self {
        Self {
            id: UserId::new(),
            username,
            email,
            password_hash,
            contact_info,
        }
    }

    /// Rebuilds a user from stored fields, revalidating each of them.
    pub fn parse(
        id: Uuid,
        username: String,
        email: Secret<String>,
        password_hash: Secret<String>,
        contact_info: String,
    ) -> Result<Self, UserError> {
        Ok(Self {
            id: UserId::from(id),
            username: Username::parse(username)?,
            email: Email::parse(email)?,
            password_hash: PasswordHash::from(password_hash),
            contact_info: ContactInfo::from(contact_info),
        })
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    pub fn contact_info(&self) -> &ContactInfo {
        &self.contact_info
    }
}

/// The public view of a user returned after a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub username: Username,
    pub email: String,
}

impl From<&User> for AuthenticatedUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id(),
            username: user.username().clone(),
            email: user.email().as_ref().expose_secret().clone(),
        }
    }
}
