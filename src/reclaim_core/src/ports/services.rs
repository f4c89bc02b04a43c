use async_trait::async_trait;
use thiserror::Error;

use crate::domain::password::{Password, PasswordHash};

#[derive(Debug, Error)]
pub enum PasswordHasherError {
    #[error("Password hashing failed: {0}")]
    UnexpectedError(String),
}

impl PartialEq for PasswordHasherError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
        }
    }
}

/// Hashing port for credential material.
///
/// A mismatch during verification is `Ok(false)`; only infrastructure
/// faults surface as errors.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &Password) -> Result<PasswordHash, PasswordHasherError>;
    async fn verify_password(
        &self,
        password: &Password,
        hash: &PasswordHash,
    ) -> Result<bool, PasswordHasherError>;
}
