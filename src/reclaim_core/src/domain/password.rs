use secrecy::{ExposeSecret, Secret};

use super::user::UserError;

/// A raw password as supplied by a client.
///
/// No structural requirements are imposed beyond being non-blank; strength
/// policy is a front-end concern here.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    pub fn parse(value: Secret<String>) -> Result<Self, UserError> {
        if value.expose_secret().trim().is_empty() {
            return Err(UserError::EmptyPassword);
        }
        Ok(Self(value))
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = UserError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for Password {}

/// An encoded password hash, opaque to everything but the hasher.
#[derive(Debug, Clone)]
pub struct PasswordHash(Secret<String>);

impl From<Secret<String>> for PasswordHash {
    fn from(value: Secret<String>) -> Self {
        Self(value)
    }
}

impl AsRef<Secret<String>> for PasswordHash {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for PasswordHash {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for PasswordHash {}
