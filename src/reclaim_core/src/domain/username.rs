use serde::Serialize;

use super::user::UserError;

/// A validated username.
///
/// Usernames are public identifiers: non-empty once trimmed and at most 64
/// characters. The stored value is the trimmed form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    pub const MAX_LENGTH: usize = 64;

    pub fn parse(value: impl AsRef<str>) -> Result<Self, UserError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(UserError::EmptyUsername);
        }
        if trimmed.chars().count() > Self::MAX_LENGTH {
            return Err(UserError::UsernameTooLong);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Username {
    type Error = UserError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    #[test]
    fn accepts_a_plain_username() {
        let username = Username::parse("thisara").unwrap();
        assert_eq!(username.as_str(), "thisara");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let username = Username::parse("  thisara \n").unwrap();
        assert_eq!(username.as_str(), "thisara");
    }

    #[test]
    fn rejects_empty_and_whitespace_only_values() {
        assert_eq!(Username::parse(""), Err(UserError::EmptyUsername));
        assert_eq!(Username::parse("   \t"), Err(UserError::EmptyUsername));
    }

    #[test]
    fn rejects_values_longer_than_64_characters() {
        let long = "a".repeat(65);
        assert_eq!(Username::parse(long), Err(UserError::UsernameTooLong));
    }

    #[test]
    fn accepts_exactly_64_characters() {
        let max = "a".repeat(64);
        assert!(Username::parse(max).is_ok());
    }

    #[quickcheck]
    fn parse_succeeds_exactly_for_nonblank_inputs_within_bounds(value: String) -> bool {
        let trimmed = value.trim();
        let expected_ok = !trimmed.is_empty() && trimmed.chars().count() <= Username::MAX_LENGTH;
        Username::parse(&value).is_ok() == expected_ok
    }
}
