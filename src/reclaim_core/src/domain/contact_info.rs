use serde::Serialize;

/// Free-form contact details a finder can use to reach a reporter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ContactInfo(String);

impl ContactInfo {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ContactInfo {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ContactInfo {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
