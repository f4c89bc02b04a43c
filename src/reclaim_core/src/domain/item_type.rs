use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::item_error::ItemError;

/// Whether a report announces a loss or a find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum ItemType {
    Lost,
    Found,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lost => "LOST",
            Self::Found => "FOUND",
        }
    }
}

impl TryFrom<String> for ItemType {
    type Error = ItemError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "LOST" => Ok(Self::Lost),
            "FOUND" => Ok(Self::Found),
            _ => Err(ItemError::InvalidType(value)),
        }
    }
}

impl FromStr for ItemType {
    type Err = ItemError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::try_from(value.to_string())
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
