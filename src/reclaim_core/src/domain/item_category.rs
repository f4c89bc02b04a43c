use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::item_error::ItemError;

/// The catalogue bucket a reported item belongs to.
///
/// The wire form is the SCREAMING_SNAKE_CASE variant name; anything else is
/// rejected with a dedicated decode error rather than a generic parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum ItemCategory {
    Electronics,
    Documents,
    Accessories,
    Clothing,
    Keys,
    Books,
    Others,
}

impl ItemCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Electronics => "ELECTRONICS",
            Self::Documents => "DOCUMENTS",
            Self::Accessories => "ACCESSORIES",
            Self::Clothing => "CLOTHING",
            Self::Keys => "KEYS",
            Self::Books => "BOOKS",
            Self::Others => "OTHERS",
        }
    }
}

impl TryFrom<String> for ItemCategory {
    type Error = ItemError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "ELECTRONICS" => Ok(Self::Electronics),
            "DOCUMENTS" => Ok(Self::Documents),
            "ACCESSORIES" => Ok(Self::Accessories),
            "CLOTHING" => Ok(Self::Clothing),
            "KEYS" => Ok(Self::Keys),
            "BOOKS" => Ok(Self::Books),
            "OTHERS" => Ok(Self::Others),
            _ => Err(ItemError::InvalidCategory(value)),
        }
    }
}

impl FromStr for ItemCategory {
    type Err = ItemError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::try_from(value.to_string())
    }
}

impl std::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
