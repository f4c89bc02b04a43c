use serde::Serialize;

use super::item::Item;
use super::item_category::ItemCategory;
use super::item_type::ItemType;
use super::username::Username;

/// The owner fields a listing is allowed to reveal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemOwner {
    pub username: Username,
}

/// Public projection of a report.
///
/// Deliberately narrow: no ids, no image payload, no owner email and no
/// credential material ever leave through this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemResponse {
    pub title: String,
    pub description: String,
    pub category: ItemCategory,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub location: String,
    #[serde(rename = "user")]
    pub owner: ItemOwner,
}

impl From<&Item> for ItemResponse {
    fn from(item: &Item) -> Self {
        Self {
            title: item.title().to_string(),
            description: item.description().to_string(),
            category: item.category(),
            item_type: item.item_type(),
            location: item.location().to_string(),
            owner: ItemOwner {
                username: item.owner_username().clone(),
            },
        }
    }
}
