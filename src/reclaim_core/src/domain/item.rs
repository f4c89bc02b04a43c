use chrono::NaiveDate;
use uuid::Uuid;

use super::email::Email;
use super::item_category::ItemCategory;
use super::item_error::ItemError;
use super::item_id::ItemId;
use super::item_type::ItemType;
use super::user::User;
use super::user_id::UserId;
use super::username::Username;

/// A report draft as captured from a client, before the owner is resolved.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub title: String,
    pub description: String,
    pub category: ItemCategory,
    pub item_type: ItemType,
    pub location: String,
    pub date: NaiveDate,
    pub owner_email: Email,
}

/// Raw column values of a stored item, as a store reads them back.
#[derive(Debug, Clone)]
pub struct ItemRecord {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub item_type: String,
    pub location: String,
    pub date: NaiveDate,
    pub image: Vec<u8>,
    pub owner_id: Uuid,
    pub owner_username: String,
}

/// A lost-or-found report with the owner's identity snapshotted on it.
///
/// The owner id and username are carried on the item itself, so projections
/// read them directly instead of consulting the user store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    title: String,
    description: String,
    category: ItemCategory,
    item_type: ItemType,
    location: String,
    date: NaiveDate,
    image: Vec<u8>,
    owner_id: UserId,
    owner_username: Username,
}

impl Item {
    pub fn new(draft: NewItem, owner: &User, image: Vec<u8>) -> Self {
        Self {
            id: ItemId::new(),
            title: draft.title,
            description: draft.description,
            category: draft.category,
            item_type: draft.item_type,
            location: draft.location,
            date: draft.date,
            image,
            owner_id: owner.id(),
            owner_username: owner.username().clone(),
        }
    }

    /// Rebuilds an item from stored columns, revalidating the enum fields
    /// and the owner snapshot.
    pub fn parse(record: ItemRecord) -> Result<Self, ItemError> {
        Ok(Self {
            id: ItemId::from(record.id),
            title: record.title,
            description: record.description,
            category: ItemCategory::try_from(record.category)?,
            item_type: ItemType::try_from(record.item_type)?,
            location: record.location,
            date: record.date,
            image: record.image,
            owner_id: UserId::from(record.owner_id),
            owner_username: Username::parse(record.owner_username)
                .map_err(|e| ItemError::InvalidOwner(e.to_string()))?,
        })
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> ItemCategory {
        self.category
    }

    pub fn item_type(&self) -> ItemType {
        self.item_type
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn image(&self) -> &[u8] {
        &self.image
    }

    pub fn owner_id(&self) -> UserId {
        self.owner_id
    }

    pub fn owner_username(&self) -> &Username {
        &self.owner_username
    }
}
