pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    contact_info::ContactInfo,
    email::Email,
    item::{Item, ItemRecord, NewItem},
    item_category::ItemCategory,
    item_error::ItemError,
    item_id::ItemId,
    item_response::{ItemOwner, ItemResponse},
    item_type::ItemType,
    password::{Password, PasswordHash},
    user::{AuthenticatedUser, User, UserError},
    user_id::UserId,
    username::Username,
};

pub use ports::{
    repositories::{ItemStore, ItemStoreError, UserStore, UserStoreError},
    services::{PasswordHasher, PasswordHasherError},
};
