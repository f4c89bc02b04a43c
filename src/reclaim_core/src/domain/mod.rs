pub mod contact_info;
pub mod email;
pub mod item;
pub mod item_category;
pub mod item_error;
pub mod item_id;
pub mod item_response;
pub mod item_type;
pub mod password;
pub mod user;
pub mod user_id;
pub mod username;
