pub mod create_item;
pub mod error;
pub mod get_user;
pub mod list_items;
pub mod login;
pub mod register;

pub use create_item::{CreateItemRequest, OwnerRef, create_item};
pub use error::{ApiError, ErrorResponse};
pub use get_user::get_user;
pub use list_items::{list_items, list_owner_items};
pub use login::{LoginHttpResponse, LoginRequest, login};
pub use register::{RegisterRequest, register};

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
