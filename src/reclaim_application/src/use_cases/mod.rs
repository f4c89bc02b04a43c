pub mod create_item;
pub mod get_user;
pub mod list_items;
pub mod login;
pub mod register;

// Re-export for convenience
pub use create_item::{CreateItemError, CreateItemUseCase};
pub use get_user::{GetUserError, GetUserUseCase};
pub use list_items::{ListItemsError, ListItemsUseCase};
pub use login::{LoginError, LoginUseCase};
pub use register::{RegisterError, RegisterUseCase};
