pub mod use_cases;

pub use use_cases::{
    create_item::{CreateItemError, CreateItemUseCase},
    get_user::{GetUserError, GetUserUseCase},
    list_items::{ListItemsError, ListItemsUseCase},
    login::{LoginError, LoginUseCase},
    register::{RegisterError, RegisterUseCase},
};
