use axum::{
    Json,
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use reclaim_application::{
    CreateItemError, GetUserError, ListItemsError, LoginError, RegisterError,
};
use reclaim_core::{
    ItemError, ItemStoreError, PasswordHasherError, UserError, UserStoreError,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Username and password must not be empty")]
    EmptyCredentials,

    // A login lookup miss stays in the 401 family; only the profile route
    // reports an absent user as 404.
    #[error("User not found")]
    UnknownUsername,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User not found")]
    UserNotFound,

    #[error("Username already exists!")]
    DuplicateUsername,

    #[error("Email already in use!")]
    DuplicateEmail,

    #[error("Owner not found")]
    OwnerNotFound,

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            ApiError::InvalidInput(_) | ApiError::EmptyCredentials => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }

            ApiError::UnknownUsername | ApiError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }

            ApiError::UserNotFound => (StatusCode::NOT_FOUND, self.to_string()),

            ApiError::DuplicateUsername | ApiError::DuplicateEmail => {
                (StatusCode::CONFLICT, self.to_string())
            }

            ApiError::OwnerNotFound => (StatusCode::UNPROCESSABLE_ENTITY, self.to_string()),

            ApiError::UnexpectedError(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status_code, body).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(error: UserError) -> Self {
        ApiError::InvalidInput(error.to_string())
    }
}

impl From<ItemError> for ApiError {
    fn from(error: ItemError) -> Self {
        ApiError::InvalidInput(error.to_string())
    }
}

impl From<MultipartError> for ApiError {
    fn from(error: MultipartError) -> Self {
        ApiError::InvalidInput(error.to_string())
    }
}

impl From<UserStoreError> for ApiError {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::DuplicateUsername => ApiError::DuplicateUsername,
            UserStoreError::DuplicateEmail => ApiError::DuplicateEmail,
            UserStoreError::UnexpectedError(e) => ApiError::UnexpectedError(e),
        }
    }
}

impl From<ItemStoreError> for ApiError {
    fn from(error: ItemStoreError) -> Self {
        match error {
            ItemStoreError::UnexpectedError(e) => ApiError::UnexpectedError(e),
        }
    }
}

impl From<PasswordHasherError> for ApiError {
    fn from(error: PasswordHasherError) -> Self {
        ApiError::UnexpectedError(error.to_string())
    }
}

impl From<RegisterError> for ApiError {
    fn from(error: RegisterError) -> Self {
        match error {
            RegisterError::DuplicateUsername => ApiError::DuplicateUsername,
            RegisterError::DuplicateEmail => ApiError::DuplicateEmail,
            RegisterError::Store(e) => e.into(),
            RegisterError::Hasher(e) => e.into(),
        }
    }
}

impl From<LoginError> for ApiError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::EmptyCredentials => ApiError::EmptyCredentials,
            LoginError::UserNotFound => ApiError::UnknownUsername,
            LoginError::InvalidCredentials => ApiError::InvalidCredentials,
            LoginError::Store(e) => e.into(),
            LoginError::Hasher(e) => e.into(),
        }
    }
}

impl From<GetUserError> for ApiError {
    fn from(error: GetUserError) -> Self {
        match error {
            GetUserError::UserNotFound => ApiError::UserNotFound,
            GetUserError::Store(e) => e.into(),
        }
    }
}

impl From<CreateItemError> for ApiError {
    fn from(error: CreateItemError) -> Self {
        match error {
            CreateItemError::OwnerNotFound => ApiError::OwnerNotFound,
            CreateItemError::UserStore(e) => e.into(),
            CreateItemError::ItemStore(e) => e.into(),
        }
    }
}

impl From<ListItemsError> for ApiError {
    fn from(error: ListItemsError) -> Self {
        match error {
            ListItemsError::Store(e) => e.into(),
        }
    }
}
