#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ItemError {
    #[error("Invalid item category: {0}")]
    InvalidCategory(String),
    #[error("Invalid item type: {0}")]
    InvalidType(String),
    #[error("Invalid owner reference: {0}")]
    InvalidOwner(String),
}
