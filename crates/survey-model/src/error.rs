use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("quantity must be at least 1, got {0}")]
    InvalidQuantity(u32),
    #[error("product name must not be blank")]
    BlankProductName,
}

pub type Result<T> = std::result::Result<T, ModelError>;
