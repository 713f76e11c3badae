pub mod config;
pub mod credentials;

pub type Result<T> = std::result::Result<T, crate::error::StorageError>;
