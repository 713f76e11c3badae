pub use error::AppError;

/// Main architecture layers (dependency flow: CLI → Catalog/DB → Display)
pub mod cli; // Command-line interface and interactive session
pub mod db; // PostgreSQL connector

/// Support modules (used across layers)
pub mod catalog; // Static report catalog
pub mod display; // Result model and table rendering
pub mod error; // Error handling
pub mod storage; // Configuration and credentials
pub mod utils; // Shared utilities and helpers

pub type Result<T> = std::result::Result<T, AppError>;
