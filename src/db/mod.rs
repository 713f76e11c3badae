pub mod client;
pub mod cursor;
pub mod script;

pub use client::DbClient;
pub use cursor::{CursorRow, RowCursor};
