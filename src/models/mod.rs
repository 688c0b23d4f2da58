//! Data models for Bookshelf

pub mod book;
pub mod session;

// Re-export commonly used types
pub use book::{Book, CreateBook, UpdateBook};
pub use session::{Identity, SessionClaims, ADMIN_ROLE};
