//! Book model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Book record held by the in-memory store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Identifier assigned by the store
    pub id: i64,
    pub title: String,
    pub author: String,
}

/// Create book request
///
/// Missing fields default to empty strings; an `id` sent by the client is ignored.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateBook {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
}

/// Update book request
///
/// Both fields replace the stored ones; a missing field becomes an empty string.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateBook {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
}
