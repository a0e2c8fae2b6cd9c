//! The to-do item record shared by the store and the remote service.

use serde::{Deserialize, Serialize};

/// A single task record.
///
/// `id` is assigned by the backend. Items created locally carry `None`
/// until the next reload returns the server's copy; such items are not
/// addressable for remote update/delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    /// May be empty, may contain newlines.
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    /// Create a new, not-yet-synced item.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: description.into(),
            completed: false,
        }
    }
}
