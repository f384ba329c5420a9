//! Room model.
//!
//! Rooms are interchangeable teaching spaces. A room hosts at most one
//! block per time slot; beyond that the search treats every room alike.

use serde::{Deserialize, Serialize};

/// A room that blocks can be placed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
}

impl Room {
    /// Creates a room with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
        }
    }

    /// Sets the room name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Creates rooms `{prefix}1..={prefix}n`.
    pub fn numbered(prefix: &str, count: usize) -> Vec<Self> {
        (1..=count).map(|i| Self::new(format!("{prefix}{i}"))).collect()
    }
}
