//! Todo DTOs shared by the client core and the dashboard.
//!
//! # Design
//! Mirrors the todo service's schema but is defined independently so the
//! client never links against Axum. An item has no identity: two items with
//! the same text and flag are indistinguishable apart from list position.

use serde::{Deserialize, Serialize};

/// A single todo entry as sent to and returned by the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    pub text: String,
    #[serde(default)]
    pub is_done: bool,
}

impl TodoItem {
    /// A not-yet-done item with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_done: false,
        }
    }
}
