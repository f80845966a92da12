//! Canonical pointer events
//!
//! The platform input layer is modeled as a stream of [`PointerEvent`]s
//! already decoded to surface coordinates. A move event carries a snapshot
//! of every live contact because upstream sources coalesce motion: any
//! pending coordinate change on any contact is flushed when a move is
//! delivered. Events serialize as JSON for recorded traces (see
//! [`crate::replay`]).

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Identifier for one touch contact, stable from press to release.
pub type ContactId = i32;

/// One live contact and its latest surface position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub position: Point,
}

impl Contact {
    pub fn new(id: ContactId, x: i32, y: i32) -> Self {
        Self { id, position: Point { x, y } }
    }
}

/// A platform pointer event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointerEvent {
    /// A new contact touched down (the first or any additional one).
    Down { contact: Contact },

    /// Contact `id` lifted.
    Up { id: ContactId },

    /// The gesture was cancelled for contact `id`; handled exactly like
    /// [`Up`](Self::Up).
    Cancel { id: ContactId },

    /// Motion: the latest position of every live contact.
    Move { contacts: Vec<Contact> },

    /// Hover motion without contact (stylus or mouse); never consumed.
    Hover { position: Point },

    /// End-of-batch marker from the input source; nothing to consume.
    Frame,
}
