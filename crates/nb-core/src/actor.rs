//! Actors issuing requests

use crate::comment::Comment;
use crate::types::ActorId;
use serde::{Deserialize, Serialize};

/// A registered principal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Unique actor identifier
    pub id: ActorId,
    /// Login name
    pub username: String,
    /// Site staff (admin) flag; grants nothing over other users' comments
    #[serde(default)]
    pub is_staff: bool,
}

impl Actor {
    /// Create a regular user
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            id: ActorId::new(),
            username: username.into(),
            is_staff: false,
        }
    }

    /// Create a staff user
    pub fn staff(username: impl Into<String>) -> Self {
        Self {
            is_staff: true,
            ..Self::new(username)
        }
    }

    /// Whether this actor wrote the comment
    pub fn is_author_of(&self, comment: &Comment) -> bool {
        self.id == comment.author_id
    }
}
