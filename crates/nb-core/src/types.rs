//! Core type definitions for newsboard

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use uuid::Uuid;

/// Identifier of a news item, assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NewsId(pub u64);

impl fmt::Display for NewsId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NewsId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(NewsId(s.trim().parse()?))
    }
}

/// Identifier of a comment, assigned by the store in insertion order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CommentId(pub u64);

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CommentId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CommentId(s.trim().parse()?))
    }
}

/// Unique identifier for an actor (registered user)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub Uuid);

impl ActorId {
    /// Generate a new ActorId
    pub fn new() -> Self {
        ActorId(Uuid::new_v4())
    }

    /// Create from UUID string
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(ActorId(Uuid::parse_str(s)?))
    }
}

impl Default for ActorId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_news_id_parse() {
        assert_eq!("12".parse::<NewsId>().unwrap(), NewsId(12));
        assert_eq!(" 3 ".parse::<NewsId>().unwrap(), NewsId(3));
        assert!("abc".parse::<NewsId>().is_err());
    }

    #[test]
    fn test_comment_id_ordering() {
        assert!(CommentId(1) < CommentId(2));
        assert_eq!(CommentId(5).to_string(), "5");
    }

    #[test]
    fn test_actor_id_unique() {
        let a = ActorId::new();
        let b = ActorId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_actor_id_from_string() {
        let id = ActorId::new();
        let parsed = ActorId::from_string(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
        assert!(ActorId::from_string("not-a-uuid").is_err());
    }
}
