//! Who may edit or delete a comment

use super::model::Comment;
use crate::actor::Actor;

/// Author-only mutation rule, shared by edit and delete.
///
/// Callers report a denial as not found, never as forbidden.
pub struct CommentAccessPolicy;

impl CommentAccessPolicy {
    /// True iff the actor wrote the comment
    pub fn can_mutate(actor: &Actor, comment: &Comment) -> bool {
        actor.is_author_of(comment)
    }

    /// Same rule for a request that may be anonymous
    pub fn can_mutate_opt(actor: Option<&Actor>, comment: &Comment) -> bool {
        actor.is_some_and(|actor| Self::can_mutate(actor, comment))
    }
}
