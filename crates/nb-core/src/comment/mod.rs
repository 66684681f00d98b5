//! Comment system module
//!
//! Handles comment models, form cleaning, moderation, access control, and
//! thread ordering.

pub mod builder;
pub mod form;
pub mod model;
pub mod moderation;
pub mod policy;
pub mod thread;

pub use builder::CommentBuilder;
pub use form::{CommentForm, FormErrors};
pub use model::*;
pub use moderation::{ModerationFilter, Rejected};
pub use policy::CommentAccessPolicy;
pub use thread::CommentThreadQuery;
