//! View results

use crate::comment::{Comment, CommentForm, FormErrors};
use crate::news::NewsItem;
use serde::Serialize;

/// Outcome of a state-changing request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Response {
    /// Success or login required; carries the target location
    Redirect { location: String },
    /// Missing record, or a record the actor may not touch
    NotFound,
    /// The form was re-rendered with errors
    FormInvalid { errors: FormErrors },
}

impl Response {
    pub(crate) fn redirect(location: impl Into<String>) -> Self {
        Response::Redirect {
            location: location.into(),
        }
    }

    /// HTTP status this outcome maps to
    pub fn status_code(&self) -> u16 {
        match self {
            Response::Redirect { .. } => 302,
            Response::NotFound => 404,
            Response::FormInvalid { .. } => 200,
        }
    }

    /// Redirect target, if any
    pub fn location(&self) -> Option<&str> {
        match self {
            Response::Redirect { location } => Some(location),
            _ => None,
        }
    }

    /// Form errors, if any
    pub fn form_errors(&self) -> Option<&FormErrors> {
        match self {
            Response::FormInvalid { errors } => Some(errors),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Response::NotFound)
    }
}

/// Home page context
#[derive(Debug, Clone, Serialize)]
pub struct HomePage {
    /// News shown, most recent first
    pub object_list: Vec<NewsItem>,
}

/// News detail page context
#[derive(Debug, Clone, Serialize)]
pub struct DetailPage {
    pub news: NewsItem,
    /// Comments, earliest first
    pub comments: Vec<Comment>,
    /// Empty submission form, present only for an authenticated actor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<CommentForm>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(Response::redirect("/").status_code(), 302);
        assert_eq!(Response::NotFound.status_code(), 404);
        assert_eq!(
            Response::FormInvalid {
                errors: FormErrors::default()
            }
            .status_code(),
            200
        );
    }

    #[test]
    fn test_accessors() {
        let response = Response::redirect("/news/1/#comments");
        assert_eq!(response.location(), Some("/news/1/#comments"));
        assert!(response.form_errors().is_none());
        assert!(!response.is_not_found());
        assert!(Response::NotFound.is_not_found());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Response::NotFound).unwrap();
        assert_eq!(json, r#"{"kind":"not_found"}"#);
    }
}
