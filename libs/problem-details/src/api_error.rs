//! Structured errors that know how to describe themselves as a problem

use std::borrow::Cow;

use serde_json::{Map, Value};

use crate::problem::{DEFAULT_STATUS, ProblemDetail};

/// An error that can be rendered as a [`ProblemDetail`].
///
/// Every method has a default, so an implementation only overrides what its
/// error kind actually knows. Anything left empty resolves through the usual
/// problem defaults.
///
/// ```
/// use std::borrow::Cow;
/// use problem_details::ApiError;
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("user {0} not found")]
/// struct UserNotFound(u64);
///
/// impl ApiError for UserNotFound {
///     fn status(&self) -> u16 {
///         404
///     }
///     fn problem_type(&self) -> Cow<'_, str> {
///         Cow::Borrowed("https://errors.example.com/USER_NOT_FOUND")
///     }
/// }
///
/// let problem = UserNotFound(7).to_problem();
/// assert_eq!(problem.title(), "Not Found");
/// assert_eq!(problem.detail(), "user 7 not found");
/// ```
pub trait ApiError: std::error::Error {
    /// URI of the problem type. Empty means the default type.
    fn problem_type(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    /// Short summary. Empty means the reason phrase of [`ApiError::status`].
    fn title(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn status(&self) -> u16 {
        DEFAULT_STATUS
    }

    /// Explanation of this occurrence; the `Display` text unless overridden.
    fn detail(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    /// Hook for adding extension members to the problem being built.
    fn add_extension_members(&self, _extra: &mut Map<String, Value>) {}

    fn to_problem(&self) -> ProblemDetail {
        let mut extra = Map::new();
        self.add_extension_members(&mut extra);
        ProblemDetail::from_parts(
            self.problem_type(),
            self.title(),
            self.status(),
            self.detail(),
            extra,
        )
    }
}
