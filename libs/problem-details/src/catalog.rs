//! Error catalog support: static `ErrDef` definitions and convenience constructors

use crate::problem::ProblemDetail;
use crate::status;

/// Static error definition from a catalog
///
/// ```
/// use problem_details::ErrDef;
///
/// const ORDER_NOT_FOUND: ErrDef = ErrDef {
///     status: 404,
///     title: "Order not found",
///     type_url: "https://errors.example.com/ORDER_NOT_FOUND",
/// };
///
/// let problem = ORDER_NOT_FOUND.as_problem("No order with id 17");
/// assert_eq!(problem.status_code(), 404);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrDef {
    pub status: u16,
    /// Empty means the reason phrase of `status`.
    pub title: &'static str,
    /// Empty means the default type URL.
    pub type_url: &'static str,
}

impl ErrDef {
    /// A definition carrying only a status; the title is taken from the status table.
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        Self {
            status,
            title: status::reason_phrase(status).unwrap_or(""),
            type_url: "",
        }
    }

    /// Convert this error definition into a problem with the given detail
    #[inline]
    pub fn as_problem(&self, detail: impl Into<String>) -> ProblemDetail {
        ProblemDetail::with_status(self.status)
            .with_title(self.title)
            .with_type(self.type_url)
            .with_detail(detail)
    }
}

pub fn bad_request(detail: impl Into<String>) -> ProblemDetail {
    ProblemDetail::with_status(400).with_detail(detail)
}

pub fn not_found(detail: impl Into<String>) -> ProblemDetail {
    ProblemDetail::with_status(404).with_detail(detail)
}

pub fn conflict(detail: impl Into<String>) -> ProblemDetail {
    ProblemDetail::with_status(409).with_detail(detail)
}

pub fn unprocessable_entity(detail: impl Into<String>) -> ProblemDetail {
    ProblemDetail::with_status(422).with_detail(detail)
}

pub fn internal_error(detail: impl Into<String>) -> ProblemDetail {
    ProblemDetail::with_status(500).with_detail(detail)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::defaults::{DEFAULT_TYPE_URL, NO_DETAIL};

    #[test]
    fn err_def_to_problem_works() {
        let def = ErrDef {
            status: 404,
            title: "Not Found",
            type_url: "https://errors.example.com/TEST_NOT_FOUND",
        };

        let problem = def.as_problem("Resource missing");
        assert_eq!(problem.status_code(), 404);
        assert_eq!(problem.title(), "Not Found");
        assert_eq!(problem.detail(), "Resource missing");
        assert_eq!(
            problem.type_url(),
            "https://errors.example.com/TEST_NOT_FOUND"
        );
    }

    #[test]
    fn err_def_from_status() {
        let def = ErrDef::from_status(429);
        assert_eq!(def.title, "Too Many Requests");
        let problem = def.as_problem("");
        assert_eq!(problem.type_url(), DEFAULT_TYPE_URL);
        assert_eq!(problem.detail(), NO_DETAIL);

        assert_eq!(ErrDef::from_status(999).title, "");
    }

    #[test]
    fn convenience_constructors() {
        let cases = [
            (bad_request("Invalid input"), 400, "Bad Request"),
            (not_found("User not found"), 404, "Not Found"),
            (conflict("Email already exists"), 409, "Conflict"),
            (
                unprocessable_entity("name is required"),
                422,
                "Unprocessable Entity",
            ),
            (
                internal_error("Database connection failed"),
                500,
                "Internal Server Error",
            ),
        ];

        for (problem, status, title) in cases {
            assert_eq!(problem.status_code(), status);
            assert_eq!(problem.title(), title);
            assert_eq!(problem.type_url(), DEFAULT_TYPE_URL);
        }
    }
}
