//! Problem Details for HTTP APIs
//!
//! This crate provides a pure data model for structured API errors, with no
//! dependencies on HTTP frameworks. It includes:
//! - RFC 7807 Problem Details with default-value resolution (`ProblemDetail`)
//! - The HTTP status code → reason phrase table (`status`)
//! - A trait for errors that render themselves as problems (`ApiError`)
//! - Error catalog support (`ErrDef`)
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api_error;
pub mod catalog;
pub mod defaults;
pub mod error;
pub mod problem;
pub mod status;

// Re-export commonly used types
pub use api_error::ApiError;
pub use catalog::ErrDef;
pub use defaults::{DEFAULT_TYPE_URL, Defaults, NO_DETAIL, UNKNOWN_STATUS_TITLE};
pub use error::{Error, Result};
pub use problem::{APPLICATION_PROBLEM_JSON, DEFAULT_STATUS, ProblemDetail, RESERVED_MEMBERS};

/// Helper to attach instance and `trace_id` to a problem
///
/// This is a convenience function for enriching problems with
/// request-specific context before handing them to the HTTP layer.
pub fn finalize(mut p: ProblemDetail, instance: &str, trace_id: Option<String>) -> ProblemDetail {
    p = p.with_instance(instance);
    if let Some(tid) = trace_id {
        p = p.with_trace_id(tid);
    }
    p
}
