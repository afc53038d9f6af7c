//! Shared constants for the HTTP surface.

pub(crate) const HEADER_REQUEST_ID: &str = "x-request-id";

pub(crate) const PROBLEM_UNAUTHORIZED: &str = "https://vestibule.dev/problems/unauthorized";
pub(crate) const PROBLEM_FORBIDDEN: &str = "https://vestibule.dev/problems/forbidden";
pub(crate) const PROBLEM_NOT_FOUND: &str = "https://vestibule.dev/problems/not-found";
