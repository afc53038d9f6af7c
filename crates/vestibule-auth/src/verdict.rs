//! Outcomes produced by the authentication pipeline.

use uuid::Uuid;

/// An authenticated identity returned to the caller.
///
/// Owned by the caller once returned; the resolver keeps nothing across
/// calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// Stable identifier of the resolved identity.
    pub id: Uuid,
    /// Identifier presented in the credentials (e.g. an email address).
    pub identifier: String,
}

/// Single outcome value produced for one request.
///
/// The host maps this to a response: `Exempt` and `Authenticated` proceed,
/// `Unauthenticated` is a 401-class outcome, `Rejected` a 403-class one. The
/// variant never reveals which pipeline stage failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthVerdict {
    /// The requested path is exempt from authentication.
    Exempt,
    /// No usable credential header was presented.
    Unauthenticated,
    /// Credentials were presented but failed resolution.
    Rejected,
    /// Credentials resolved to a known identity.
    Authenticated(Principal),
}
