//! Resolution of the calling organization.
//!
//! The organization is read from the `X-Organization-Id` header and handed
//! to handlers as a plain value; it is then passed explicitly into the
//! org-scoped store, which performs the actual validity check.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

/// Header carrying the calling organization's id.
pub const ORGANIZATION_HEADER: &str = "x-organization-id";

/// The organization attached to the request, if any.
///
/// A header that is present but not valid UTF-8 resolves to an empty id so
/// it is reported as an invalid organization rather than a missing one.
#[derive(Debug, Clone, Default)]
pub struct CallerOrganization(pub Option<String>);

impl CallerOrganization {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl<S: Send + Sync> FromRequestParts<S> for CallerOrganization {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let org = parts
            .headers
            .get(ORGANIZATION_HEADER)
            .map(|v| v.to_str().unwrap_or_default().trim().to_string());
        Ok(CallerOrganization(org))
    }
}
