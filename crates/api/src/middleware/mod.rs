//! Request extractors shared by handlers.
//!
//! - [`organization::CallerOrganization`] -- the organization the request is made on behalf of.

pub mod organization;
