//! Organization-scoped facade over an [`OrganizationConfigStore`].
//!
//! Every operation first checks that the calling request carries a usable
//! organization. That check is independent of the organization id the caller
//! asks for, and it always runs before the backing store is touched.

use std::sync::Arc;

use crate::error::CoreError;
use crate::org_config::OrganizationConfig;
use crate::store::OrganizationConfigStore;

/// Resolve the organization attached to the calling request.
///
/// `None` means the request carried no organization at all; a blank value is
/// present but unusable.
pub fn resolve_organization(caller: Option<&str>) -> Result<&str, CoreError> {
    let org = caller.ok_or_else(|| {
        CoreError::Unauthorized("expected organization to be set".to_string())
    })?;
    if org.trim().is_empty() {
        return Err(CoreError::InvalidOrganization(
            "organization must not be empty".to_string(),
        ));
    }
    Ok(org)
}

/// Stateless decorator that refuses to reach the store for callers without
/// a valid organization.
pub struct OrgScopedConfigStore<S: ?Sized> {
    store: Arc<S>,
}

impl<S: ?Sized> Clone for OrgScopedConfigStore<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: OrganizationConfigStore + ?Sized> OrgScopedConfigStore<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Get `org_id`'s config, creating the default on first access.
    pub async fn find_or_create(
        &self,
        caller: Option<&str>,
        org_id: &str,
    ) -> Result<OrganizationConfig, CoreError> {
        resolve_organization(caller)?;
        Ok(self.store.find_or_create(org_id).await?)
    }

    /// Replace the stored config for `config.organization_id`.
    ///
    /// The row is find-or-created first so the update never targets a
    /// missing record. Callers validate the payload beforehand.
    pub async fn update(
        &self,
        caller: Option<&str>,
        config: &OrganizationConfig,
    ) -> Result<(), CoreError> {
        resolve_organization(caller)?;
        self.store.find_or_create(&config.organization_id).await?;
        self.store.update(config).await?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
