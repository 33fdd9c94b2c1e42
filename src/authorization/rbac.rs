//! Role-based access control collaborator.
//!
//! The actual RBAC service is external; this module defines the seam the
//! admission layer calls through and a static in-memory implementation for
//! tests and local setups.

use crate::authorization::RbacDecision;
use crate::identity::Principal;
use log::debug;
use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Permission that grants every resource.
pub const WILDCARD_PERMISSION: &str = "*";

/// Policy-decision point consulted for every admitted identity.
pub trait RbacAuthorizer: Send + Sync {
    /// Error type for authorizer operations
    type Error: std::error::Error + Send + Sync + 'static;

    /// Decide whether the principal's roles grant access to `resource`.
    ///
    /// # Errors
    /// Returns an error if no decision can be made, for example when the
    /// backing service is unreachable.
    fn check_access(
        &self,
        principal: &Principal,
        resource: &str,
    ) -> impl Future<Output = Result<RbacDecision, Self::Error>> + Send;
}

/// Error type for the static authorizer.
#[derive(Debug, thiserror::Error)]
pub enum StaticAuthorizerError {
    #[error("Unknown account: {account_id}")]
    UnknownAccount { account_id: String },
}

/// In-memory authorizer mapping account numbers to granted permissions.
///
/// By default accounts without an entry are denied. A strict authorizer
/// instead fails with [`StaticAuthorizerError::UnknownAccount`].
#[derive(Debug, Clone, Default)]
pub struct StaticRbacAuthorizer {
    grants: Arc<RwLock<HashMap<String, HashSet<String>>>>,
    strict: bool,
}

impl StaticRbacAuthorizer {
    /// Create an authorizer that denies unknown accounts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an authorizer that errors on unknown accounts.
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    /// Grant a permission to an account.
    pub async fn grant(&self, account_id: &str, permission: &str) {
        let mut grants = self.grants.write().await;
        grants
            .entry(account_id.to_string())
            .or_default()
            .insert(permission.to_string());
    }

    /// Register an account with no permissions at all.
    pub async fn register(&self, account_id: &str) {
        let mut grants = self.grants.write().await;
        grants.entry(account_id.to_string()).or_default();
    }

    /// Remove every permission of an account.
    pub async fn revoke_all(&self, account_id: &str) -> bool {
        let mut grants = self.grants.write().await;
        grants.remove(account_id).is_some()
    }
}

impl RbacAuthorizer for StaticRbacAuthorizer {
    type Error = StaticAuthorizerError;

    async fn check_access(
        &self,
        principal: &Principal,
        resource: &str,
    ) -> Result<RbacDecision, Self::Error> {
        let grants = self.grants.read().await;
        match grants.get(principal.account_id()) {
            Some(permissions) => Ok(RbacDecision::from(
                permissions.contains(WILDCARD_PERMISSION) || permissions.contains(resource),
            )),
            None if self.strict => Err(StaticAuthorizerError::UnknownAccount {
                account_id: principal.account_id().to_string(),
            }),
            None => {
                debug!("No RBAC entry for {}, denying {}", principal, resource);
                Ok(RbacDecision::Denied)
            }
        }
    }
}
