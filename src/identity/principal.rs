//! The tenant-scoped caller identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tenant-scoped identity derived from a request's identity token.
///
/// Both values are copied verbatim from the token. An empty account number
/// is representable here on purpose: it is the authorization layer that
/// turns it into a `NoAccount` decision.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Principal {
    account_id: String,
    org_id: String,
}

impl Principal {
    /// Create a principal from already-extracted claims.
    pub fn new(account_id: impl Into<String>, org_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            org_id: org_id.into(),
        }
    }

    /// Account number of the caller (may be empty).
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// Organization the caller belongs to.
    pub fn org_id(&self) -> &str {
        &self.org_id
    }

    /// Whether the token carried a non-empty account number.
    pub fn has_account(&self) -> bool {
        !self.account_id.is_empty()
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "account={} org={}", self.account_id, self.org_id)
    }
}
