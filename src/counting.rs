//! Organization-scoped entity counting.
//!
//! The persistence layer behind the policies API is external. Listing
//! responses and their tests only need one thing from it: how many entities
//! an organization owns, which fixes how many pages exist.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Counts the entities stored for an organization.
pub trait OrgScopedCounter: Send + Sync {
    /// Error type for counter operations
    type Error: std::error::Error + Send + Sync + 'static;

    /// Number of entities owned by `org_id`.
    fn count(&self, org_id: &str) -> impl Future<Output = Result<u64, Self::Error>> + Send;
}

/// In-memory counter for tests and local setups.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCounter {
    counts: Arc<RwLock<HashMap<String, u64>>>,
}

impl InMemoryCounter {
    /// Create an empty counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one more entity for `org_id`, returning the new count.
    pub async fn record(&self, org_id: &str) -> u64 {
        let mut counts = self.counts.write().await;
        let count = counts.entry(org_id.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    /// Record `n` entities for `org_id`.
    pub async fn record_many(&self, org_id: &str, n: u64) -> u64 {
        let mut counts = self.counts.write().await;
        let count = counts.entry(org_id.to_string()).or_insert(0);
        *count += n;
        *count
    }

    /// Forget everything recorded for `org_id`.
    pub async fn clear(&self, org_id: &str) {
        let mut counts = self.counts.write().await;
        counts.remove(org_id);
    }
}

impl OrgScopedCounter for InMemoryCounter {
    type Error = std::convert::Infallible;

    async fn count(&self, org_id: &str) -> Result<u64, Self::Error> {
        let counts = self.counts.read().await;
        Ok(counts.get(org_id).copied().unwrap_or(0))
    }
}
