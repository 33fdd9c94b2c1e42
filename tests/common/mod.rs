//! Common test utilities for the policies API core.
//!
//! Fixtures are loaded into explicit values and handed to the code under
//! test, so tests can run concurrently without shared mutable state.

#![allow(dead_code)]

use policies_api_core::authorization::{RequestAuthenticator, StaticRbacAuthorizer};
use policies_api_core::pagination::PaginationLinks;
use policies_api_core::{
    ApiConfig, ApiVersion, IdentityToken, InMemoryCounter, OrgScopedCounter, PageWindow,
};
use serde_json::{Value, json};

/// Permission needed to list policies.
pub const POLICIES_READ: &str = "policies:policies:read";

/// Organization all fixture identities belong to.
pub const FIXTURE_ORG_ID: &str = "org-id-1234";

/// Route `log` output to the test harness. Safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Load a raw identity header value from `tests/fixtures/identities`.
///
/// The value is returned exactly as stored, trailing newline included.
pub fn load_identity_header(name: &str) -> String {
    let path = format!(
        "{}/tests/fixtures/identities/{}",
        env!("CARGO_MANIFEST_DIR"),
        name
    );
    std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load fixture: {}", path))
}

/// Identity headers of the three fixture callers.
#[derive(Debug, Clone)]
pub struct TestIdentities {
    /// User with access rights
    pub with_access: String,
    /// Hans Dampf has no RBAC access rights
    pub rbac_no_access: String,
    /// Account number is empty
    pub no_account: String,
    /// Account of the user with access rights
    pub account_id: String,
    /// Organization of the user with access rights
    pub org_id: String,
}

impl TestIdentities {
    pub fn load() -> Self {
        let with_access = load_identity_header("rhid.txt");
        let principal = IdentityToken::from_header(&with_access)
            .decode()
            .expect("rhid.txt must decode");

        Self {
            account_id: principal.account_id().to_string(),
            org_id: principal.org_id().to_string(),
            with_access,
            rbac_no_access: load_identity_header("rhid_hans.txt"),
            no_account: load_identity_header("rhid_no_account.txt"),
        }
    }
}

/// RBAC collaborator granting the fixture user read access to policies.
pub async fn fixture_authorizer(identities: &TestIdentities) -> StaticRbacAuthorizer {
    let authorizer = StaticRbacAuthorizer::strict();
    authorizer.grant(&identities.account_id, POLICIES_READ).await;
    let hans = IdentityToken::from_header(&identities.rbac_no_access)
        .decode()
        .expect("rhid_hans.txt must decode");
    authorizer.register(hans.account_id()).await;
    authorizer
}

pub async fn fixture_authenticator(
    identities: &TestIdentities,
    config: &ApiConfig,
) -> RequestAuthenticator<StaticRbacAuthorizer> {
    RequestAuthenticator::with_config(fixture_authorizer(identities).await, config)
}

/// Minimal stand-in for the policies listing endpoint.
///
/// Returns the response body a real endpoint would, with `data` holding
/// placeholder entries for the requested window.
pub async fn list_policies(
    counter: &InMemoryCounter,
    config: &ApiConfig,
    version: ApiVersion,
    org_id: &str,
    window: PageWindow,
) -> Value {
    let total = counter.count(org_id).await.unwrap() as usize;
    let base = config.collection_path(version, "policies");
    let links = PaginationLinks::build(&base, window, total);

    let start = window.offset.min(total);
    let end = window.offset.saturating_add(window.limit).min(total);
    let data: Vec<Value> = (start..end)
        .map(|i| json!({ "id": format!("policy-{}", i), "orgId": org_id }))
        .collect();

    json!({
        "meta": { "count": total },
        "links": links,
        "data": data,
    })
}
