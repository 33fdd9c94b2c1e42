//! Identity header decoding tests.

mod common;

use common::{FIXTURE_ORG_ID, TestIdentities};
use policies_api_core::identity::{IdentityToken, encode_document, encode_identity};
use policies_api_core::{IdentityError, Principal};
use proptest::prelude::*;
use serde_json::json;

#[test]
fn test_fixture_identities_decode() {
    let identities = TestIdentities::load();
    assert_eq!(identities.account_id, "1234");
    assert_eq!(identities.org_id, FIXTURE_ORG_ID);

    let hans = IdentityToken::from_header(&identities.rbac_no_access)
        .decode()
        .unwrap();
    assert_eq!(hans, Principal::new("1111", FIXTURE_ORG_ID));

    let no_account = IdentityToken::from_header(&identities.no_account)
        .decode()
        .unwrap();
    assert_eq!(no_account.account_id(), "");
    assert_eq!(no_account.org_id(), FIXTURE_ORG_ID);
}

#[test]
fn test_raw_fixture_needs_trimming() {
    // Stored fixtures end in a newline, which is not part of the token.
    let identities = TestIdentities::load();
    let result = IdentityToken::new(identities.with_access.clone()).decode();
    assert!(matches!(result, Err(IdentityError::InvalidBase64 { .. })));
}

#[test]
fn test_truncated_token_is_rejected() {
    let token = encode_identity("1234", FIXTURE_ORG_ID);
    let truncated = &token.as_str()[..token.as_str().len() / 2];

    let result = IdentityToken::new(truncated).decode();
    assert!(result.is_err());
}

#[test]
fn test_identity_must_be_an_object() {
    let token = encode_document(&json!({ "identity": "1234" }));
    assert!(matches!(
        token.decode(),
        Err(IdentityError::InvalidJson { .. })
    ));
}

proptest! {
    #[test]
    fn test_round_trip_preserves_claims(
        account in "[ -~]{0,32}",
        org in "\\PC{0,32}",
    ) {
        let principal = encode_identity(&account, &org).decode().unwrap();
        prop_assert_eq!(principal.account_id(), account.as_str());
        prop_assert_eq!(principal.org_id(), org.as_str());
    }

    #[test]
    fn test_missing_org_is_always_rejected(account in "[0-9]{1,10}") {
        let token = encode_document(&json!({ "identity": { "account_number": account } }));
        prop_assert_eq!(
            token.decode(),
            Err(IdentityError::missing_field("identity.org_id"))
        );
    }

    #[test]
    fn test_non_base64_is_rejected(garbage in "[!@#$%^&*(){}<>?]{1,20}") {
        let result = IdentityToken::new(garbage).decode();
        let is_invalid_base64 = matches!(result, Err(IdentityError::InvalidBase64 { .. }));
        prop_assert!(is_invalid_base64);
    }
}
