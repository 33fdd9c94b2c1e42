//! Identity token decoding and encoding.

use crate::error::{IdentityError, IdentityResult};
use crate::identity::Principal;
use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use log::{debug, trace};
use serde::Deserialize;
use serde_json::{Value, json};
use sha2::{Digest, Sha256};
use std::fmt;

/// Standard alphabet; trailing `=` padding is accepted but not required.
const IDENTITY_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

const ACCOUNT_NUMBER_FIELD: &str = "identity.account_number";
const ORG_ID_FIELD: &str = "identity.org_id";

/// Shape of the JSON document inside an identity token.
///
/// Claims are kept as raw values so that absent and mistyped fields can be
/// told apart and reported precisely. Fields not listed here are ignored.
#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(default)]
    identity: Option<RawIdentity>,
}

#[derive(Debug, Deserialize)]
struct RawIdentity {
    #[serde(default)]
    account_number: Option<Value>,
    #[serde(default)]
    org_id: Option<Value>,
}

/// An opaque, base64-encoded identity token as received on a request.
///
/// The token is never persisted and never mutated; decoding it yields a fresh
/// [`Principal`] every time.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct IdentityToken(String);

impl IdentityToken {
    /// Wrap a raw token value as-is.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Wrap an identity header value, dropping surrounding whitespace.
    pub fn from_header(value: &str) -> Self {
        Self(value.trim().to_string())
    }

    /// The raw token text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// SHA-256 hex digest of the token, safe to put in logs.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.0.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Decode the token into a [`Principal`].
    ///
    /// # Errors
    ///
    /// Returns an [`IdentityError`] if the token is not base64, does not
    /// decode to UTF-8 JSON, or lacks a string `identity.account_number` or
    /// `identity.org_id`.
    pub fn decode(&self) -> IdentityResult<Principal> {
        let result = decode_principal(&self.0);
        match &result {
            Ok(principal) => {
                trace!("Decoded identity {} ({})", principal, self.short_fingerprint())
            }
            Err(e) => debug!("Rejected identity token {}: {}", self.short_fingerprint(), e),
        }
        result
    }

    fn short_fingerprint(&self) -> String {
        self.fingerprint()[..12].to_string()
    }
}

// Tokens are credentials; keep them out of debug output.
impl fmt::Debug for IdentityToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IdentityToken")
            .field(&self.short_fingerprint())
            .finish()
    }
}

impl From<&str> for IdentityToken {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for IdentityToken {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Build a token for the given claims.
///
/// Used to produce synthetic identities; the service itself never issues
/// tokens.
pub fn encode_identity(account_number: &str, org_id: &str) -> IdentityToken {
    encode_document(&json!({
        "identity": {
            "account_number": account_number,
            "org_id": org_id,
        }
    }))
}

/// Encode an arbitrary JSON document as a token.
pub fn encode_document(document: &Value) -> IdentityToken {
    IdentityToken(IDENTITY_ENGINE.encode(document.to_string()))
}

fn decode_principal(token: &str) -> IdentityResult<Principal> {
    let bytes = IDENTITY_ENGINE
        .decode(token)
        .map_err(|e| IdentityError::invalid_base64(e.to_string()))?;
    let text = String::from_utf8(bytes).map_err(|_| IdentityError::InvalidUtf8)?;
    let document: RawDocument =
        serde_json::from_str(&text).map_err(|e| IdentityError::invalid_json(e.to_string()))?;

    let identity = document
        .identity
        .ok_or_else(|| IdentityError::missing_field("identity"))?;
    let account_number = required_string(identity.account_number, ACCOUNT_NUMBER_FIELD)?;
    let org_id = required_string(identity.org_id, ORG_ID_FIELD)?;

    Ok(Principal::new(account_number, org_id))
}

fn required_string(value: Option<Value>, field: &str) -> IdentityResult<String> {
    match value {
        None | Some(Value::Null) => Err(IdentityError::missing_field(field)),
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(IdentityError::invalid_field_type(field, value_kind(&other))),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
