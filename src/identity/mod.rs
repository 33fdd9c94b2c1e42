//! Identity header decoding.
//!
//! Every request to the policies API carries an `x-rh-identity` header: an
//! opaque, base64-encoded JSON document describing the caller. The token is
//! treated as already verified by the gateway in front of the service, so
//! this module only checks its shape and extracts the tenant-scoped
//! [`Principal`] used for authorization.
//!
//! # Example
//!
//! ```rust
//! use policies_api_core::identity::{IdentityToken, encode_identity};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let token = encode_identity("1234", "org-id-1234");
//! let principal = IdentityToken::new(token.as_str()).decode()?;
//!
//! assert_eq!(principal.account_id(), "1234");
//! assert_eq!(principal.org_id(), "org-id-1234");
//! # Ok(())
//! # }
//! ```

pub mod principal;
pub mod token;

pub use principal::Principal;
pub use token::{IdentityToken, encode_document, encode_identity};

/// Name of the request header carrying the identity token.
pub const IDENTITY_HEADER: &str = "x-rh-identity";
