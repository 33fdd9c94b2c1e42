//! Authorization tiers and request admission.
//!
//! A decoded [`Principal`](crate::identity::Principal) is classified into an
//! [`AccessTier`] from its own claims and the answer of an external role-based
//! access control service. The tier decides the response status before any
//! resource is touched.
//!
//! # Example Usage
//!
//! ```rust
//! use policies_api_core::authorization::{
//!     AccessTier, RequestAuthenticator, StaticRbacAuthorizer,
//! };
//! use policies_api_core::identity::encode_identity;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let authorizer = StaticRbacAuthorizer::new();
//! authorizer.grant("1234", "policies:policies:read").await;
//!
//! let authenticator = RequestAuthenticator::new(authorizer);
//! let header = encode_identity("1234", "org-id-1234");
//! let request = authenticator
//!     .admit(header.as_str(), "policies:policies:read")
//!     .await?;
//!
//! assert_eq!(request.tier(), AccessTier::FullAccess);
//! # Ok(())
//! # }
//! ```

pub mod admission;
pub mod rbac;
pub mod tier;

pub use admission::{AdmittedRequest, RequestAuthenticator};
pub use rbac::{RbacAuthorizer, StaticAuthorizerError, StaticRbacAuthorizer, WILDCARD_PERMISSION};
pub use tier::{AccessTier, RbacDecision};
