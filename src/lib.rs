//! Request authentication and pagination contract for a multi-tenant
//! policies API.
//!
//! Provides decoding of the `x-rh-identity` header into a tenant-scoped
//! principal, classification of that principal into an access tier, and
//! generation and validation of paginated listing links.
//!
//! # Core Components
//!
//! - [`IdentityToken`] - Decodes the identity header into a [`Principal`]
//! - [`AccessTier`] - Ordered classification into full access, RBAC denied or no account
//! - [`RequestAuthenticator`] - Admits requests through an [`RbacAuthorizer`]
//! - [`pagination::validate`] - Checks a listing's navigation links against a [`PageWindow`]
//!
//! # Quick Start
//!
//! ```rust
//! use policies_api_core::{AccessTier, PageWindow, RbacDecision, encode_identity};
//! use policies_api_core::pagination::{self, PaginationLinks};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let principal = encode_identity("1234", "org-id-1234").decode()?;
//! assert_eq!(
//!     AccessTier::resolve(&principal, RbacDecision::Granted),
//!     AccessTier::FullAccess
//! );
//!
//! let links = PaginationLinks::build("/api/policies/v1.0/policies", PageWindow::new(10, 0), 25);
//! pagination::validate(&links, "next", PageWindow::new(10, 10))?;
//! # Ok(())
//! # }
//! ```

pub mod authorization;
pub mod config;
pub mod counting;
pub mod error;
pub mod identity;
pub mod pagination;

// Re-export commonly used types for convenience
pub use authorization::{
    AccessTier, AdmittedRequest, RbacAuthorizer, RbacDecision, RequestAuthenticator,
    StaticRbacAuthorizer,
};
pub use config::{ApiConfig, ApiVersion};
pub use counting::{InMemoryCounter, OrgScopedCounter};
pub use error::{AdmissionError, ConfigError, IdentityError, PaginationLinkError};
pub use identity::{IDENTITY_HEADER, IdentityToken, Principal, encode_identity};
pub use pagination::{LinksMap, PageWindow, PaginationLinks};
