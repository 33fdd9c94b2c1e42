//! Request admission: identity header in, access decision out.

use crate::authorization::{AccessTier, RbacAuthorizer, RbacDecision};
use crate::config::ApiConfig;
use crate::error::{AdmissionError, AdmissionResult};
use crate::identity::{IDENTITY_HEADER, IdentityToken, Principal};
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use uuid::Uuid;

/// A request whose identity decoded and whose access tier is known.
///
/// Carries the tier rather than failing on denial, so the caller can answer
/// with the matching status and error body.
#[derive(Debug, Clone)]
pub struct AdmittedRequest {
    request_id: String,
    principal: Principal,
    tier: AccessTier,
    admitted_at: DateTime<Utc>,
}

impl AdmittedRequest {
    /// Unique identifier for this request
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// The caller decoded from the identity header
    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    /// Access tier resolved for the caller
    pub fn tier(&self) -> AccessTier {
        self.tier
    }

    /// When the decision was made
    pub fn admitted_at(&self) -> DateTime<Utc> {
        self.admitted_at
    }

    /// Organization to scope resource access to, only for admitted requests.
    pub fn org_scope(&self) -> Option<&str> {
        self.tier.is_admitted().then(|| self.principal.org_id())
    }
}

/// Admits requests by decoding their identity header and consulting RBAC.
#[derive(Debug, Clone)]
pub struct RequestAuthenticator<R> {
    authorizer: R,
    identity_header: String,
}

impl<R: RbacAuthorizer> RequestAuthenticator<R> {
    /// Create an authenticator backed by the given RBAC collaborator.
    pub fn new(authorizer: R) -> Self {
        Self {
            authorizer,
            identity_header: IDENTITY_HEADER.to_string(),
        }
    }

    /// Create an authenticator reading the identity header named in `config`.
    pub fn with_config(authorizer: R, config: &ApiConfig) -> Self {
        Self {
            authorizer,
            identity_header: config.identity_header.clone(),
        }
    }

    /// The RBAC collaborator in use.
    pub fn authorizer(&self) -> &R {
        &self.authorizer
    }

    /// Admit a request given all of its headers.
    ///
    /// Header names are matched case-insensitively.
    ///
    /// # Errors
    ///
    /// * [`AdmissionError::MissingIdentityHeader`] if no identity header is present
    /// * any error of [`admit`](Self::admit)
    pub async fn admit_headers<'a, I>(
        &self,
        headers: I,
        resource: &str,
    ) -> AdmissionResult<AdmittedRequest>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let value = headers
            .into_iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(&self.identity_header))
            .map(|(_, value)| value)
            .ok_or_else(|| {
                debug!("Request without {} header", self.identity_header);
                AdmissionError::MissingIdentityHeader {
                    header: self.identity_header.clone(),
                }
            })?;
        self.admit(value, resource).await
    }

    /// Admit a request carrying `header_value` for `resource`.
    ///
    /// RBAC is not consulted for callers without an account number, since
    /// the outcome would be `NoAccount` regardless.
    ///
    /// # Errors
    ///
    /// * [`AdmissionError::MalformedIdentity`] if the header does not decode
    /// * [`AdmissionError::Authorizer`] if the RBAC collaborator fails
    pub async fn admit(
        &self,
        header_value: &str,
        resource: &str,
    ) -> AdmissionResult<AdmittedRequest> {
        let token = IdentityToken::from_header(header_value);
        let principal = token.decode().map_err(|e| {
            warn!("Rejecting request with malformed identity: {}", e);
            AdmissionError::from(e)
        })?;

        let rbac = if principal.has_account() {
            self.authorizer
                .check_access(&principal, resource)
                .await
                .map_err(|e| {
                    warn!("RBAC check failed for {}: {}", principal, e);
                    AdmissionError::authorizer(e)
                })?
        } else {
            RbacDecision::Denied
        };

        let tier = AccessTier::resolve(&principal, rbac);
        let request = AdmittedRequest {
            request_id: Uuid::new_v4().to_string(),
            principal,
            tier,
            admitted_at: Utc::now(),
        };

        if tier.is_admitted() {
            debug!(
                "Admitted request {} for {} on {}",
                request.request_id, request.principal, resource
            );
        } else {
            info!(
                "Denied request {} for {} on {}: {}",
                request.request_id, request.principal, resource, tier
            );
        }
        Ok(request)
    }
}
