//! Access tier classification.

use crate::identity::Principal;
use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Answer of the role-based access control collaborator for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RbacDecision {
    /// The principal's roles grant access to the requested resource
    Granted,
    /// The principal's roles do not grant access
    Denied,
}

impl RbacDecision {
    /// Whether access was granted.
    pub fn is_granted(self) -> bool {
        matches!(self, RbacDecision::Granted)
    }
}

impl From<bool> for RbacDecision {
    fn from(granted: bool) -> Self {
        if granted {
            RbacDecision::Granted
        } else {
            RbacDecision::Denied
        }
    }
}

/// Outcome of authorization classification for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessTier {
    /// Request is admitted
    FullAccess,
    /// Caller has a tenant but lacks the required role
    RbacDenied,
    /// Caller's identity carries no account number
    NoAccount,
}

impl AccessTier {
    /// Classify a principal.
    ///
    /// Guards are evaluated in order and the first match wins:
    ///
    /// 1. empty account number → [`AccessTier::NoAccount`]
    /// 2. RBAC denies → [`AccessTier::RbacDenied`]
    /// 3. otherwise → [`AccessTier::FullAccess`]
    ///
    /// The account check runs before RBAC is consulted, so a caller without
    /// an account is never reported as merely lacking a role.
    pub fn resolve(principal: &Principal, rbac: RbacDecision) -> Self {
        let tier = if !principal.has_account() {
            AccessTier::NoAccount
        } else if !rbac.is_granted() {
            AccessTier::RbacDenied
        } else {
            AccessTier::FullAccess
        };
        trace!("Resolved {} with rbac {:?} to {:?}", principal, rbac, tier);
        tier
    }

    /// Whether the request may proceed to resource access.
    pub fn is_admitted(self) -> bool {
        matches!(self, AccessTier::FullAccess)
    }

    /// HTTP status the request-admission layer answers with.
    pub fn http_status(self) -> u16 {
        match self {
            AccessTier::FullAccess => 200,
            AccessTier::RbacDenied | AccessTier::NoAccount => 403,
        }
    }

    /// Machine-readable reason for a denial, `None` when admitted.
    ///
    /// Both denials share a status code, so this is what lets a client tell
    /// "no tenant context" apart from "insufficient role".
    pub fn denial_code(self) -> Option<&'static str> {
        match self {
            AccessTier::FullAccess => None,
            AccessTier::RbacDenied => Some("rbac_denied"),
            AccessTier::NoAccount => Some("missing_account"),
        }
    }
}

impl fmt::Display for AccessTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AccessTier::FullAccess => "full_access",
            AccessTier::RbacDenied => "rbac_denied",
            AccessTier::NoAccount => "no_account",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_access() {
        let principal = Principal::new("1234", "org-id-1234");
        let tier = AccessTier::resolve(&principal, RbacDecision::Granted);
        assert_eq!(tier, AccessTier::FullAccess);
        assert!(tier.is_admitted());
        assert_eq!(tier.http_status(), 200);
        assert_eq!(tier.denial_code(), None);
    }

    #[test]
    fn test_rbac_denied() {
        let principal = Principal::new("1234", "org-id-1234");
        let tier = AccessTier::resolve(&principal, RbacDecision::Denied);
        assert_eq!(tier, AccessTier::RbacDenied);
        assert!(!tier.is_admitted());
        assert_eq!(tier.http_status(), 403);
        assert_eq!(tier.denial_code(), Some("rbac_denied"));
    }

    #[test]
    fn test_empty_account_takes_precedence() {
        let principal = Principal::new("", "org-id-1234");
        assert_eq!(
            AccessTier::resolve(&principal, RbacDecision::Granted),
            AccessTier::NoAccount
        );
        assert_eq!(
            AccessTier::resolve(&principal, RbacDecision::Denied),
            AccessTier::NoAccount
        );
    }

    #[test]
    fn test_denials_are_distinguishable() {
        assert_ne!(
            AccessTier::RbacDenied.denial_code(),
            AccessTier::NoAccount.denial_code()
        );
        assert_eq!(
            AccessTier::RbacDenied.http_status(),
            AccessTier::NoAccount.http_status()
        );
    }

    #[test]
    fn test_rbac_decision_from_bool() {
        assert_eq!(RbacDecision::from(true), RbacDecision::Granted);
        assert_eq!(RbacDecision::from(false), RbacDecision::Denied);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&AccessTier::NoAccount).unwrap();
        assert_eq!(json, "\"no_account\"");
        assert_eq!(AccessTier::RbacDenied.to_string(), "rbac_denied");
    }
}
