//! Error types for identity decoding, request admission and link validation.
//!
//! Every error in this crate is a deterministic function of its input, so
//! none of them are retryable. Identity errors reject the request outright;
//! pagination errors surface as verification failures.

/// Failures while turning an identity header into a [`Principal`].
///
/// Any of these means the token is malformed. The caller must reject the
/// request; no default principal is ever substituted.
///
/// [`Principal`]: crate::identity::Principal
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    /// The token is not valid standard-alphabet base64
    #[error("Malformed identity: invalid base64 encoding: {message}")]
    InvalidBase64 { message: String },

    /// The decoded bytes are not valid UTF-8
    #[error("Malformed identity: decoded token is not valid UTF-8")]
    InvalidUtf8,

    /// The decoded text is not a JSON document of the expected shape
    #[error("Malformed identity: invalid JSON: {message}")]
    InvalidJson { message: String },

    /// A required field is absent
    #[error("Malformed identity: missing required field '{field}'")]
    MissingField { field: String },

    /// A required field is present but not a string
    #[error("Malformed identity: field '{field}' must be a string, got {actual}")]
    InvalidFieldType { field: String, actual: String },
}

impl IdentityError {
    /// Create an invalid base64 error
    pub fn invalid_base64(message: impl Into<String>) -> Self {
        Self::InvalidBase64 {
            message: message.into(),
        }
    }

    /// Create an invalid JSON error
    pub fn invalid_json(message: impl Into<String>) -> Self {
        Self::InvalidJson {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create a field type mismatch error
    pub fn invalid_field_type(field: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::InvalidFieldType {
            field: field.into(),
            actual: actual.into(),
        }
    }
}

/// Failures while checking the navigation links of a paginated response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaginationLinkError {
    /// The links mapping has no entry for the requested relation
    #[error("Rel [{relation}] not found")]
    MissingRelation { relation: String },

    /// The relation's URL does not end in the expected page window
    #[error("Url for rel [{relation}] should end in [{expected_suffix}], but was [{url}]")]
    LinkMismatch {
        relation: String,
        url: String,
        expected_suffix: String,
    },
}

impl PaginationLinkError {
    /// Create a missing relation error
    pub fn missing_relation(relation: impl Into<String>) -> Self {
        Self::MissingRelation {
            relation: relation.into(),
        }
    }

    /// Create a link mismatch error
    pub fn link_mismatch(
        relation: impl Into<String>,
        url: impl Into<String>,
        expected_suffix: impl Into<String>,
    ) -> Self {
        Self::LinkMismatch {
            relation: relation.into(),
            url: url.into(),
            expected_suffix: expected_suffix.into(),
        }
    }

    /// The relation this error refers to
    pub fn relation(&self) -> &str {
        match self {
            Self::MissingRelation { relation } | Self::LinkMismatch { relation, .. } => relation,
        }
    }
}

/// Failures raised while admitting a request.
///
/// Denials are not errors: they are reported as an
/// [`AccessTier`](crate::authorization::AccessTier) on the admitted request.
#[derive(Debug, thiserror::Error)]
pub enum AdmissionError {
    /// The identity header could not be decoded
    #[error(transparent)]
    MalformedIdentity(#[from] IdentityError),

    /// The request carries no identity header at all
    #[error("Missing identity header '{header}'")]
    MissingIdentityHeader { header: String },

    /// The role-based access control collaborator failed to answer
    #[error("RBAC authorizer error: {0}")]
    Authorizer(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl AdmissionError {
    /// Wrap an authorizer failure
    pub fn authorizer<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Authorizer(Box::new(error))
    }

    /// HTTP status the request-admission layer answers with
    pub fn http_status(&self) -> u16 {
        match self {
            Self::MalformedIdentity(_) | Self::MissingIdentityHeader { .. } => 401,
            Self::Authorizer(_) => 503,
        }
    }
}

/// Configuration loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration document could not be parsed
    #[error("Invalid configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration value is out of range
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

impl ConfigError {
    /// Create an invalid value error
    pub fn invalid_value(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Result type for identity decoding
pub type IdentityResult<T> = Result<T, IdentityError>;

/// Result type for pagination link checks
pub type PaginationResult<T> = Result<T, PaginationLinkError>;

/// Result type for request admission
pub type AdmissionResult<T> = Result<T, AdmissionError>;
