use std::fmt;

use thiserror::Error;

/// Classification of failures talking to the hadith content API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamErrorKind {
    /// Connection, DNS or IO failure
    Network,
    /// Client timeout or an elapsed request deadline
    Timeout,
    /// Non-success HTTP status
    Status(u16),
    /// Response body could not be decoded
    Decode,
}

impl UpstreamErrorKind {
    /// Low-cardinality label used in logs and metrics
    pub fn label(&self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::Timeout => "timeout",
            Self::Status(code) if *code >= 500 => "status_5xx",
            Self::Status(_) => "status_4xx",
            Self::Decode => "decode",
        }
    }
}

impl fmt::Display for UpstreamErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status(code) => write!(f, "status {}", code),
            other => f.write_str(other.label()),
        }
    }
}

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Upstream error ({kind}): {message}")]
    Upstream {
        kind: UpstreamErrorKind,
        message: String,
    },

    #[error("Cache error: {message}")]
    Cache { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn upstream(kind: UpstreamErrorKind, message: impl Into<String>) -> Self {
        Self::Upstream {
            kind,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::upstream(UpstreamErrorKind::Network, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::upstream(UpstreamErrorKind::Timeout, message)
    }

    pub fn upstream_status(status: u16, message: impl Into<String>) -> Self {
        Self::upstream(UpstreamErrorKind::Status(status), message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::upstream(UpstreamErrorKind::Decode, message)
    }

    pub fn cache(message: impl Into<String>) -> Self {
        Self::Cache {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns the upstream classification, if this error came from the content API
    pub fn upstream_kind(&self) -> Option<UpstreamErrorKind> {
        match self {
            Self::Upstream { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Label for logs and metrics
    pub fn kind_label(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::Validation { .. } => "validation",
            Self::Configuration { .. } => "configuration",
            Self::Upstream { kind, .. } => kind.label(),
            Self::Cache { .. } => "cache",
            Self::Internal { .. } => "internal",
        }
    }
}
