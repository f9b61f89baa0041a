use thiserror::Error;

/// Upstream message fragment Atlantic uses when the account cannot cover a transfer.
pub const UPSTREAM_INSUFFICIENT_MARKER: &str = "Saldo tidak cukup";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PayoutError {
    #[error("{message}")]
    MissingField {
        field: &'static str,
        message: &'static str,
    },

    #[error("{0}")]
    InvalidAmount(String),

    #[error("{0}")]
    InsufficientBalance(String),

    #[error("{0}")]
    Upstream(String),

    #[error("{0}")]
    MalformedRequest(String),
}

impl PayoutError {
    pub fn missing(field: &'static str, message: &'static str) -> Self {
        Self::MissingField { field, message }
    }

    /// Rewrites an upstream "Saldo tidak cukup" rejection into an insufficient-balance error.
    pub fn remap_insufficient(self) -> Self {
        match self {
            Self::Upstream(msg) if msg.contains(UPSTREAM_INSUFFICIENT_MARKER) => {
                Self::InsufficientBalance("Saldo tidak cukup untuk melakukan withdraw".into())
            }
            other => other,
        }
    }

    /// Substitutes an endpoint-specific message when the upstream gave none.
    pub fn or_fallback(self, fallback: &str) -> Self {
        match self {
            Self::Upstream(msg) if msg.trim().is_empty() => Self::Upstream(fallback.into()),
            other => other,
        }
    }
}
