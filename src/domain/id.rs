use {
    super::error::PayoutError,
    derive_more::Display,
    serde::{Deserialize, Serialize},
    std::fmt,
    uuid::Uuid,
};

/// Atlantic H2H API key. Never printed: `Debug` and `Display` are redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Rejects absent or blank keys with the user-facing "API Key diperlukan".
    pub fn new(key: Option<String>) -> Result<Self, PayoutError> {
        match key {
            Some(k) if !k.trim().is_empty() => Ok(Self(k)),
            _ => Err(PayoutError::missing("apiKey", "API Key diperlukan")),
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

/// Client-generated transfer reference (`WD_<millis>_<suffix>`).
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceId(String);

impl ReferenceId {
    pub const PREFIX: &'static str = "WD_";

    /// The millisecond stamp keeps references sortable; the tail of a UUIDv7
    /// (its random bits) separates attempts landing in the same millisecond.
    pub fn generate() -> Self {
        let millis = chrono::Utc::now().timestamp_millis();
        let uuid = Uuid::now_v7().simple().to_string();
        let suffix = &uuid[uuid.len() - 12..];
        Self(format!("{}{millis}_{suffix}", Self::PREFIX))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Upstream-assigned transaction identifier.
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
