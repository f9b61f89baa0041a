use {
    crate::domain::{
        provider::AccountProfile,
        withdrawal::{TransferStatus, WithdrawalOutcome},
    },
    serde::Serialize,
};

/// Uniform JSON body returned by every endpoint.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TransferStatus>,
}

impl Envelope {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            balance: None,
            account_name: None,
            transaction_id: None,
            amount: None,
            status: None,
        }
    }
}

impl From<AccountProfile> for Envelope {
    fn from(profile: AccountProfile) -> Self {
        Self {
            success: true,
            balance: Some(profile.balance),
            account_name: Some(profile.account_name),
            ..Self::failure("Saldo berhasil diambil")
        }
    }
}

/// Only an explicit upstream `success` sets `success: true`; failed, unknown
/// and still-pending transfers all come back as a normal 200 with `false`.
impl From<WithdrawalOutcome> for Envelope {
    fn from(outcome: WithdrawalOutcome) -> Self {
        Self {
            success: outcome.is_success(),
            transaction_id: outcome.transaction_id.map(|id| id.into_inner()),
            amount: Some(outcome.amount.value()),
            status: Some(outcome.status),
            ..Self::failure(outcome.message)
        }
    }
}
