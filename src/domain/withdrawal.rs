use {
    super::error::PayoutError,
    super::id::{ApiKey, ReferenceId, TransactionId},
    super::money::{Nominal, RequestedAmount},
    serde::{Serialize, Serializer},
    std::fmt,
};

/// E-wallet a withdrawal is sent to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestinationService {
    Dana,
    Ovo,
    Gopay,
    /// Anything else is forwarded to Atlantic as the bank code verbatim.
    Other(String),
}

impl DestinationService {
    pub fn bank_code(&self) -> &str {
        match self {
            Self::Dana => "DANA",
            Self::Ovo => "OVO",
            Self::Gopay => "GOPAY",
            Self::Other(code) => code,
        }
    }
}

/// Only the exact lowercase names the form posts are mapped; anything else,
/// including other casings, is forwarded unchanged.
impl From<&str> for DestinationService {
    fn from(s: &str) -> Self {
        match s {
            "dana" => Self::Dana,
            "ovo" => Self::Ovo,
            "gopay" => Self::Gopay,
            _ => Self::Other(s.to_string()),
        }
    }
}

impl fmt::Display for DestinationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.bank_code().to_uppercase())
    }
}

/// Transfer status as reported by Atlantic. Unknown values are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferStatus {
    Pending,
    Success,
    Failed,
    Other(String),
}

impl TransferStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Success => "success",
            Self::Failed => "failed",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for TransferStatus {
    fn from(s: &str) -> Self {
        match s {
            "pending" => Self::Pending,
            "success" => Self::Success,
            "failed" => Self::Failed,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TransferStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Where the orchestrator currently is. Recorded on the tracing span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawStage {
    Validating,
    CheckingBalance,
    ResolvingAmount,
    CreatingTransfer,
    Polling,
    Terminal,
}

impl WithdrawStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Validating => "validating",
            Self::CheckingBalance => "checking_balance",
            Self::ResolvingAmount => "resolving_amount",
            Self::CreatingTransfer => "creating_transfer",
            Self::Polling => "polling",
            Self::Terminal => "terminal",
        }
    }
}

/// Raw withdrawal input, before validation.
#[derive(Debug, Clone, Default)]
pub struct WithdrawalRequest {
    pub api_key: Option<String>,
    pub service: Option<String>,
    pub account_number: Option<String>,
    pub amount: Option<RequestedAmount>,
    pub withdraw_all: bool,
}

/// A request that passed the `Validating` stage.
#[derive(Debug, Clone)]
pub struct ValidatedWithdrawal {
    pub api_key: ApiKey,
    pub service: DestinationService,
    pub account_number: String,
    pub amount: Option<RequestedAmount>,
    pub withdraw_all: bool,
}

impl WithdrawalRequest {
    pub fn validate(self) -> Result<ValidatedWithdrawal, PayoutError> {
        let api_key = ApiKey::new(self.api_key)?;
        let account_number = non_blank(self.account_number)
            .ok_or_else(|| PayoutError::missing("accountNumber", "Nomor tujuan diperlukan"))?;
        let service = non_blank(self.service)
            .ok_or_else(|| PayoutError::missing("service", "Layanan tujuan diperlukan"))?;

        Ok(ValidatedWithdrawal {
            api_key,
            service: DestinationService::from(service.as_str()),
            account_number,
            amount: self.amount,
            withdraw_all: self.withdraw_all,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Fields sent to `transfer/create`.
#[derive(Debug, Clone)]
pub struct TransferOrder {
    pub reference_id: ReferenceId,
    pub bank_code: String,
    pub account_number: String,
    pub owner_name: String,
    pub nominal: Nominal,
}

impl TransferOrder {
    /// Atlantic requires an owner name; the e-wallet resolves the real one.
    pub const DEFAULT_OWNER: &'static str = "Customer";
}

/// How a withdrawal ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Success,
    /// Upstream reported a non-success terminal status.
    Other,
    /// Still pending after the polling budget was spent.
    PendingTimeout,
}

#[derive(Debug, Clone)]
pub struct WithdrawalOutcome {
    pub kind: OutcomeKind,
    pub transaction_id: Option<TransactionId>,
    pub reference_id: ReferenceId,
    pub amount: Nominal,
    pub status: TransferStatus,
    pub message: String,
    pub polls: u32,
}

impl WithdrawalOutcome {
    pub fn is_success(&self) -> bool {
        self.kind == OutcomeKind::Success
    }
}
