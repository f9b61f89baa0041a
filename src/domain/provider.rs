use {
    super::error::PayoutError,
    super::id::{ApiKey, TransactionId},
    super::withdrawal::{TransferOrder, TransferStatus},
    serde::Serialize,
    std::{future::Future, pin::Pin},
};

pub const DEFAULT_ACCOUNT_NAME: &str = "Atlantic H2H";

/// Balance and holder name from `get_profile`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountProfile {
    pub balance: u64,
    pub account_name: String,
}

impl Default for AccountProfile {
    fn default() -> Self {
        Self {
            balance: 0,
            account_name: DEFAULT_ACCOUNT_NAME.to_string(),
        }
    }
}

/// What `transfer/create` and `transfer/status` report. Either field may be
/// missing from a malformed upstream payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferSnapshot {
    pub transaction_id: Option<TransactionId>,
    pub status: Option<TransferStatus>,
}

pub type GatewayFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, PayoutError>> + Send + 'a>>;

/// The three Atlantic H2H calls the service relies on.
pub trait AtlanticGateway: Send + Sync {
    fn fetch_profile<'a>(&'a self, api_key: &'a ApiKey) -> GatewayFuture<'a, AccountProfile>;

    fn create_transfer<'a>(
        &'a self,
        api_key: &'a ApiKey,
        order: &'a TransferOrder,
    ) -> GatewayFuture<'a, TransferSnapshot>;

    fn transfer_status<'a>(
        &'a self,
        api_key: &'a ApiKey,
        id: &'a TransactionId,
    ) -> GatewayFuture<'a, TransferSnapshot>;
}
