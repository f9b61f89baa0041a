#![allow(dead_code)]

use atlantic_payout::AppState;
use atlantic_payout::domain::error::PayoutError;
use atlantic_payout::domain::id::{ApiKey, TransactionId};
use atlantic_payout::domain::provider::{
    AccountProfile, AtlanticGateway, GatewayFuture, TransferSnapshot,
};
use atlantic_payout::domain::withdrawal::{TransferOrder, TransferStatus};
use atlantic_payout::services::withdrawal::PollPolicy;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// In-memory gateway that replays scripted responses.
///
/// Once the status script runs dry every further poll reports `pending`.
pub struct ScriptedGateway {
    profile: Result<AccountProfile, PayoutError>,
    create: Result<TransferSnapshot, PayoutError>,
    statuses: Mutex<VecDeque<Result<TransferSnapshot, PayoutError>>>,
    pub profile_calls: AtomicU32,
    pub create_calls: AtomicU32,
    pub status_calls: AtomicU32,
    pub orders: Mutex<Vec<TransferOrder>>,
    pub polled_ids: Mutex<Vec<String>>,
}

impl ScriptedGateway {
    pub fn with_balance(balance: u64) -> Self {
        Self {
            profile: Ok(AccountProfile {
                balance,
                account_name: "Toko Sinar".into(),
            }),
            create: Ok(snapshot("TRX-1", "success")),
            statuses: Mutex::new(VecDeque::new()),
            profile_calls: AtomicU32::new(0),
            create_calls: AtomicU32::new(0),
            status_calls: AtomicU32::new(0),
            orders: Mutex::new(Vec::new()),
            polled_ids: Mutex::new(Vec::new()),
        }
    }

    pub fn profile_fails(mut self, message: &str) -> Self {
        self.profile = Err(PayoutError::Upstream(message.into()));
        self
    }

    pub fn create_returns(mut self, snapshot: TransferSnapshot) -> Self {
        self.create = Ok(snapshot);
        self
    }

    pub fn create_fails(mut self, message: &str) -> Self {
        self.create = Err(PayoutError::Upstream(message.into()));
        self
    }

    pub fn then_status(self, status: &str) -> Self {
        self.statuses
            .lock()
            .unwrap()
            .push_back(Ok(snapshot("TRX-1", status)));
        self
    }

    pub fn then_status_snapshot(self, snapshot: TransferSnapshot) -> Self {
        self.statuses.lock().unwrap().push_back(Ok(snapshot));
        self
    }

    pub fn then_status_fails(self, message: &str) -> Self {
        self.statuses
            .lock()
            .unwrap()
            .push_back(Err(PayoutError::Upstream(message.into())));
        self
    }

    pub fn polls(&self) -> u32 {
        self.status_calls.load(Ordering::SeqCst)
    }

    pub fn last_order(&self) -> TransferOrder {
        self.orders
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no transfer was created")
    }
}

impl AtlanticGateway for ScriptedGateway {
    fn fetch_profile<'a>(&'a self, _api_key: &'a ApiKey) -> GatewayFuture<'a, AccountProfile> {
        self.profile_calls.fetch_add(1, Ordering::SeqCst);
        let result = self.profile.clone();
        Box::pin(async move { result })
    }

    fn create_transfer<'a>(
        &'a self,
        _api_key: &'a ApiKey,
        order: &'a TransferOrder,
    ) -> GatewayFuture<'a, TransferSnapshot> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.orders.lock().unwrap().push(order.clone());
        let result = self.create.clone();
        Box::pin(async move { result })
    }

    fn transfer_status<'a>(
        &'a self,
        _api_key: &'a ApiKey,
        id: &'a TransactionId,
    ) -> GatewayFuture<'a, TransferSnapshot> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        self.polled_ids.lock().unwrap().push(id.as_str().to_string());
        let result = self
            .statuses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(snapshot(id.as_str(), "pending")));
        Box::pin(async move { result })
    }
}

pub fn snapshot(id: &str, status: &str) -> TransferSnapshot {
    TransferSnapshot {
        transaction_id: Some(TransactionId::new(id)),
        status: Some(TransferStatus::from(status)),
    }
}

pub fn fast_policy(max_attempts: u32) -> PollPolicy {
    PollPolicy {
        max_attempts,
        interval: Duration::from_millis(1),
    }
}

pub fn app_state(gateway: Arc<ScriptedGateway>, poll_policy: PollPolicy) -> AppState {
    AppState {
        gateway,
        poll_policy,
    }
}
