use {
    crate::domain::{
        error::PayoutError,
        id::{ApiKey, ReferenceId, TransactionId},
        money::{Nominal, resolve_nominal},
        provider::AtlanticGateway,
        withdrawal::{
            OutcomeKind, TransferOrder, TransferStatus, ValidatedWithdrawal, WithdrawStage,
            WithdrawalOutcome, WithdrawalRequest,
        },
    },
    std::time::Duration,
};

const PENDING_FOLLOW_UP: &str = "Status masih pending. Silakan cek manual nanti";

/// Bounds on the status-polling loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub max_attempts: u32,
    pub interval: Duration,
}

impl PollPolicy {
    /// Worst-case time spent waiting between polls.
    pub fn budget(&self) -> Duration {
        self.interval * self.max_attempts
    }
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 30,
            interval: Duration::from_secs(2),
        }
    }
}

/// Drives one withdrawal from validation to a terminal outcome.
///
/// Upstream rejections mentioning "Saldo tidak cukup" surface as
/// `InsufficientBalance` no matter which step produced them. A transfer that
/// is still pending once the polling budget is spent is *not* an error: it
/// returns a `PendingTimeout` outcome.
#[tracing::instrument(
    name = "withdraw",
    skip_all,
    fields(
        stage = tracing::field::Empty,
        reference_id = tracing::field::Empty,
        transaction_id = tracing::field::Empty,
    )
)]
pub async fn run_withdrawal(
    gateway: &dyn AtlanticGateway,
    policy: &PollPolicy,
    request: WithdrawalRequest,
) -> Result<WithdrawalOutcome, PayoutError> {
    enter(WithdrawStage::Validating);
    let request = request.validate()?;

    execute(gateway, policy, request)
        .await
        .map_err(PayoutError::remap_insufficient)
}

async fn execute(
    gateway: &dyn AtlanticGateway,
    policy: &PollPolicy,
    request: ValidatedWithdrawal,
) -> Result<WithdrawalOutcome, PayoutError> {
    enter(WithdrawStage::CheckingBalance);
    let profile = gateway.fetch_profile(&request.api_key).await?;

    enter(WithdrawStage::ResolvingAmount);
    let nominal = resolve_nominal(
        profile.balance,
        request.amount.as_ref(),
        request.withdraw_all,
    )?;
    tracing::info!(
        balance = profile.balance,
        nominal = nominal.value(),
        withdraw_all = request.withdraw_all,
        "nominal resolved"
    );

    enter(WithdrawStage::CreatingTransfer);
    let order = TransferOrder {
        reference_id: ReferenceId::generate(),
        bank_code: request.service.bank_code().to_string(),
        account_number: request.account_number.clone(),
        owner_name: TransferOrder::DEFAULT_OWNER.to_string(),
        nominal,
    };
    tracing::Span::current().record("reference_id", tracing::field::display(&order.reference_id));

    let created = gateway.create_transfer(&request.api_key, &order).await?;
    if let Some(id) = &created.transaction_id {
        tracing::Span::current().record("transaction_id", tracing::field::display(id));
    }
    let status = created
        .status
        .unwrap_or_else(|| TransferStatus::Other("unknown".into()));
    tracing::info!(status = %status, bank_code = %order.bank_code, "transfer created");

    let outcome = match status {
        TransferStatus::Success => WithdrawalOutcome {
            kind: OutcomeKind::Success,
            message: format!(
                "Withdraw berhasil! Rp {} telah dikirim ke {}",
                nominal.to_rupiah(),
                request.service
            ),
            transaction_id: created.transaction_id,
            reference_id: order.reference_id,
            amount: nominal,
            status: TransferStatus::Success,
            polls: 0,
        },
        TransferStatus::Pending => match created.transaction_id {
            Some(id) => {
                enter(WithdrawStage::Polling);
                poll_until_settled(
                    gateway,
                    policy,
                    &request.api_key,
                    id,
                    order.reference_id,
                    nominal,
                )
                .await?
            }
            None => {
                // Nothing to poll with; report the created status as-is.
                tracing::warn!("pending transfer has no transaction id, needs manual follow-up");
                WithdrawalOutcome {
                    kind: OutcomeKind::PendingTimeout,
                    message: PENDING_FOLLOW_UP.into(),
                    transaction_id: None,
                    reference_id: order.reference_id,
                    amount: nominal,
                    status: TransferStatus::Pending,
                    polls: 0,
                }
            }
        },
        other => WithdrawalOutcome {
            kind: OutcomeKind::Other,
            message: format!("Withdraw {other}"),
            transaction_id: created.transaction_id,
            reference_id: order.reference_id,
            amount: nominal,
            status: other,
            polls: 0,
        },
    };

    enter(WithdrawStage::Terminal);
    tracing::info!(
        status = %outcome.status,
        polls = outcome.polls,
        outcome = ?outcome.kind,
        "withdrawal finished"
    );
    Ok(outcome)
}

async fn poll_until_settled(
    gateway: &dyn AtlanticGateway,
    policy: &PollPolicy,
    api_key: &ApiKey,
    transaction_id: TransactionId,
    reference_id: ReferenceId,
    nominal: Nominal,
) -> Result<WithdrawalOutcome, PayoutError> {
    for attempt in 1..=policy.max_attempts {
        tokio::time::sleep(policy.interval).await;

        let snapshot = gateway.transfer_status(api_key, &transaction_id).await?;
        match snapshot.status {
            Some(TransferStatus::Pending) | None => {
                tracing::debug!(attempt, "transfer still pending");
            }
            Some(TransferStatus::Success) => {
                return Ok(WithdrawalOutcome {
                    kind: OutcomeKind::Success,
                    message: format!("Withdraw berhasil! Rp {} telah dikirim", nominal.to_rupiah()),
                    transaction_id: Some(transaction_id),
                    reference_id,
                    amount: nominal,
                    status: TransferStatus::Success,
                    polls: attempt,
                });
            }
            Some(other) => {
                return Ok(WithdrawalOutcome {
                    kind: OutcomeKind::Other,
                    message: format!("Withdraw {other}"),
                    transaction_id: Some(transaction_id),
                    reference_id,
                    amount: nominal,
                    status: other,
                    polls: attempt,
                });
            }
        }
    }

    tracing::warn!(
        attempts = policy.max_attempts,
        "transfer still pending after polling budget, needs manual follow-up"
    );
    Ok(WithdrawalOutcome {
        kind: OutcomeKind::PendingTimeout,
        message: PENDING_FOLLOW_UP.into(),
        transaction_id: Some(transaction_id),
        reference_id,
        amount: nominal,
        status: TransferStatus::Pending,
        polls: policy.max_attempts,
    })
}

fn enter(stage: WithdrawStage) {
    tracing::Span::current().record("stage", stage.as_str());
    tracing::debug!(stage = stage.as_str(), "withdraw stage");
}
