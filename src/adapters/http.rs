use {
    super::{api_errors::ApiError, envelope::Envelope},
    crate::{
        AppState,
        domain::{error::PayoutError, money::RequestedAmount, withdrawal::WithdrawalRequest},
        services::{balance::check_balance, withdrawal::run_withdrawal},
    },
    axum::{
        Json, Router,
        extract::{DefaultBodyLimit, State, rejection::JsonRejection},
        http::StatusCode,
        middleware::map_response,
        response::{IntoResponse, Response},
        routing::{get, post},
    },
    serde::Deserialize,
    std::time::Duration,
    tower_http::timeout::TimeoutLayer,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceBody {
    pub api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawBody {
    pub api_key: Option<String>,
    pub service: Option<String>,
    pub account_number: Option<String>,
    pub amount: Option<RequestedAmount>,
    pub withdraw_all: Option<bool>,
}

impl From<WithdrawBody> for WithdrawalRequest {
    fn from(body: WithdrawBody) -> Self {
        Self {
            api_key: body.api_key,
            service: body.service,
            account_number: body.account_number,
            amount: body.amount,
            withdraw_all: body.withdraw_all.unwrap_or(false),
        }
    }
}

/// Routes for the two proxy endpoints plus a liveness check.
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/", get(|| async { "ok" }))
        .route(
            "/api/check-balance",
            post(check_balance_handler).fallback(method_not_allowed),
        )
        .route(
            "/api/withdraw",
            post(withdraw_handler).fallback(method_not_allowed),
        )
        .layer(DefaultBodyLimit::max(16 * 1024))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(map_response(envelope_timeouts))
        .with_state(state)
}

/// `TimeoutLayer` answers with an empty 408; give it the usual JSON envelope.
async fn envelope_timeouts(response: Response) -> Response {
    if response.status() != StatusCode::REQUEST_TIMEOUT {
        return response;
    }
    tracing::error!("request exceeded the service timeout");
    (
        StatusCode::REQUEST_TIMEOUT,
        Json(Envelope::failure("Permintaan melebihi batas waktu")),
    )
        .into_response()
}

async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(serde_json::json!({"message": "Method not allowed"})),
    )
}

fn malformed(rejection: JsonRejection) -> PayoutError {
    PayoutError::MalformedRequest(format!("Body request tidak valid: {}", rejection.body_text()))
}

#[tracing::instrument(name = "check_balance", skip_all)]
pub async fn check_balance_handler(
    State(state): State<AppState>,
    body: Result<Json<BalanceBody>, JsonRejection>,
) -> Result<Json<Envelope>, ApiError> {
    let Json(body) = body.map_err(malformed)?;

    let profile = check_balance(&*state.gateway, body.api_key)
        .await
        .map_err(|e| e.or_fallback("Terjadi kesalahan saat cek saldo"))?;

    Ok(Json(Envelope::from(profile)))
}

#[tracing::instrument(name = "withdraw_request", skip_all, fields(service = tracing::field::Empty))]
pub async fn withdraw_handler(
    State(state): State<AppState>,
    body: Result<Json<WithdrawBody>, JsonRejection>,
) -> Result<Json<Envelope>, ApiError> {
    let Json(body) = body.map_err(malformed)?;
    if let Some(service) = &body.service {
        tracing::Span::current().record("service", service.as_str());
    }

    let outcome = run_withdrawal(&*state.gateway, &state.poll_policy, body.into())
        .await
        .map_err(|e| e.or_fallback("Terjadi kesalahan saat withdraw"))?;

    Ok(Json(Envelope::from(outcome)))
}
