use {
    crate::domain::{
        error::PayoutError,
        id::{ApiKey, TransactionId},
        provider::{AccountProfile, AtlanticGateway, GatewayFuture, TransferSnapshot},
        withdrawal::{TransferOrder, TransferStatus},
    },
    reqwest::{Client, Url},
    serde_json::Value,
    std::time::Duration,
};

pub const DEFAULT_BASE_URL: &str = "https://atlantich2h.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// reqwest-backed Atlantic H2H client. Every call is a form-encoded POST.
#[derive(Clone)]
pub struct AtlanticClient {
    http: Client,
    base_url: Url,
    timeout: Duration,
}

impl AtlanticClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, PayoutError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| PayoutError::Upstream(format!("invalid Atlantic base URL: {e}")))?;
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PayoutError::Upstream(format!("http client: {e}")))?;

        Ok(Self {
            http,
            base_url,
            timeout,
        })
    }

    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        let base = url.path().trim_end_matches('/').to_string();
        url.set_path(&format!("{base}/{path}"));
        url
    }

    fn transport_message(&self, err: &reqwest::Error) -> String {
        if err.is_timeout() {
            format!("timeout of {}ms exceeded", self.timeout.as_millis())
        } else {
            err.to_string()
        }
    }

    /// Posts `form` and returns the decoded JSON body. Non-2xx responses become
    /// `Upstream` errors carrying the upstream `message` when it sent one; a 2xx
    /// body that is not JSON decodes to `Null` so callers fall back to defaults.
    async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> Result<Value, PayoutError> {
        let resp = self
            .http
            .post(self.endpoint(path))
            .form(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(endpoint = path, error = %e, "failed to reach Atlantic");
                PayoutError::Upstream(self.transport_message(&e))
            })?;

        let status = resp.status();
        let body_text = resp.text().await.unwrap_or_default();
        let body: Value = serde_json::from_str(&body_text).unwrap_or(Value::Null);

        if !status.is_success() {
            tracing::warn!(
                endpoint = path,
                http_status = status.as_u16(),
                response = %body_text.chars().take(200).collect::<String>(),
                "Atlantic request failed"
            );
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .filter(|m| !m.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()));
            return Err(PayoutError::Upstream(message));
        }

        if body.is_null() {
            tracing::warn!(
                endpoint = path,
                response = %body_text.chars().take(200).collect::<String>(),
                "non-JSON body from Atlantic, using defaults"
            );
        }

        Ok(body)
    }
}

impl AtlanticGateway for AtlanticClient {
    fn fetch_profile<'a>(&'a self, api_key: &'a ApiKey) -> GatewayFuture<'a, AccountProfile> {
        Box::pin(self.fetch_profile_inner(api_key))
    }

    fn create_transfer<'a>(
        &'a self,
        api_key: &'a ApiKey,
        order: &'a TransferOrder,
    ) -> GatewayFuture<'a, TransferSnapshot> {
        Box::pin(self.create_transfer_inner(api_key, order))
    }

    fn transfer_status<'a>(
        &'a self,
        api_key: &'a ApiKey,
        id: &'a TransactionId,
    ) -> GatewayFuture<'a, TransferSnapshot> {
        Box::pin(self.transfer_status_inner(api_key, id))
    }
}

impl AtlanticClient {
    async fn fetch_profile_inner(&self, api_key: &ApiKey) -> Result<AccountProfile, PayoutError> {
        let body = self
            .post_form("get_profile", &[("api_key", api_key.expose())])
            .await?;
        Ok(profile_from_body(&body))
    }

    async fn create_transfer_inner(
        &self,
        api_key: &ApiKey,
        order: &TransferOrder,
    ) -> Result<TransferSnapshot, PayoutError> {
        let nominal = order.nominal.value().to_string();
        let body = self
            .post_form(
                "transfer/create",
                &[
                    ("api_key", api_key.expose()),
                    ("ref_id", order.reference_id.as_str()),
                    ("kode_bank", order.bank_code.as_str()),
                    ("nomor_akun", order.account_number.as_str()),
                    ("nama_pemilik", order.owner_name.as_str()),
                    ("nominal", nominal.as_str()),
                ],
            )
            .await?;
        Ok(snapshot_from_body(&body))
    }

    async fn transfer_status_inner(
        &self,
        api_key: &ApiKey,
        id: &TransactionId,
    ) -> Result<TransferSnapshot, PayoutError> {
        let body = self
            .post_form(
                "transfer/status",
                &[("api_key", api_key.expose()), ("id", id.as_str())],
            )
            .await?;
        Ok(snapshot_from_body(&body))
    }
}

// ── Payload decoding ────────────────────────────────────────────────────────

pub fn profile_from_body(body: &Value) -> AccountProfile {
    let data = &body["data"];
    let mut profile = AccountProfile::default();

    if let Some(balance) = integer_field(&data["balance"]) {
        profile.balance = balance;
    }
    if let Some(name) = data["name"].as_str().filter(|n| !n.is_empty()) {
        profile.account_name = name.to_string();
    }
    profile
}

pub fn snapshot_from_body(body: &Value) -> TransferSnapshot {
    let data = &body["data"];
    let transaction_id = match &data["id"] {
        Value::String(s) if !s.is_empty() => Some(TransactionId::new(s.clone())),
        Value::Number(n) => Some(TransactionId::new(n.to_string())),
        _ => None,
    };
    let status = data["status"]
        .as_str()
        .filter(|s| !s.is_empty())
        .map(TransferStatus::from);

    TransferSnapshot {
        transaction_id,
        status,
    }
}

/// Atlantic sends balances as numbers or numeric strings. Anything negative
/// or unreadable counts as absent.
fn integer_field(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f.trunc() as u64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|f| *f >= 0.0).map(|f| f.trunc() as u64))
        }
        _ => None,
    }
}
