use crate::domain::{
    error::PayoutError,
    id::ApiKey,
    provider::{AccountProfile, AtlanticGateway},
};

/// Reads the current balance straight from Atlantic. Nothing is cached, so
/// two calls may disagree if the account moved in between.
pub async fn check_balance(
    gateway: &dyn AtlanticGateway,
    api_key: Option<String>,
) -> Result<AccountProfile, PayoutError> {
    let api_key = ApiKey::new(api_key)?;
    let profile = gateway.fetch_profile(&api_key).await?;
    tracing::info!(balance = profile.balance, "balance fetched");
    Ok(profile)
}
