pub mod adapters;
pub mod config;
pub mod domain;
pub mod services;

use {domain::provider::AtlanticGateway, services::withdrawal::PollPolicy, std::sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn AtlanticGateway>,
    pub poll_policy: PollPolicy,
}
