pub mod api_errors;
pub mod atlantic_client;
pub mod envelope;
pub mod http;
