pub mod error;
pub mod id;
pub mod money;
pub mod provider;
pub mod withdrawal;
