pub mod balance;
pub mod withdrawal;
