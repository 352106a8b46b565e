//! Core module: configuration and session state

pub mod config;
pub mod state;

pub use config::Config;
pub use state::{BillingSession, BillingStore};
