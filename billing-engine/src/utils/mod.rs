//! Utility module
//!
//! - [`AppError`] / [`AppResult`]: error types (from shared::error)
//! - [`logger`]: tracing setup
//! - [`time`]: business time zone helpers
//! - [`format`]: currency display

pub mod format;
pub mod logger;
pub mod time;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
