//! Unified error system for the billing desk
//!
//! This module provides the error handling surface shared by the engine and
//! its UI collaborators:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: Uniform response envelope
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Bill entry errors
//! - 2xxx: Query errors
//! - 3xxx: Export errors
//! - anything else: System
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! // Create a simple error
//! let err = AppError::new(ErrorCode::NotYetCalculated);
//!
//! // Create an error with details
//! let err = AppError::missing_field("billEnd");
//!
//! // Convert to a response
//! let response = ApiResponse::<()>::error(&err);
//! assert_eq!(response.code, Some(1002));
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
