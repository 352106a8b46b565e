//! Shared types for the billing desk
//!
//! Domain models, the unified error system, and the paginated response type
//! used by the billing engine and its UI collaborators.

pub mod error;
pub mod models;
pub mod query;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{BillingCategory, BillingRecord, CategorySplit, FilterOptions, TaxBreakdown};
pub use query::PaginatedResponse;
