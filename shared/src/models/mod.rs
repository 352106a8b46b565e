//! Data models for the billing desk
//!
//! - [`category`]: billing categories and their GST profiles
//! - [`billing_record`]: bill entries and their derived fields
//! - [`filter`]: query filters

pub mod billing_record;
pub mod category;
pub mod filter;

pub use billing_record::{
    BillingRecord, BillingRecordCreate, CategorySplit, FieldValue, RecordField, TaxBreakdown,
};
pub use category::{BillingCategory, CategoryConfig};
pub use filter::{DateFilter, DatePreset, DateRange, FilterOptions, FilterParams};
