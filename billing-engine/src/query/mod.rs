//! Record query pipeline
//!
//! Filtering always runs in the same order: category, then date, then
//! free-text search. Sorting and pagination are applied afterwards by the
//! table view.
//!
//! - [`date_filter`]: explicit ranges, single dates and presets
//! - [`search`]: case-insensitive search over every field
//! - [`sort`]: header sort state and comparison
//! - [`page`]: page size and navigation

pub mod date_filter;
pub mod page;
pub mod search;
pub mod sort;

use chrono::DateTime;
use chrono_tz::Tz;
use shared::models::{BillingRecord, FilterOptions};

pub use date_filter::{DateWindow, preset_window};
pub use page::{PAGE_SIZES, Pager};
pub use sort::{SortDirection, SortKey, SortState, compare_field, sort_records};

/// Whether one record passes every active filter
pub fn matches(
    record: &BillingRecord,
    filters: &FilterOptions,
    search_term: &str,
    now: &DateTime<Tz>,
) -> bool {
    filters.category.is_none_or(|c| record.category() == c)
        && filters
            .date
            .as_ref()
            .is_none_or(|date| date_filter::matches(record, date, now))
        && search::matches(record, search_term)
}

/// Apply `filters` and `search_term` to `records`, keeping their order
pub fn query(
    records: &[BillingRecord],
    filters: &FilterOptions,
    search_term: &str,
    now: &DateTime<Tz>,
) -> Vec<BillingRecord> {
    let visible: Vec<BillingRecord> = records
        .iter()
        .filter(|r| matches(r, filters, search_term, now))
        .cloned()
        .collect();

    tracing::debug!(
        total = records.len(),
        visible = visible.len(),
        active_filters = filters.active_count(),
        search = !search_term.is_empty(),
        "Applied record filters"
    );
    visible
}
