use std::sync::Arc;

use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use parking_lot::RwLock;
use shared::{AppError, AppResult};
use shared::models::{BillingRecord, BillingRecordCreate, FilterOptions};

use crate::dashboard::DashboardMetrics;
use crate::form::BillDraft;
use crate::query;
use crate::utils::time::now_in;

#[derive(Debug, Default)]
struct StoreInner {
    records: Vec<BillingRecord>,
    /// Last assigned id number
    last_id: u64,
    sample_loaded: bool,
}

impl StoreInner {
    fn push(&mut self, record: BillingRecordCreate) -> BillingRecord {
        self.last_id += 1;
        let record = record.into_record(format!("bill-{}", self.last_id));
        self.records.push(record.clone());
        record
    }
}

/// Session record collection
///
/// Insertion-ordered and append-only: records are never updated or removed.
/// Ids are `bill-{n}` with `n` increasing across the store's lifetime.
/// Every append happens under the write lock, so readers never observe a
/// partially applied batch.
#[derive(Debug, Default)]
pub struct BillingStore {
    inner: RwLock<StoreInner>,
}

impl BillingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one record, assigning its id
    pub fn append(&self, record: BillingRecordCreate) -> BillingRecord {
        let record = self.inner.write().push(record);
        tracing::info!(
            id = %record.id,
            category = %record.category(),
            total = %record.total_amount,
            "Billing record added"
        );
        record
    }

    /// Add the sample records; only the first call has any effect
    ///
    /// Returns the number of records added.
    pub fn populate(&self, records: Vec<BillingRecordCreate>) -> usize {
        let mut inner = self.inner.write();
        if inner.sample_loaded {
            tracing::warn!("Sample data already loaded, ignoring {} records", records.len());
            return 0;
        }

        let count = records.len();
        for record in records {
            inner.push(record);
        }
        inner.sample_loaded = true;
        drop(inner);

        tracing::info!(count, "Sample data loaded");
        count
    }

    /// True until the sample load has resolved
    pub fn is_loading(&self) -> bool {
        !self.inner.read().sample_loaded
    }

    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().records.is_empty()
    }

    /// Copy of every record in insertion order
    pub fn snapshot(&self) -> Vec<BillingRecord> {
        self.inner.read().records.clone()
    }

    /// Run `f` against the records without copying them
    pub fn with_records<R>(&self, f: impl FnOnce(&[BillingRecord]) -> R) -> R {
        f(&self.inner.read().records)
    }
}

/// One user's view of the store: active filters and search term
#[derive(Debug, Clone)]
pub struct BillingSession {
    store: Arc<BillingStore>,
    timezone: Tz,
    filters: FilterOptions,
    search_term: String,
}

impl BillingSession {
    pub fn new(store: Arc<BillingStore>, timezone: Tz) -> Self {
        Self {
            store,
            timezone,
            filters: FilterOptions::default(),
            search_term: String::new(),
        }
    }

    pub fn store(&self) -> &Arc<BillingStore> {
        &self.store
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn now(&self) -> DateTime<Tz> {
        now_in(self.timezone)
    }

    pub fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    pub fn is_loading(&self) -> bool {
        self.store.is_loading()
    }

    pub fn filters(&self) -> &FilterOptions {
        &self.filters
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn update_filters(&mut self, filters: FilterOptions) {
        tracing::debug!(active = filters.active_count(), "Filters updated");
        self.filters = filters;
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Drop every filter and the search term
    pub fn clear_filters(&mut self) {
        self.filters = FilterOptions::default();
        self.search_term.clear();
    }

    /// Validate a draft, append it and reset the draft
    pub fn submit(&self, draft: &mut BillDraft) -> AppResult<BillingRecord> {
        let create = draft.submit().map_err(|e| {
            let err = AppError::from(e);
            tracing::warn!(
                code = %err.code,
                category = err.code.category().name(),
                "Bill entry rejected: {}",
                err
            );
            err
        })?;
        let record = self.store.append(create);
        draft.reset(self.today());
        Ok(record)
    }

    /// Records passing the active filters and search term, as of `now`
    pub fn visible_records_at(&self, now: &DateTime<Tz>) -> Vec<BillingRecord> {
        self.store
            .with_records(|records| query::query(records, &self.filters, &self.search_term, now))
    }

    pub fn visible_records(&self) -> Vec<BillingRecord> {
        self.visible_records_at(&self.now())
    }

    pub fn dashboard_at(&self, now: &DateTime<Tz>) -> DashboardMetrics {
        self.store.with_records(|records| {
            let visible = query::query(records, &self.filters, &self.search_term, now);
            DashboardMetrics::compute(records, &visible, now)
        })
    }

    pub fn dashboard(&self) -> DashboardMetrics {
        self.dashboard_at(&self.now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::billing_money::{FixedSplit, calculate};
    use chrono::TimeZone;
    use rust_decimal_macros::dec;
    use shared::models::{BillingCategory, DatePreset};

    const TZ: Tz = chrono_tz::Asia::Kolkata;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    fn create(date: NaiveDate, category: BillingCategory) -> BillingRecordCreate {
        calculate(dec!(11800), category, &mut FixedSplit::default())
            .unwrap()
            .into_create(date, "1-9")
    }

    #[test]
    fn test_append_assigns_increasing_ids() {
        let store = BillingStore::new();
        let a = store.append(create(day(1), BillingCategory::Sweets));
        let b = store.append(create(day(2), BillingCategory::Sweets));
        assert_eq!(a.id, "bill-1");
        assert_eq!(b.id, "bill-2");
        assert_eq!(store.snapshot(), vec![a, b]);
    }

    #[test]
    fn test_populate_only_once() {
        let store = BillingStore::new();
        store.append(create(day(1), BillingCategory::Sweets));
        assert!(store.is_loading());

        let added = store.populate(vec![
            create(day(3), BillingCategory::CakesBakery),
            create(day(2), BillingCategory::CakesBakery),
        ]);
        assert_eq!(added, 2);
        assert!(!store.is_loading());

        assert_eq!(store.populate(vec![create(day(4), BillingCategory::Sweets)]), 0);
        let ids: Vec<String> = store.snapshot().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, ["bill-1", "bill-2", "bill-3"]);
    }

    #[test]
    fn test_session_filters_and_dashboard() {
        let store = Arc::new(BillingStore::new());
        store.populate(vec![
            create(day(15), BillingCategory::Sweets),
            create(day(14), BillingCategory::CakesBakery),
            create(day(1), BillingCategory::KhajurChocolate),
        ]);
        let now = TZ.with_ymd_and_hms(2026, 10, 15, 18, 0, 0).unwrap();
        let mut session = BillingSession::new(store, TZ);

        session.update_filters(FilterOptions::new().with_preset(DatePreset::Today));
        assert_eq!(session.visible_records_at(&now).len(), 1);

        let metrics = session.dashboard_at(&now);
        assert_eq!(metrics.total_entries, 1);
        assert_eq!(metrics.total_sales, dec!(11800));
        assert_eq!(metrics.this_month_sales, dec!(35400));

        session.set_search_term("cakes");
        assert!(session.visible_records_at(&now).is_empty());

        session.clear_filters();
        assert!(session.filters().is_empty());
        assert_eq!(session.search_term(), "");
        assert_eq!(session.visible_records_at(&now).len(), 3);
    }

    #[test]
    fn test_session_submit_resets_draft() {
        let store = Arc::new(BillingStore::new());
        let session = BillingSession::new(store.clone(), TZ);

        let mut draft = BillDraft::new(BillingCategory::Sweets, day(10));
        draft.set_bill_start("10");
        draft.set_bill_end("19");
        draft.set_total_amount("10500");

        let err = session.submit(&mut draft).unwrap_err();
        assert_eq!(err.code, shared::ErrorCode::NotYetCalculated);
        assert!(store.is_empty());

        draft.calculate(&mut FixedSplit::default()).unwrap();
        let record = session.submit(&mut draft).unwrap();
        assert_eq!(record.bill_nos, "10-19");
        assert_eq!(record.date, day(10));
        assert_eq!(store.len(), 1);
        assert_eq!(draft.total_amount(), "");
        assert!(!draft.is_calculated());
    }
}
