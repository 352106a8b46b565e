//! Table view state
//!
//! A table shows the records of one category (or all records) with a
//! category-specific column set. On top of the query pipeline's output it
//! applies per-column filters, header sorting and pagination, in that order.

use std::collections::HashMap;

use chrono::NaiveDate;
use shared::models::{BillingCategory, BillingRecord, FieldValue, RecordField};
use shared::{AppError, AppResult, ErrorCode, PaginatedResponse};

use crate::export::{self, CsvExport};
use crate::query::{Pager, SortState, sort_records};
use crate::utils::format::format_inr;

/// One visible column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub field: RecordField,
    pub label: String,
    /// Rendered as rupees in the table
    pub currency: bool,
}

impl Column {
    fn text(field: RecordField, label: &str) -> Self {
        Self {
            field,
            label: label.to_string(),
            currency: false,
        }
    }

    fn money(field: RecordField, label: impl Into<String>) -> Self {
        Self {
            field,
            label: label.into(),
            currency: true,
        }
    }

    /// Display text of this column for `record`; "-" when the field is absent
    pub fn cell(&self, record: &BillingRecord) -> String {
        match record.field(self.field) {
            Some(FieldValue::Number(n)) if self.currency => format_inr(n),
            Some(value) => value.display(),
            None => "-".to_string(),
        }
    }
}

/// Columns shown for `category`; `None` is the all-categories view
pub fn columns_for(category: Option<BillingCategory>) -> Vec<Column> {
    let mut columns = vec![
        Column::text(RecordField::Date, "Date"),
        Column::text(RecordField::BillNos, "Bill Nos."),
    ];

    let Some(category) = category else {
        columns.extend([
            Column::text(RecordField::Category, "Category"),
            Column::money(RecordField::GrossAmount, "Gross Amt."),
            Column::money(RecordField::TotalBillAmount, "Total Bill Amt."),
            Column::money(RecordField::TotalAmount, "Total Amount"),
        ]);
        return columns;
    };

    let config = category.config();
    columns.extend([
        Column::money(RecordField::GrossAmount, "Gross Amt."),
        Column::money(RecordField::Cgst, format!("CGST {}%", config.cgst_rate.normalize())),
        Column::money(RecordField::Sgst, format!("SGST {}%", config.sgst_rate.normalize())),
        Column::money(RecordField::TotalBillAmount, "Total Bill Amt."),
    ]);

    match category {
        BillingCategory::Sweets => columns.extend([
            Column::money(RecordField::OnlineSales, "Online Sales"),
            Column::money(RecordField::CashSales, "Cash Sales"),
        ]),
        BillingCategory::KhajurChocolate => columns.extend([
            Column::money(RecordField::KhajurAmount, "Khajur Amt."),
            Column::money(RecordField::ChocolateAmount, "Chocolate Amt."),
        ]),
        BillingCategory::CakesBakery => {}
    }

    columns.push(Column::money(RecordField::TotalAmount, "Total Amount"));
    columns
}

#[derive(Debug, Clone)]
pub struct TableView {
    category: Option<BillingCategory>,
    columns: Vec<Column>,
    column_filters: HashMap<RecordField, String>,
    sort: SortState,
    pager: Pager,
}

impl TableView {
    pub fn new(category: Option<BillingCategory>) -> Self {
        Self {
            category,
            columns: columns_for(category),
            column_filters: HashMap::new(),
            sort: SortState::default(),
            pager: Pager::default(),
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> AppResult<Self> {
        self.pager = Pager::new(page_size)?;
        Ok(self)
    }

    pub fn category(&self) -> Option<BillingCategory> {
        self.category
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    /// Set the filter text of one column; empty text removes the filter
    pub fn set_column_filter(&mut self, field: RecordField, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.column_filters.remove(&field);
        } else {
            self.column_filters.insert(field, value);
        }
    }

    pub fn column_filter(&self, field: RecordField) -> Option<&str> {
        self.column_filters.get(&field).map(String::as_str)
    }

    pub fn clear_column_filters(&mut self) {
        self.column_filters.clear();
    }

    pub fn toggle_sort(&mut self, field: RecordField) {
        self.sort.toggle(field);
    }

    /// Header click addressed by the field's UI key ("totalAmount")
    pub fn toggle_sort_key(&mut self, key: &str) -> AppResult<()> {
        let field = RecordField::from_key(key).ok_or_else(|| {
            AppError::new(ErrorCode::UnknownSortField).with_detail("field", key.to_string())
        })?;
        self.toggle_sort(field);
        Ok(())
    }

    pub fn set_page_size(&mut self, size: usize) -> AppResult<()> {
        self.pager.set_page_size(size)
    }

    pub fn first_page(&mut self) {
        self.pager.first();
    }

    pub fn previous_page(&mut self) {
        self.pager.previous();
    }

    pub fn next_page(&mut self, total: usize) {
        self.pager.next(total);
    }

    pub fn last_page(&mut self, total: usize) {
        self.pager.last(total);
    }

    pub fn go_to_page(&mut self, page: usize, total: usize) {
        self.pager.go_to(page, total);
    }

    fn passes_column_filters(&self, record: &BillingRecord) -> bool {
        self.column_filters.iter().all(|(field, needle)| {
            let needle = needle.to_lowercase();
            record
                .field(*field)
                .is_some_and(|v| v.display().to_lowercase().contains(&needle))
        })
    }

    /// Every row of the table across all pages: in scope, column-filtered, sorted
    pub fn rows(&self, records: &[BillingRecord]) -> Vec<BillingRecord> {
        let mut rows: Vec<BillingRecord> = records
            .iter()
            .filter(|r| self.category.is_none_or(|c| r.category() == c))
            .filter(|r| self.passes_column_filters(r))
            .cloned()
            .collect();
        sort_records(&mut rows, &self.sort);
        rows
    }

    /// Current page of rows; the page is re-clamped to the row count first
    pub fn page(&mut self, records: &[BillingRecord]) -> PaginatedResponse<BillingRecord> {
        let rows = self.rows(records);
        self.pager.clamp(rows.len());
        self.pager.paginate(&rows)
    }

    /// "1-10 of 42"
    pub fn range_label(&self, total: usize) -> String {
        self.pager.range_label(total)
    }

    /// CSV of every row (all pages) in the visible column order
    pub fn export_csv(&self, records: &[BillingRecord], today: NaiveDate) -> CsvExport {
        let rows = self.rows(records);
        CsvExport {
            filename: export::export_filename(self.category, today),
            content: export::render_csv(&self.columns, &rows),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use shared::models::{CategorySplit, TaxBreakdown};

    use crate::query::SortDirection;

    fn record(id: &str, day: u32, total: Decimal, split: CategorySplit) -> BillingRecord {
        BillingRecord {
            id: id.to_string(),
            date: NaiveDate::from_ymd_opt(2026, 10, day).unwrap(),
            bill_nos: format!("{}-{}", day * 10, day * 10 + 9),
            split,
            tax: TaxBreakdown {
                gross_amount: total,
                cgst: Decimal::ZERO,
                sgst: Decimal::ZERO,
                total_bill_amount: total,
            },
            total_amount: total,
        }
    }

    fn sweets(cash: Decimal, total: Decimal) -> CategorySplit {
        CategorySplit::Sweets {
            cash_sales: cash,
            online_sales: total - cash,
        }
    }

    fn records() -> Vec<BillingRecord> {
        (1..=12)
            .map(|day| {
                let total = Decimal::from(1000 * day);
                record(&format!("s{day}"), day, total, sweets(Decimal::from(day), total))
            })
            .chain([record("c1", 5, dec!(11800), CategorySplit::CakesBakery)])
            .collect()
    }

    fn labels(columns: &[Column]) -> Vec<&str> {
        columns.iter().map(|c| c.label.as_str()).collect()
    }

    #[test]
    fn test_column_sets() {
        assert_eq!(
            labels(&columns_for(Some(BillingCategory::Sweets))),
            [
                "Date",
                "Bill Nos.",
                "Gross Amt.",
                "CGST 2.5%",
                "SGST 2.5%",
                "Total Bill Amt.",
                "Online Sales",
                "Cash Sales",
                "Total Amount"
            ]
        );
        assert_eq!(
            labels(&columns_for(Some(BillingCategory::KhajurChocolate)))[3..],
            [
                "CGST 6%",
                "SGST 6%",
                "Total Bill Amt.",
                "Khajur Amt.",
                "Chocolate Amt.",
                "Total Amount"
            ]
        );
        assert_eq!(
            labels(&columns_for(Some(BillingCategory::CakesBakery))),
            [
                "Date",
                "Bill Nos.",
                "Gross Amt.",
                "CGST 9%",
                "SGST 9%",
                "Total Bill Amt.",
                "Total Amount"
            ]
        );
        assert_eq!(
            labels(&columns_for(None)),
            ["Date", "Bill Nos.", "Category", "Gross Amt.", "Total Bill Amt.", "Total Amount"]
        );
    }

    #[test]
    fn test_rows_are_scoped_to_category() {
        let view = TableView::new(Some(BillingCategory::CakesBakery));
        let rows = view.rows(&records());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "c1");

        assert_eq!(TableView::new(None).rows(&records()).len(), 13);
    }

    #[test]
    fn test_column_filter_and_sort() {
        let mut view = TableView::new(Some(BillingCategory::Sweets));
        view.set_column_filter(RecordField::BillNos, "1");
        view.toggle_sort(RecordField::TotalAmount);
        view.toggle_sort(RecordField::TotalAmount);
        assert_eq!(view.sort(), SortState::by(RecordField::TotalAmount, SortDirection::Desc));

        let ids: Vec<String> = view.rows(&records()).into_iter().map(|r| r.id).collect();
        // bill ranges containing "1": 10-19, 100-109, 110-119, 120-129
        assert_eq!(ids, ["s12", "s11", "s10", "s1"]);

        view.set_column_filter(RecordField::BillNos, "");
        assert_eq!(view.column_filter(RecordField::BillNos), None);
        assert_eq!(view.rows(&records()).len(), 12);
    }

    #[test]
    fn test_pages_concatenate_to_rows() {
        let all = records();
        let mut view = TableView::new(None);
        view.toggle_sort(RecordField::Date);
        let rows = view.rows(&all);

        let mut collected = Vec::new();
        loop {
            let page = view.page(&all);
            let more = page.has_next();
            collected.extend(page.data);
            if !more {
                break;
            }
            view.next_page(rows.len());
        }
        assert_eq!(collected, rows);
        assert_eq!(view.range_label(rows.len()), "11-13 of 13");
    }

    #[test]
    fn test_page_clamps_when_rows_shrink() {
        let all = records();
        let mut view = TableView::new(Some(BillingCategory::Sweets));
        view.last_page(12);
        assert_eq!(view.pager().page(), 2);

        view.set_column_filter(RecordField::Date, "2026-10-0");
        let page = view.page(&all);
        assert_eq!(page.page, 1);
        assert_eq!(page.data.len(), 9);
    }

    #[test]
    fn test_cells() {
        let columns = columns_for(Some(BillingCategory::Sweets));
        let r = record("s", 3, dec!(123456.5), sweets(dec!(5000), dec!(123456.5)));
        let cells: Vec<String> = columns.iter().map(|c| c.cell(&r)).collect();
        assert_eq!(cells[0], "2026-10-03");
        assert_eq!(cells[1], "30-39");
        assert_eq!(cells[2], "₹1,23,456.5");
        assert_eq!(cells[7], "₹5,000");

        let cakes = record("c", 3, dec!(100), CategorySplit::CakesBakery);
        assert_eq!(Column::money(RecordField::CashSales, "Cash Sales").cell(&cakes), "-");
    }

    #[test]
    fn test_toggle_sort_by_key() {
        let mut view = TableView::new(None);
        view.toggle_sort_key("totalAmount").unwrap();
        assert_eq!(view.sort(), SortState::by(RecordField::TotalAmount, SortDirection::Asc));

        let err = view.toggle_sort_key("notes").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownSortField);
        assert_eq!(err.details.unwrap()["field"], "notes");
        assert_eq!(view.sort(), SortState::by(RecordField::TotalAmount, SortDirection::Asc));
    }

    #[test]
    fn test_invalid_page_size() {
        let mut view = TableView::new(None);
        assert!(view.set_page_size(30).is_err());
        assert!(view.set_page_size(25).is_ok());
        assert!(TableView::new(None).with_page_size(7).is_err());
    }
}
