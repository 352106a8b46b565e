//! CSV export
//!
//! The header row holds the column labels and each record becomes one line
//! of raw field values in column order. Values are joined with commas and are
//! not quoted or escaped, so a bill range containing a comma shifts the
//! columns of its line.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use shared::models::{BillingCategory, BillingRecord};
use shared::{AppError, AppResult, ErrorCode};

use crate::table::Column;

/// A rendered export, ready to be saved or handed to a download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: String,
    pub content: String,
}

impl CsvExport {
    /// Write the export into `dir`, returning the file path
    pub fn write_to(&self, dir: impl AsRef<Path>) -> AppResult<PathBuf> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(AppError::new(ErrorCode::ExportDirMissing)
                .with_detail("dir", dir.display().to_string()));
        }

        let path = dir.join(&self.filename);
        std::fs::write(&path, &self.content).map_err(|e| {
            let message = format!("Failed to write export: {}", e);
            AppError::with_message(ErrorCode::ExportFailed, message)
                .with_detail("path", path.display().to_string())
        })?;

        tracing::info!(path = %path.display(), bytes = self.content.len(), "CSV export written");
        Ok(path)
    }

    /// Number of data lines (header excluded)
    pub fn row_count(&self) -> usize {
        self.content.lines().count().saturating_sub(1)
    }
}

/// `{category}-records-{YYYY-MM-DD}.csv`, with "all" for the all-categories view
pub fn export_filename(category: Option<BillingCategory>, date: NaiveDate) -> String {
    let scope = category.map_or("all", |c| c.slug());
    format!("{}-records-{}.csv", scope, date.format("%Y-%m-%d"))
}

/// Header line plus one line per row; absent fields become empty cells
pub fn render_csv(columns: &[Column], rows: &[BillingRecord]) -> String {
    let header = columns
        .iter()
        .map(|c| c.label.as_str())
        .collect::<Vec<_>>()
        .join(",");

    let lines = rows.iter().map(|record| {
        columns
            .iter()
            .map(|c| record.field(c.field).map(|v| v.display()).unwrap_or_default())
            .collect::<Vec<_>>()
            .join(",")
    });

    std::iter::once(header)
        .chain(lines)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use shared::models::{CategorySplit, TaxBreakdown};

    use crate::table::columns_for;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()
    }

    fn sweets_record() -> BillingRecord {
        BillingRecord {
            id: "bill-1".to_string(),
            date: date(),
            bill_nos: "3000-3009".to_string(),
            split: CategorySplit::Sweets {
                cash_sales: dec!(420),
                online_sales: dec!(10080),
            },
            tax: TaxBreakdown {
                gross_amount: dec!(10000.00),
                cgst: dec!(250.00),
                sgst: dec!(250.00),
                total_bill_amount: dec!(10500.00),
            },
            total_amount: dec!(10500),
        }
    }

    #[test]
    fn test_filename() {
        assert_eq!(
            export_filename(Some(BillingCategory::KhajurChocolate), date()),
            "khajur-chocolate-records-2026-10-15.csv"
        );
        assert_eq!(export_filename(None, date()), "all-records-2026-10-15.csv");
    }

    #[test]
    fn test_render_csv() {
        let columns = columns_for(Some(BillingCategory::Sweets));
        let csv = render_csv(&columns, &[sweets_record()]);
        assert_eq!(
            csv,
            "Date,Bill Nos.,Gross Amt.,CGST 2.5%,SGST 2.5%,Total Bill Amt.,Online Sales,Cash Sales,Total Amount\n\
             2026-10-15,3000-3009,10000,250,250,10500,10080,420,10500"
        );
    }

    #[test]
    fn test_missing_field_is_empty_cell() {
        let columns = columns_for(Some(BillingCategory::KhajurChocolate));
        let csv = render_csv(&columns, &[sweets_record()]);
        let line = csv.lines().nth(1).unwrap();
        assert_eq!(line, "2026-10-15,3000-3009,10000,250,250,10500,,,10500");
    }

    #[test]
    fn test_header_only_when_empty() {
        let columns = columns_for(Some(BillingCategory::CakesBakery));
        let export = CsvExport {
            filename: "x.csv".to_string(),
            content: render_csv(&columns, &[]),
        };
        assert_eq!(export.row_count(), 0);
        assert!(export.content.starts_with("Date,Bill Nos."));
    }

    #[test]
    fn test_write_to_dir() {
        let dir = tempfile::tempdir().unwrap();
        let export = CsvExport {
            filename: export_filename(None, date()),
            content: "Date\n2026-10-15".to_string(),
        };
        let path = export.write_to(dir.path()).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "Date\n2026-10-15");

        let err = export.write_to(dir.path().join("missing")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ExportDirMissing);
    }
}
