//! Free-text search over every field of a record

use shared::models::BillingRecord;

/// Case-insensitive substring match against any field's string form.
/// An empty term matches everything.
pub fn matches(record: &BillingRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    record
        .field_strings()
        .any(|value| value.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use shared::models::{CategorySplit, TaxBreakdown};

    fn record() -> BillingRecord {
        BillingRecord {
            id: "bill-7".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 10, 3).unwrap(),
            bill_nos: "3060-3069".to_string(),
            split: CategorySplit::KhajurChocolate {
                khajur_amount: dec!(8000),
                chocolate_amount: dec!(2000),
            },
            tax: TaxBreakdown {
                gross_amount: dec!(8928.57),
                cgst: dec!(535.71),
                sgst: dec!(535.71),
                total_bill_amount: dec!(9999.99),
            },
            total_amount: dec!(10000),
        }
    }

    #[test]
    fn test_empty_term_matches() {
        assert!(matches(&record(), ""));
    }

    #[test]
    fn test_matches_any_field() {
        let r = record();
        assert!(matches(&r, "3060"));
        assert!(matches(&r, "KHAJUR"));
        assert!(matches(&r, "2026-10"));
        assert!(matches(&r, "535.71"));
        assert!(matches(&r, "bill-7"));
        assert!(!matches(&r, "sweets"));
        assert!(!matches(&r, "cashSales"));
    }
}
