//! Billing Record Model
//!
//! A record is immutable once created. The category-specific split fields
//! live in [`CategorySplit`], so a sweets record can never carry a
//! chocolate amount and vice versa.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::category::BillingCategory;

/// GST breakdown derived from a tax-inclusive total, each value at 2dp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxBreakdown {
    pub gross_amount: Decimal,
    pub cgst: Decimal,
    pub sgst: Decimal,
    pub total_bill_amount: Decimal,
}

/// Category tag plus the split fields that category carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "kebab-case")]
pub enum CategorySplit {
    #[serde(rename_all = "camelCase")]
    Sweets {
        cash_sales: Decimal,
        online_sales: Decimal,
    },
    #[serde(rename_all = "camelCase")]
    KhajurChocolate {
        khajur_amount: Decimal,
        chocolate_amount: Decimal,
    },
    CakesBakery,
}

impl CategorySplit {
    pub fn category(&self) -> BillingCategory {
        match self {
            Self::Sweets { .. } => BillingCategory::Sweets,
            Self::KhajurChocolate { .. } => BillingCategory::KhajurChocolate,
            Self::CakesBakery => BillingCategory::CakesBakery,
        }
    }

    /// Sum of the two split parts, `None` for categories without a split
    pub fn parts_total(&self) -> Option<Decimal> {
        match self {
            Self::Sweets {
                cash_sales,
                online_sales,
            } => Some(cash_sales + online_sales),
            Self::KhajurChocolate {
                khajur_amount,
                chocolate_amount,
            } => Some(khajur_amount + chocolate_amount),
            Self::CakesBakery => None,
        }
    }
}

/// Fields of a record, in the order they are listed on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecordField {
    Id,
    Date,
    BillNos,
    Category,
    GrossAmount,
    Cgst,
    Sgst,
    TotalBillAmount,
    OnlineSales,
    CashSales,
    KhajurAmount,
    ChocolateAmount,
    TotalAmount,
}

impl RecordField {
    pub const ALL: [RecordField; 13] = [
        RecordField::Id,
        RecordField::Date,
        RecordField::BillNos,
        RecordField::Category,
        RecordField::GrossAmount,
        RecordField::Cgst,
        RecordField::Sgst,
        RecordField::TotalBillAmount,
        RecordField::OnlineSales,
        RecordField::CashSales,
        RecordField::KhajurAmount,
        RecordField::ChocolateAmount,
        RecordField::TotalAmount,
    ];

    /// Monetary fields compare numerically; the rest compare as text
    pub const fn is_numeric(&self) -> bool {
        !matches!(
            self,
            Self::Id | Self::Date | Self::BillNos | Self::Category
        )
    }

    /// camelCase name as used by the UI ("billNos")
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Date => "date",
            Self::BillNos => "billNos",
            Self::Category => "category",
            Self::GrossAmount => "grossAmount",
            Self::Cgst => "cgst",
            Self::Sgst => "sgst",
            Self::TotalBillAmount => "totalBillAmount",
            Self::OnlineSales => "onlineSales",
            Self::CashSales => "cashSales",
            Self::KhajurAmount => "khajurAmount",
            Self::ChocolateAmount => "chocolateAmount",
            Self::TotalAmount => "totalAmount",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

/// Value of one record field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Number(Decimal),
    Text(String),
}

impl FieldValue {
    /// String form used by search, column filters and CSV cells.
    ///
    /// Numbers drop trailing zeros (`10000.00` renders as `10000`).
    pub fn display(&self) -> String {
        match self {
            Self::Number(n) => n.normalize().to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

/// Payload for a record that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingRecordCreate {
    pub date: NaiveDate,
    pub bill_nos: String,
    #[serde(flatten)]
    pub split: CategorySplit,
    #[serde(flatten)]
    pub tax: TaxBreakdown,
    pub total_amount: Decimal,
}

impl BillingRecordCreate {
    pub fn into_record(self, id: impl Into<String>) -> BillingRecord {
        BillingRecord {
            id: id.into(),
            date: self.date,
            bill_nos: self.bill_nos,
            split: self.split,
            tax: self.tax,
            total_amount: self.total_amount,
        }
    }
}

/// One bill entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingRecord {
    pub id: String,
    /// Calendar date the bill was recorded (no time component)
    pub date: NaiveDate,
    /// Inclusive bill number range, e.g. "3000-3009"
    pub bill_nos: String,
    #[serde(flatten)]
    pub split: CategorySplit,
    #[serde(flatten)]
    pub tax: TaxBreakdown,
    /// Tax-inclusive amount entered by the user
    pub total_amount: Decimal,
}

impl BillingRecord {
    pub fn category(&self) -> BillingCategory {
        self.split.category()
    }

    /// Value of `field`, `None` when the record's category lacks that field
    pub fn field(&self, field: RecordField) -> Option<FieldValue> {
        use FieldValue::{Number, Text};

        let value = match field {
            RecordField::Id => Text(self.id.clone()),
            RecordField::Date => Text(self.date.format("%Y-%m-%d").to_string()),
            RecordField::BillNos => Text(self.bill_nos.clone()),
            RecordField::Category => Text(self.category().slug().to_string()),
            RecordField::GrossAmount => Number(self.tax.gross_amount),
            RecordField::Cgst => Number(self.tax.cgst),
            RecordField::Sgst => Number(self.tax.sgst),
            RecordField::TotalBillAmount => Number(self.tax.total_bill_amount),
            RecordField::TotalAmount => Number(self.total_amount),
            RecordField::OnlineSales => match self.split {
                CategorySplit::Sweets { online_sales, .. } => Number(online_sales),
                _ => return None,
            },
            RecordField::CashSales => match self.split {
                CategorySplit::Sweets { cash_sales, .. } => Number(cash_sales),
                _ => return None,
            },
            RecordField::KhajurAmount => match self.split {
                CategorySplit::KhajurChocolate { khajur_amount, .. } => Number(khajur_amount),
                _ => return None,
            },
            RecordField::ChocolateAmount => match self.split {
                CategorySplit::KhajurChocolate {
                    chocolate_amount, ..
                } => Number(chocolate_amount),
                _ => return None,
            },
        };
        Some(value)
    }

    /// String forms of every field the record carries
    pub fn field_strings(&self) -> impl Iterator<Item = String> + '_ {
        RecordField::ALL
            .into_iter()
            .filter_map(|f| self.field(f))
            .map(|v| v.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sweets_record() -> BillingRecord {
        BillingRecord {
            id: "bill-1".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 10, 15).unwrap(),
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
    fn test_field_values() {
        let record = sweets_record();
        assert_eq!(record.category(), BillingCategory::Sweets);
        assert_eq!(
            record.field(RecordField::Date).unwrap().display(),
            "2026-10-15"
        );
        assert_eq!(
            record.field(RecordField::GrossAmount).unwrap().display(),
            "10000"
        );
        assert_eq!(
            record.field(RecordField::CashSales),
            Some(FieldValue::Number(dec!(420)))
        );
        assert_eq!(record.field(RecordField::ChocolateAmount), None);
    }

    #[test]
    fn test_field_strings_skip_absent_fields() {
        let record = sweets_record();
        let strings: Vec<String> = record.field_strings().collect();
        assert_eq!(strings.len(), 11);
        assert!(strings.contains(&"sweets".to_string()));
        assert!(strings.contains(&"3000-3009".to_string()));
    }

    #[test]
    fn test_json_shape_is_flat() {
        let json = serde_json::to_value(sweets_record()).unwrap();
        assert_eq!(json["category"], "sweets");
        assert_eq!(json["billNos"], "3000-3009");
        assert_eq!(json["cashSales"], 420.0);
        assert_eq!(json["totalBillAmount"], 10500.0);
        assert!(json.get("khajurAmount").is_none());
    }

    #[test]
    fn test_cakes_record_has_no_split_fields() {
        let json = serde_json::json!({
            "id": "bill-2",
            "date": "2026-10-01",
            "billNos": "1-5",
            "category": "cakes-bakery",
            "grossAmount": 10000.0,
            "cgst": 900.0,
            "sgst": 900.0,
            "totalBillAmount": 11800.0,
            "totalAmount": 11800.0
        });
        let record: BillingRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.split, CategorySplit::CakesBakery);
        assert_eq!(record.split.parts_total(), None);
        assert_eq!(record.tax.cgst, dec!(900));
    }

    #[test]
    fn test_record_field_keys() {
        for field in RecordField::ALL {
            assert_eq!(RecordField::from_key(field.key()), Some(field));
        }
        assert!(RecordField::TotalAmount.is_numeric());
        assert!(!RecordField::BillNos.is_numeric());
        assert_eq!(RecordField::from_key("notes"), None);
    }
}
