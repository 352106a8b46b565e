//! Column sorting
//!
//! Numeric fields compare numerically, everything else as case-sensitive
//! strings. Records missing a field sort before records that have it.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use shared::models::{BillingRecord, FieldValue, RecordField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Active sort column and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub field: RecordField,
    pub direction: SortDirection,
}

/// Sort state of a table; `None` keeps the original order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState(Option<SortKey>);

impl SortState {
    pub fn unsorted() -> Self {
        Self(None)
    }

    pub fn by(field: RecordField, direction: SortDirection) -> Self {
        Self(Some(SortKey { field, direction }))
    }

    pub fn key(&self) -> Option<SortKey> {
        self.0
    }

    /// Header click: asc -> desc -> unsorted on the same field, asc on a new one
    pub fn toggle(&mut self, field: RecordField) {
        self.0 = match self.0 {
            Some(SortKey {
                field: current,
                direction: SortDirection::Asc,
            }) if current == field => Some(SortKey {
                field,
                direction: SortDirection::Desc,
            }),
            Some(SortKey {
                field: current,
                direction: SortDirection::Desc,
            }) if current == field => None,
            _ => Some(SortKey {
                field,
                direction: SortDirection::Asc,
            }),
        };
    }

    /// Direction shown on `field`'s header
    pub fn direction_of(&self, field: RecordField) -> Option<SortDirection> {
        self.0.filter(|k| k.field == field).map(|k| k.direction)
    }
}

/// Ascending comparison of two records on one field
pub fn compare_field(a: &BillingRecord, b: &BillingRecord, field: RecordField) -> Ordering {
    match (a.field(field), b.field(field)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(FieldValue::Number(x)), Some(FieldValue::Number(y))) => x.cmp(&y),
        (Some(FieldValue::Text(x)), Some(FieldValue::Text(y))) => x.cmp(&y),
        (Some(x), Some(y)) => x.display().cmp(&y.display()),
    }
}

/// Stable sort in place; unsorted leaves the order untouched
pub fn sort_records(records: &mut [BillingRecord], sort: &SortState) {
    let Some(key) = sort.key() else {
        return;
    };
    match key.direction {
        SortDirection::Asc => records.sort_by(|a, b| compare_field(a, b, key.field)),
        SortDirection::Desc => records.sort_by(|a, b| compare_field(b, a, key.field)),
    }
}
