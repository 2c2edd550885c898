// SPDX-License-Identifier: MIT

//!
//! Filtering records by field value
//!

use crate::UNKNOWN_FIELD_VALUE;
use crop_calendar_core::CalendarRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A field value and how many records have it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

/// The value of a field as shown when filtering and grouping
fn shown_value<R: CalendarRecord>(record: &R, field: &str) -> String {
    record
        .field(field)
        .unwrap_or_else(|| UNKNOWN_FIELD_VALUE.to_string())
}

/// Keep the records whose `field` value is one of `values` (in their original
/// order).  Records without a value match [`UNKNOWN_FIELD_VALUE`].
pub fn filter_records<'r, R: CalendarRecord, V: AsRef<str>>(
    records: &'r [R],
    field: &str,
    values: &[V],
) -> Vec<&'r R> {
    records
        .iter()
        .filter(|record| {
            let value = shown_value(*record, field);
            values.iter().any(|selected| selected.as_ref() == value)
        })
        .collect()
}

/// Every value of `field` across the records (sorted) with how often it
/// appears
pub fn unique_values<R: CalendarRecord>(records: &[R], field: &str) -> Vec<ValueCount> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(shown_value(record, field)).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(value, count)| ValueCount { value, count })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crop_calendar_core::{MonthMask, Record};

    fn records() -> Vec<Record> {
        vec![
            Record::new(MonthMask::all()).with_field("country", "Sudan"),
            Record::new(MonthMask::all()).with_field("country", "Chad"),
            Record::new(MonthMask::all()),
            Record::new(MonthMask::all()).with_field("country", "Sudan"),
        ]
    }

    #[test]
    fn filter() {
        let records = records();
        let kept = filter_records(&records, "country", &["Sudan"]);
        assert_eq!(kept, vec![&records[0], &records[3]]);

        let kept = filter_records(&records, "country", &["Unknown", "Chad"]);
        assert_eq!(kept, vec![&records[1], &records[2]]);

        let none: [&str; 0] = [];
        assert!(filter_records(&records, "country", &none).is_empty());
    }

    #[test]
    fn values() {
        assert_eq!(
            unique_values(&records(), "country"),
            vec![
                ValueCount {
                    value: "Chad".to_string(),
                    count: 1
                },
                ValueCount {
                    value: "Sudan".to_string(),
                    count: 2
                },
                ValueCount {
                    value: "Unknown".to_string(),
                    count: 1
                },
            ]
        );
    }
}
