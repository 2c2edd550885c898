// SPDX-License-Identifier: MIT

//!
//! Grouping records into rows
//!

use crate::LayoutError;
use crop_calendar_core::CalendarRecord;
use log::debug;
use std::collections::BTreeMap;

/// Placed between field values in a group key (e.g. `Sudan | Sorghum`)
pub const GROUP_KEY_SEPARATOR: &str = " | ";

/// Stands in for a missing or empty field value in a group key
pub const UNKNOWN_FIELD_VALUE: &str = "Unknown";

/// The values of the grouping fields of a record (in grouping field order)
pub fn group_key_values<R: CalendarRecord, S: AsRef<str>>(
    record: &R,
    grouping_fields: &[S],
) -> Vec<String> {
    grouping_fields
        .iter()
        .map(|field| {
            record
                .field(field.as_ref())
                .unwrap_or_else(|| UNKNOWN_FIELD_VALUE.to_string())
        })
        .collect()
}

/// Build the group key of a record from the values of the grouping fields
pub fn group_key<R: CalendarRecord, S: AsRef<str>>(record: &R, grouping_fields: &[S]) -> String {
    group_key_values(record, grouping_fields).join(GROUP_KEY_SEPARATOR)
}

/// Split a group key back into its field values.  Keys joined with a bare `|`
/// are understood too, so a value containing `|` can't be told apart from two
/// values.  Use [`group_key_values`] when the records are at hand.
pub fn group_key_parts(key: &str) -> Vec<&str> {
    key.split('|').map(str::trim).collect()
}

/// Group records by the values of the grouping fields.  Records keep their
/// original order within each group.
pub fn group<'r, R: CalendarRecord, S: AsRef<str>>(
    records: &'r [R],
    grouping_fields: &[S],
) -> Result<BTreeMap<String, Vec<&'r R>>, LayoutError> {
    Ok(group_indices(records, grouping_fields)?
        .into_iter()
        .map(|(key, indices)| (key, indices.into_iter().map(|i| &records[i]).collect()))
        .collect())
}

/// As [`group`], but with the positions of the records rather than the
/// records themselves
pub(crate) fn group_indices<R: CalendarRecord, S: AsRef<str>>(
    records: &[R],
    grouping_fields: &[S],
) -> Result<BTreeMap<String, Vec<usize>>, LayoutError> {
    if grouping_fields.is_empty() {
        return Err(LayoutError::InvalidGrouping);
    }
    let mut groups: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for (index, record) in records.iter().enumerate() {
        groups
            .entry(group_key(record, grouping_fields))
            .or_default()
            .push(index);
    }
    debug!(
        "grouped {} records into {} groups",
        records.len(),
        groups.len()
    );
    Ok(groups)
}

#[cfg(test)]
mod test {
    use super::*;
    use crop_calendar_core::{MonthMask, Record};

    fn record(country: &str, crop: Option<&str>) -> Record {
        let record = Record::new(MonthMask::all()).with_field("country", country);
        match crop {
            Some(crop) => record.with_field("crop", crop),
            None => record,
        }
    }

    #[test]
    fn by_one_field() {
        let records = vec![
            record("Sudan", Some("Sorghum")),
            record("Sudan", Some("Millet")),
            record("Chad", Some("Maize")),
        ];
        let groups = group(&records, &["country"]).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups["Sudan"], vec![&records[0], &records[1]]);
        assert_eq!(groups["Chad"], vec![&records[2]]);
    }

    #[test]
    fn by_several_fields() {
        let records = vec![
            record("Sudan", Some("Sorghum")),
            record("Sudan", None),
            record("Sudan", Some("Sorghum")),
        ];
        let groups = group(&records, &["country", "crop"]).unwrap();
        assert_eq!(
            groups.keys().collect::<Vec<_>>(),
            vec!["Sudan | Sorghum", "Sudan | Unknown"]
        );
        assert_eq!(groups["Sudan | Sorghum"].len(), 2);
    }

    #[test]
    fn blank_and_missing_values() {
        let records = vec![record("  ", None)];
        assert_eq!(group_key(&records[0], &["country", "crop"]), "Unknown | Unknown");
    }

    #[test]
    fn empty_grouping() {
        let records = vec![record("Sudan", None)];
        let fields: [&str; 0] = [];
        assert_eq!(group(&records, &fields), Err(LayoutError::InvalidGrouping));
    }

    #[test]
    fn key_values() {
        let record = record("Sudan|North", None);
        assert_eq!(
            group_key_values(&record, &["country", "crop"]),
            vec!["Sudan|North", "Unknown"]
        );
        assert_eq!(group_key(&record, &["country", "crop"]), "Sudan|North | Unknown");
    }

    #[test]
    fn key_parts() {
        assert_eq!(group_key_parts("Chad | Growing"), vec!["Chad", "Growing"]);
        assert_eq!(group_key_parts("Chad|Growing"), vec!["Chad", "Growing"]);
        assert_eq!(group_key_parts("Chad"), vec!["Chad"]);
    }
}
