// SPDX-License-Identifier: MIT

//!
//! The data handed to exporters.  Exporters are left to decide how to encode
//! and style it (e.g. as a spreadsheet or JSON file).
//!

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use crop_calendar_core::{CalendarRecord, MONTH_MASK_KEY, PERIOD_KEY, Record};
use log::debug;
use serde::Serialize;
use serde_json::Value;

/// The `format` of a JSON export
pub const JSON_EXPORT_FORMAT: &str = "Crop Calendar Gantt Export";

/// The columns of a table export that follow the grouping fields, unless the
/// columns are chosen
pub const DEFAULT_TABLE_COLUMNS: [&str; 4] = [PERIOD_KEY, "cropProcess", MONTH_MASK_KEY, "notes"];

/// A JSON export of records
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonExport {
    pub format: String,

    /// RFC 3339
    pub export_date: String,

    pub total_records: usize,
    pub grouping_fields: Vec<String>,

    /// The records with their month masks written as binary strings
    pub records: Vec<Value>,
}

impl JsonExport {
    /// Export the records as of now
    pub fn new<S: AsRef<str>>(records: &[Record], grouping_fields: &[S]) -> Self {
        Self::at(records, grouping_fields, Utc::now())
    }

    /// Export the records as of the given time
    pub fn at<S: AsRef<str>>(
        records: &[Record],
        grouping_fields: &[S],
        export_date: DateTime<Utc>,
    ) -> Self {
        debug!("exporting {} records as JSON", records.len());
        JsonExport {
            format: JSON_EXPORT_FORMAT.to_string(),
            export_date: export_date.to_rfc3339_opts(SecondsFormat::Secs, true),
            total_records: records.len(),
            grouping_fields: grouping_fields
                .iter()
                .map(|field| field.as_ref().to_string())
                .collect(),
            records: records.iter().map(exported_record).collect(),
        }
    }
}

/// A record as JSON, with the month mask as a binary string
fn exported_record(record: &Record) -> Value {
    let mut object: serde_json::Map<String, Value> = record
        .fields()
        .iter()
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect();
    object.insert(
        MONTH_MASK_KEY.to_string(),
        Value::String(record.month_mask().as_binary_string()),
    );
    object.insert(
        PERIOD_KEY.to_string(),
        record
            .period()
            .map_or(Value::Null, |period| Value::String(period.to_string())),
    );
    Value::Object(object)
}

/// A table of records (one row per record), ready to be written as e.g. a
/// spreadsheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ExportTable {
    /// Tabulate the records.  Without chosen columns the grouping fields are
    /// followed by [`DEFAULT_TABLE_COLUMNS`].  Missing values are empty cells.
    pub fn new<R: CalendarRecord, S: AsRef<str>>(
        records: &[R],
        grouping_fields: &[S],
        columns: Option<&[String]>,
    ) -> Self {
        let headers = match columns {
            Some(columns) if !columns.is_empty() => columns.to_vec(),
            _ => default_columns(grouping_fields),
        };
        let rows = records
            .iter()
            .map(|record| headers.iter().map(|column| cell(record, column)).collect())
            .collect();
        ExportTable { headers, rows }
    }
}

/// The grouping fields followed by the default columns (without repeats)
fn default_columns<S: AsRef<str>>(grouping_fields: &[S]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    let names = grouping_fields
        .iter()
        .map(|field| field.as_ref())
        .chain(DEFAULT_TABLE_COLUMNS);
    for name in names {
        if !columns.iter().any(|column| column == name) {
            columns.push(name.to_string());
        }
    }
    columns
}

fn cell<R: CalendarRecord>(record: &R, column: &str) -> String {
    if column == MONTH_MASK_KEY {
        record.month_mask().as_binary_string()
    } else {
        record.field(column).unwrap_or_default()
    }
}

/// The file name for an export made on `date` (e.g.
/// `crop-calendar-2025-03-01.json`)
pub fn export_file_name(prefix: &str, extension: &str, date: NaiveDate) -> String {
    format!(
        "{prefix}-{}.{}",
        date.format("%Y-%m-%d"),
        extension.trim_start_matches('.')
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::TimeZone;
    use crop_calendar_core::MonthMask;
    use serde_json::json;

    fn records() -> Vec<Record> {
        vec![
            Record::new(MonthMask::try_from(0b1100_0000_0011).unwrap())
                .with_field("country", "Sudan")
                .with_field("cropProcess", "Planting")
                .with_period("Nov - Feb"),
            Record::new(MonthMask::empty()).with_field("country", "Chad"),
        ]
    }

    #[test]
    fn json_export() {
        let date = Utc.with_ymd_and_hms(2025, 3, 1, 12, 30, 0).unwrap();
        let export = JsonExport::at(&records(), &["country"], date);
        assert_eq!(
            serde_json::to_value(&export).unwrap(),
            json!({
                "format": "Crop Calendar Gantt Export",
                "exportDate": "2025-03-01T12:30:00Z",
                "totalRecords": 2,
                "groupingFields": ["country"],
                "records": [
                    {
                        "country": "Sudan",
                        "cropProcess": "Planting",
                        "month_mask": "110000000011",
                        "period": "Nov - Feb"
                    },
                    {
                        "country": "Chad",
                        "month_mask": "000000000000",
                        "period": null
                    }
                ]
            })
        );
    }

    #[test]
    fn table_default_columns() {
        let table = ExportTable::new(&records(), &["country"], None);
        assert_eq!(
            table.headers,
            vec!["country", "period", "cropProcess", "month_mask", "notes"]
        );
        assert_eq!(
            table.rows,
            vec![
                vec!["Sudan", "Nov - Feb", "Planting", "110000000011", ""],
                vec!["Chad", "", "", "000000000000", ""],
            ]
        );
    }

    #[test]
    fn table_chosen_columns() {
        let columns = vec!["month_mask".to_string(), "country".to_string()];
        let table = ExportTable::new(&records(), &["country"], Some(&columns));
        assert_eq!(table.headers, columns);
        assert_eq!(table.rows[1], vec!["000000000000", "Chad"]);
    }

    #[test]
    fn grouping_field_not_repeated() {
        let table = ExportTable::new(&records(), &["cropProcess"], None);
        assert_eq!(
            table.headers,
            vec!["cropProcess", "period", "month_mask", "notes"]
        );
    }

    #[test]
    fn file_name() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(
            export_file_name("crop-calendar", "json", date),
            "crop-calendar-2025-03-01.json"
        );
        assert_eq!(
            export_file_name("crop-calendar", ".xlsx", date),
            "crop-calendar-2025-03-01.xlsx"
        );
    }
}
