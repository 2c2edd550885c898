// SPDX-License-Identifier: MIT

//!
//! The crop calendar record type (one row of the uploaded data)
//!

use crate::{CalendarRecord, MonthMask, MonthMaskError};
use log::warn;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// The key holding a record's month mask
pub const MONTH_MASK_KEY: &str = "month_mask";

/// The key holding a record's period label
pub const PERIOD_KEY: &str = "period";

/// The key the upstream parser stores its raw parse output under
pub const PARSED_DATA_KEY: &str = "parsed_data";

/// Errors that can arise in relation to a [`Record`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("A record must be a JSON object")]
    NotAnObject,

    #[error("A record must have a `month_mask`")]
    MissingMonthMask,

    #[error("The record's `period` must be a string or null")]
    InvalidPeriod,

    #[error(transparent)]
    MonthMask(#[from] MonthMaskError),
}

/// One record of crop calendar data: which months it is active in, an
/// optional human readable period, and any other named fields (e.g. country,
/// crop, process) that can be used to group records.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    /// The months in which the record is active
    month_mask: MonthMask,

    /// Human readable period (e.g. "Early April"), preferred over a computed
    /// date range when present
    period: Option<String>,

    /// All other fields, as received
    fields: BTreeMap<String, Value>,
}

impl Record {
    /// Create a record with no period and no fields
    pub fn new(month_mask: MonthMask) -> Self {
        Record {
            month_mask,
            period: None,
            fields: BTreeMap::new(),
        }
    }

    /// Set the period label
    pub fn with_period<S: ToString>(mut self, period: S) -> Self {
        self.period = Some(period.to_string());
        self
    }

    /// Set a string field.  The period and month mask are set in place rather
    /// than stored as fields; a month mask that isn't a valid mask is ignored.
    pub fn with_field<K: ToString, V: ToString>(mut self, name: K, value: V) -> Self {
        let (name, value) = (name.to_string(), value.to_string());
        match name.as_str() {
            PERIOD_KEY => self.period = Some(value),
            MONTH_MASK_KEY => match value.trim().parse::<i64>().map(MonthMask::try_from) {
                Ok(Ok(month_mask)) => self.month_mask = month_mask,
                _ => warn!("Ignoring invalid month mask `{value}`"),
            },
            _ => {
                self.fields.insert(name, Value::String(value));
            }
        }
        self
    }

    /// Copy the record with a different month mask (e.g. after an edit)
    pub fn with_month_mask(&self, month_mask: MonthMask) -> Self {
        Record {
            month_mask,
            ..self.clone()
        }
    }

    /// Validate an upstream JSON record
    pub fn from_json_value(value: Value) -> Result<Self, RecordError> {
        match value {
            Value::Object(object) => Record::from_json_object(object),
            _ => Err(RecordError::NotAnObject),
        }
    }

    /// Validate an upstream JSON object
    pub fn from_json_object(mut object: Map<String, Value>) -> Result<Self, RecordError> {
        let month_mask = match object.remove(MONTH_MASK_KEY) {
            Some(value) => MonthMask::from_json_value(&value)?,
            None => return Err(RecordError::MissingMonthMask),
        };
        let period = match object.remove(PERIOD_KEY) {
            None | Some(Value::Null) => None,
            Some(Value::String(period)) => Some(period),
            Some(_) => return Err(RecordError::InvalidPeriod),
        };
        Ok(Record {
            month_mask,
            period,
            fields: object.into_iter().collect(),
        })
    }

    /// Get the record's month mask
    pub fn month_mask(&self) -> MonthMask {
        self.month_mask
    }

    /// Get the period label (blank labels count as no label)
    pub fn period(&self) -> Option<&str> {
        self.period
            .as_deref()
            .filter(|period| !period.trim().is_empty())
    }

    /// Borrow the raw field values
    pub fn fields(&self) -> &BTreeMap<String, Value> {
        &self.fields
    }

    /// Get a field value as a string.  Strings, numbers and booleans have a
    /// value, anything else (including blank strings) doesn't.  The period
    /// and month mask can be read as fields too.
    pub fn field(&self, name: &str) -> Option<String> {
        match name {
            PERIOD_KEY => self.period().map(str::to_string),
            MONTH_MASK_KEY => Some(self.month_mask.to_string()),
            _ => match self.fields.get(name)? {
                Value::String(value) if !value.trim().is_empty() => Some(value.clone()),
                Value::Number(value) => Some(value.to_string()),
                Value::Bool(value) => Some(value.to_string()),
                _ => None,
            },
        }
    }
}

impl CalendarRecord for Record {
    fn month_mask(&self) -> MonthMask {
        self.month_mask
    }

    fn period(&self) -> Option<&str> {
        Record::period(self)
    }

    fn field(&self, name: &str) -> Option<String> {
        Record::field(self, name)
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 2))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.serialize_entry(MONTH_MASK_KEY, &self.month_mask)?;
        map.serialize_entry(PERIOD_KEY, &self.period)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let object = Map::<String, Value>::deserialize(deserializer)?;
        Record::from_json_object(object).map_err(serde::de::Error::custom)
    }
}

/// The names of the fields that records can be grouped by, sorted.  Internal
/// fields (those starting with `_`), the month mask, and the upstream
/// parser's raw output are left out.
pub fn groupable_fields(records: &[Record]) -> Vec<String> {
    let mut names = BTreeSet::new();
    for record in records {
        names.extend(
            record
                .fields
                .keys()
                .filter(|name| !name.starts_with('_') && name.as_str() != PARSED_DATA_KEY)
                .cloned(),
        );
        if record.period.is_some() {
            names.insert(PERIOD_KEY.to_string());
        }
    }
    names.into_iter().collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crop_calendar_macros::month_mask;
    use serde_json::json;

    #[test]
    fn deserialisation() {
        let record: Record = serde_json::from_value(json!({
            "month_mask": 3075,
            "period": "Nov - Feb",
            "country": "Sudan",
            "year": 2024,
            "irrigated": false,
            "notes": null
        }))
        .unwrap();
        assert_eq!(record.month_mask(), month_mask!(3075));
        assert_eq!(record.period(), Some("Nov - Feb"));
        assert_eq!(record.field("country"), Some(String::from("Sudan")));
        assert_eq!(record.field("year"), Some(String::from("2024")));
        assert_eq!(record.field("irrigated"), Some(String::from("false")));
        assert_eq!(record.field("notes"), None);
        assert_eq!(record.field("missing"), None);
    }

    #[test]
    fn deserialisation_rejects_invalid_records() {
        // No mask
        assert!(serde_json::from_value::<Record>(json!({ "country": "Chad" })).is_err());

        // Mask too big, negative, not an integer
        assert!(serde_json::from_value::<Record>(json!({ "month_mask": 4096 })).is_err());
        assert!(serde_json::from_value::<Record>(json!({ "month_mask": -1 })).is_err());
        assert!(serde_json::from_value::<Record>(json!({ "month_mask": 2.5 })).is_err());

        // Period isn't a string
        assert!(
            serde_json::from_value::<Record>(json!({ "month_mask": 1, "period": 7 })).is_err()
        );

        // Not an object
        assert_eq!(
            Record::from_json_value(json!([1, 2])),
            Err(RecordError::NotAnObject)
        );
        assert_eq!(
            Record::from_json_value(json!({ "month_mask": "x" })),
            Err(RecordError::MonthMask(MonthMaskError::InvalidMask(
                String::from("\"x\"")
            )))
        );
    }

    #[test]
    fn blank_values() {
        let record = Record::new(month_mask!(1))
            .with_field("country", "  ")
            .with_period("");
        assert_eq!(record.field("country"), None);
        assert_eq!(record.period(), None);
        assert_eq!(record.field("month_mask"), Some(String::from("1")));
    }

    #[test]
    fn serialisation_round_trip() {
        let record = Record::new(month_mask!(6))
            .with_field("crop", "Sorghum")
            .with_period("Feb - Mar");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            json!({ "crop": "Sorghum", "month_mask": 6, "period": "Feb - Mar" })
        );
        let back: Record = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn reserved_field_names() {
        let record = Record::new(month_mask!(6))
            .with_field("period", "Early rains")
            .with_field("month_mask", "7")
            .with_field("crop", "Maize");
        assert_eq!(record.period(), Some("Early rains"));
        assert_eq!(record.month_mask(), month_mask!(7));
        assert_eq!(record.fields().len(), 1);
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"crop":"Maize","month_mask":7,"period":"Early rains"}"#
        );

        let record = record.with_field("month_mask", "5000");
        assert_eq!(record.month_mask(), month_mask!(7));
    }

    #[test]
    fn with_month_mask() {
        let record = Record::new(month_mask!(6)).with_field("crop", "Maize");
        let edited = record.with_month_mask(month_mask!(7));
        assert_eq!(edited.month_mask(), month_mask!(7));
        assert_eq!(edited.field("crop"), record.field("crop"));
        assert_eq!(record.month_mask(), month_mask!(6));
    }

    #[test]
    fn groupable_field_names() {
        let records: Vec<Record> = serde_json::from_value(json!([
            { "month_mask": 1, "country": "Chad", "_index": 0, "parsed_data": {} },
            { "month_mask": 2, "crop": "Millet", "period": "Feb" }
        ]))
        .unwrap();
        assert_eq!(groupable_fields(&records), vec!["country", "crop", "period"]);
    }
}
