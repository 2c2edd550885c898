// SPDX-License-Identifier: MIT

//!
//! Ordering groups
//!

use crate::group_key_parts;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The grouping field that holds the crop process, unless configured otherwise
pub const DEFAULT_PROCESS_FIELD: &str = "process";

/// The priority of any process that isn't planting, growing or harvesting
pub const UNRANKED_PROCESS_PRIORITY: u32 = 999;

/// How the rows of the grid are ordered
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GroupOrder {
    /// By group key
    #[default]
    #[display("alphabetical")]
    Alphabetical,

    /// Planting, then growing, then harvesting, then anything else (by group
    /// key within each)
    #[serde(alias = "byProcessPriority")]
    #[display("by_process_priority")]
    ByProcessPriority,
}

impl FromStr for GroupOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "alphabetical" => Ok(GroupOrder::Alphabetical),
            "by_process_priority" | "byprocesspriority" | "process" => {
                Ok(GroupOrder::ByProcessPriority)
            }
            other => Err(format!(
                "unknown group order `{other}` (alphabetical or by_process_priority)"
            )),
        }
    }
}

/// The rank of a crop process when ordering by process (lowest first)
pub fn process_priority(process: &str) -> u32 {
    match process.trim().to_lowercase().as_str() {
        "planting" => 0,
        "growing" => 1,
        "harvesting" => 2,
        _ => UNRANKED_PROCESS_PRIORITY,
    }
}

/// Order group keys.  When ordering by process, the process value is read
/// from the key part belonging to `process_field` (the default process field
/// if `None`).  If that field isn't one of the grouping fields the keys are
/// ordered alphabetically.
pub fn sort_groups<K: AsRef<str>, F: AsRef<str>>(
    keys: &[K],
    order: GroupOrder,
    grouping_fields: &[F],
    process_field: Option<&str>,
) -> Vec<String> {
    let mut keys: Vec<String> = keys.iter().map(|key| key.as_ref().to_string()).collect();
    let process_field = process_field.unwrap_or(DEFAULT_PROCESS_FIELD);
    match process_position(order, grouping_fields, process_field) {
        Some(position) => keys.sort_by_cached_key(|key| {
            let process = group_key_parts(key).get(position).copied();
            (process.map_or(UNRANKED_PROCESS_PRIORITY, process_priority), key.clone())
        }),
        None => keys.sort(),
    }
    keys
}

/// As [`sort_groups`], for groups paired with their field values (so values
/// containing `|` don't need to be split back out of the keys)
pub(crate) fn sort_groups_by_values<F: AsRef<str>>(
    groups: &mut [(String, Vec<String>)],
    order: GroupOrder,
    grouping_fields: &[F],
    process_field: &str,
) {
    let position = process_position(order, grouping_fields, process_field);
    groups.sort_by_cached_key(|(key, values)| {
        let priority = match position {
            Some(position) => values
                .get(position)
                .map_or(UNRANKED_PROCESS_PRIORITY, |process| process_priority(process)),
            None => 0,
        };
        (priority, key.clone())
    });
}

/// Where the process value is within a group when ordering by process
fn process_position<F: AsRef<str>>(
    order: GroupOrder,
    grouping_fields: &[F],
    process_field: &str,
) -> Option<usize> {
    match order {
        GroupOrder::ByProcessPriority => grouping_fields
            .iter()
            .position(|field| field.as_ref() == process_field),
        GroupOrder::Alphabetical => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn by_process_priority() {
        let keys = ["Chad|Growing", "Chad|Harvesting", "Chad|Planting"];
        assert_eq!(
            sort_groups(
                &keys,
                GroupOrder::ByProcessPriority,
                &["country", "process"],
                Some("process")
            ),
            vec!["Chad|Planting", "Chad|Growing", "Chad|Harvesting"]
        );
    }

    #[test]
    fn ties_and_unranked() {
        let keys = [
            "Sudan | Weeding",
            "Sudan | Planting",
            "Chad | Land preparation",
            "Chad | Planting",
        ];
        assert_eq!(
            sort_groups(&keys, GroupOrder::ByProcessPriority, &["country", "process"], None),
            vec![
                "Chad | Planting",
                "Sudan | Planting",
                "Chad | Land preparation",
                "Sudan | Weeding"
            ]
        );
    }

    #[test]
    fn process_field_not_grouped() {
        let keys = ["Sudan", "Chad", "Niger"];
        let expected = vec!["Chad", "Niger", "Sudan"];
        assert_eq!(
            sort_groups(&keys, GroupOrder::ByProcessPriority, &["country"], Some("process")),
            expected
        );
        assert_eq!(
            sort_groups(&keys, GroupOrder::Alphabetical, &["country"], Some("process")),
            expected
        );
    }

    #[test]
    fn by_values() {
        let mut groups = vec![
            (
                "Sudan|North | Harvesting".to_string(),
                vec!["Sudan|North".to_string(), "Harvesting".to_string()],
            ),
            (
                "Sudan|North | Planting".to_string(),
                vec!["Sudan|North".to_string(), "Planting".to_string()],
            ),
            (
                "Chad | Weeding".to_string(),
                vec!["Chad".to_string(), "Weeding".to_string()],
            ),
        ];
        sort_groups_by_values(
            &mut groups,
            GroupOrder::ByProcessPriority,
            &["country", "process"],
            "process",
        );
        let keys: Vec<&str> = groups.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "Sudan|North | Planting",
                "Sudan|North | Harvesting",
                "Chad | Weeding"
            ]
        );

        sort_groups_by_values(&mut groups, GroupOrder::Alphabetical, &["country"], "process");
        assert_eq!(groups[0].0, "Chad | Weeding");
    }

    #[test]
    fn priorities() {
        assert_eq!(process_priority("Planting"), 0);
        assert_eq!(process_priority(" growing "), 1);
        assert_eq!(process_priority("HARVESTING"), 2);
        assert_eq!(process_priority("Unknown"), UNRANKED_PROCESS_PRIORITY);
    }

    #[test]
    fn parse() {
        assert_eq!(
            "by-process-priority".parse::<GroupOrder>(),
            Ok(GroupOrder::ByProcessPriority)
        );
        assert_eq!(
            serde_json::from_str::<GroupOrder>(r#""byProcessPriority""#).unwrap(),
            GroupOrder::ByProcessPriority
        );
        assert!("random".parse::<GroupOrder>().is_err());
    }
}
