// SPDX-License-Identifier: MIT

//!
//! Parse free text seasons (e.g. "Nov - Feb", "March, May", "all year") into
//! a [`MonthMask`]
//!

use crate::{MONTHS_PER_YEAR, MonthIndex, MonthMask};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

lazy_static! {
    static ref PARENTHESISED: Regex = Regex::new(r"\(.*?\)").expect("valid regex");
    static ref RANGE_WORDS: Regex = Regex::new(r"\b(through|to)\b|[–—]").expect("valid regex");
    static ref PART_SEPARATOR: Regex = Regex::new(r"[;,/]\s*").expect("valid regex");
}

/// Phrases meaning every month
const WHOLE_YEAR_PHRASES: [&str; 3] = ["all year", "year-round", "throughout"];

/// Month tokens (lowercase) and their 1-based month numbers
const MONTH_TOKENS: [(&str, u8); 24] = [
    ("jan", 1),
    ("january", 1),
    ("feb", 2),
    ("february", 2),
    ("mar", 3),
    ("march", 3),
    ("apr", 4),
    ("april", 4),
    ("may", 5),
    ("jun", 6),
    ("june", 6),
    ("jul", 7),
    ("july", 7),
    ("aug", 8),
    ("august", 8),
    ("sep", 9),
    ("sept", 9),
    ("september", 9),
    ("oct", 10),
    ("october", 10),
    ("nov", 11),
    ("november", 11),
    ("dec", 12),
    ("december", 12),
];

/// Parse a season written as text into the months it covers.
///
/// Parts are separated by `;`, `,` or `/`.  Each part is a month (name,
/// abbreviation, or number 1-12) or a range of months (`a-b`, `a to b`,
/// `a through b`).  A range whose end comes before its start runs through
/// December into January.  Remarks in brackets, and anything unrecognised,
/// are ignored.
pub fn parse_season(text: &str) -> MonthMask {
    let text = text.to_lowercase();
    let text = PARENTHESISED.replace_all(&text, "");

    if WHOLE_YEAR_PHRASES.iter().any(|phrase| text.contains(*phrase)) {
        return MonthMask::all();
    }

    let text = RANGE_WORDS.replace_all(&text, "-");
    let mut months = Vec::new();
    for part in PART_SEPARATOR.split(&text) {
        match part.split_once('-') {
            Some((from, to)) => {
                if let (Some(from), Some(to)) = (month_from_token(from), month_from_token(to)) {
                    months.extend(months_between(from, to));
                }
            }
            None => months.extend(month_from_token(part)),
        }
    }

    let mask = MonthMask::from_months(months);
    debug!("parsed season `{text}` as {}", mask.as_binary_string());
    mask
}

/// Read a single month token (e.g. `Sept`, `september`, `9`)
fn month_from_token(token: &str) -> Option<MonthIndex> {
    let token = token.trim().to_lowercase();
    let number = match MONTH_TOKENS.iter().find(|(name, _)| *name == token) {
        Some((_, number)) => i64::from(*number),
        None => token.parse::<i64>().ok()?,
    };
    if (1..=i64::from(MONTHS_PER_YEAR)).contains(&number) {
        MonthIndex::try_from(number - 1).ok()
    } else {
        None
    }
}

/// All months from `from` to `to` inclusive, wrapping through December if
/// `to` comes before `from`
fn months_between(from: MonthIndex, to: MonthIndex) -> Vec<MonthIndex> {
    if from <= to {
        MonthIndex::all()
            .filter(|month| (from..=to).contains(month))
            .collect()
    } else {
        MonthIndex::all()
            .filter(|month| *month >= from || *month <= to)
            .collect()
    }
}
