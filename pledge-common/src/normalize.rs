//! Raw row normalization
//!
//! Converts loosely-typed rows, as they come out of a tabular loader, into
//! canonical [`CommitmentRecord`]s. Normalization never fails: a field that
//! cannot be converted gets a neutral default (`0` status, empty text, empty
//! sequence).

use serde::Deserialize;
use tracing::warn;

use crate::dates::parse_day_first;
use crate::record::CommitmentRecord;

/// Raw status cell as delivered by the loader
///
/// Loaders with type inference hand over booleans and numbers; plain text
/// loaders hand over strings. Normalization collapses all of these into a
/// single integer before anything else sees the value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawStatus {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

/// One untyped source row, keyed by the header names of the source table
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Category", default)]
    pub category: Option<String>,
    #[serde(rename = "Commitment", default)]
    pub commitment: Option<String>,
    #[serde(rename = "Party", default)]
    pub party: Option<String>,
    #[serde(rename = "Status", default)]
    pub status: Option<RawStatus>,
    #[serde(rename = "Updated", default)]
    pub updated: Option<String>,
    #[serde(rename = "Due", default)]
    pub due: Option<String>,
    #[serde(rename = "Tags", default)]
    pub tags: Option<String>,
    #[serde(rename = "References", default)]
    pub references: Option<String>,
    #[serde(rename = "LobbyFor", default)]
    pub lobby_for: Option<String>,
    #[serde(rename = "LobbyAgainst", default)]
    pub lobby_against: Option<String>,
    #[serde(rename = "Notes", default)]
    pub notes: Option<String>,
    #[serde(rename = "Metadata", default)]
    pub metadata: Option<String>,
}

impl RawRecord {
    /// Normalize this row into a canonical record
    pub fn normalize(self) -> CommitmentRecord {
        let status = normalize_status(self.status.as_ref());
        let party = self.party.unwrap_or_default();
        let parties = split_parties(&party);
        let tags = split_tags(self.tags.as_deref().unwrap_or_default());
        let updated = self.updated.unwrap_or_default();
        let due = self.due.unwrap_or_default();

        let updated_on = parse_date_field("Updated", &updated);
        let due_on = parse_date_field("Due", &due);

        CommitmentRecord {
            category: self.category.unwrap_or_default(),
            commitment: self.commitment.unwrap_or_default(),
            party,
            parties,
            status,
            updated,
            updated_on,
            due,
            due_on,
            tags,
            references: self.references.unwrap_or_default(),
            lobby_for: self.lobby_for.unwrap_or_default(),
            lobby_against: self.lobby_against.unwrap_or_default(),
            notes: self.notes.unwrap_or_default(),
            metadata: self.metadata.unwrap_or_default(),
        }
    }
}

/// Collapse a raw status cell to a canonical integer.
///
/// Text is read like a radix-10 integer prefix: leading whitespace and one
/// sign are accepted, parsing stops at the first non-digit, and text without
/// any leading digit yields `0`. Booleans of either value yield `0`. Floats
/// are truncated toward zero.
///
/// # Examples
///
/// ```
/// use pledge_common::normalize::{normalize_status, RawStatus};
///
/// assert_eq!(normalize_status(Some(&RawStatus::Text("50".into()))), 50);
/// assert_eq!(normalize_status(Some(&RawStatus::Text("75%".into()))), 75);
/// assert_eq!(normalize_status(Some(&RawStatus::Bool(false))), 0);
/// assert_eq!(normalize_status(None), 0);
/// ```
pub fn normalize_status(raw: Option<&RawStatus>) -> i64 {
    match raw {
        None | Some(RawStatus::Bool(_)) => 0,
        Some(RawStatus::Int(value)) => *value,
        Some(RawStatus::Float(value)) => {
            if value.is_finite() {
                value.trunc() as i64
            } else {
                0
            }
        }
        Some(RawStatus::Text(text)) => parse_int_prefix(text).unwrap_or_else(|| {
            if !text.trim().is_empty() {
                warn!("Non-numeric status '{}' normalized to 0", text);
            }
            0
        }),
    }
}

/// Leading signed decimal integer of `text`, saturating on overflow
fn parse_int_prefix(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        seen_digit = true;
        let digit = i64::from(byte - b'0');
        value = value.saturating_mul(10).saturating_add(digit);
    }

    seen_digit.then(|| if negative { -value } else { value })
}

/// Split a comma-joined party field into trimmed, non-empty names
pub fn split_parties(party: &str) -> Vec<String> {
    party
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a comma-joined tag field.
///
/// Tokens are kept exactly as written, surrounding whitespace included; only
/// an empty field yields an empty sequence. Party names are trimmed, tags
/// are not.
pub fn split_tags(tags: &str) -> Vec<String> {
    if tags.is_empty() {
        Vec::new()
    } else {
        tags.split(',').map(str::to_string).collect()
    }
}

fn parse_date_field(column: &str, value: &str) -> Option<chrono::NaiveDate> {
    let parsed = parse_day_first(value);
    if parsed.is_none() && !value.trim().is_empty() {
        warn!("Unparseable {} date '{}' treated as absent", column, value);
    }
    parsed
}
