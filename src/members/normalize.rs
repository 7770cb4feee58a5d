// src/members/normalize.rs
//
// Raw wide-table rows → member profiles with an activity list.

use chrono::{FixedOffset, Offset, Utc};
use serde_json::Value;

use super::fields::{self, is_attended, is_excluded};
use super::profile::{Cell, JoinDate, MemberCollection, MemberProfile};
use crate::bitable::RawRecord;
use crate::config::options::NormalizeOptions;
use crate::error::ConfigError;

/// Pure, order-preserving record → profile transform.
#[derive(Clone, Copy, Debug)]
pub struct Normalizer {
    offset: FixedOffset,
}

impl Default for Normalizer {
    /// Join dates in UTC.
    fn default() -> Self {
        Self { offset: Utc.fix() }
    }
}

impl Normalizer {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    pub fn from_options(opts: &NormalizeOptions) -> Result<Self, ConfigError> {
        opts.utc_offset_hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .map(Self::new)
            .ok_or(ConfigError::Offset(opts.utc_offset_hours))
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// One output per input, same order.
    pub fn normalize(&self, records: &[RawRecord]) -> MemberCollection {
        records.iter().map(|r| self.profile(r)).collect()
    }

    /// Never fails: malformed attributes fall back to their empty/sentinel value.
    pub fn profile(&self, record: &RawRecord) -> MemberProfile {
        MemberProfile {
            record_id: record.record_id.clone(),
            name: first_fragment_text(record.field(fields::NAME)),
            student_id: Cell::from_field(record.field(fields::STUDENT_ID)),
            grade: Cell::from_field(record.field(fields::GRADE)),
            gender: Cell::from_field(record.field(fields::GENDER)),
            department: Cell::from_field(record.field(fields::DEPARTMENT)),
            join_date: JoinDate::parse(record.field(fields::JOIN_DATE), &self.offset),
            activities: activities(record),
        }
    }
}

/// Normalize with UTC join dates.
pub fn normalize(records: &[RawRecord]) -> MemberCollection {
    Normalizer::default().normalize(records)
}

/// Non-excluded columns holding anything non-empty, in field order.
pub fn activities(record: &RawRecord) -> Vec<String> {
    record
        .fields
        .iter()
        .filter(|(key, value)| !is_excluded(key) && is_attended(value))
        .map(|(key, _)| key.clone())
        .collect()
}

/// The name column is rich text: take the first fragment's `text`.
fn first_fragment_text(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_array)
        .and_then(|frags| frags.first())
        .and_then(|frag| frag.get("text"))
        .and_then(Value::as_str)
        .map(|s| s!(s))
        .unwrap_or_default()
}
