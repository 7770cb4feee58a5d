// src/members/profile.rs

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde_json::Value;

use crate::config::consts::UNKNOWN_DATE;

/// A profile attribute kept exactly as the source sent it.
///
/// The source may hand back a string, a number or a rich-text list for the
/// same column; `text()` is the one string form used for display, export
/// and lookup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cell(Value);

impl Cell {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Absent fields become an empty cell.
    pub fn from_field(value: Option<&Value>) -> Self {
        Self(value.cloned().unwrap_or(Value::Null))
    }

    pub fn raw(&self) -> &Value {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }

    /// `"7"` for `7`, the string itself for strings, `""` for null,
    /// concatenated fragment text for rich text, compact JSON otherwise.
    pub fn text(&self) -> String {
        match &self.0 {
            Value::Null => s!(),
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Array(items) => rich_text(items).unwrap_or_else(|| self.0.to_string()),
            Value::Object(_) => self.0.to_string(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Self(Value::String(s!(s)))
    }
}

impl From<Value> for Cell {
    fn from(v: Value) -> Self {
        Self(v)
    }
}

/// `[{"type":"text","text":"a"},{"text":"b"}]` → `"ab"`; `None` if any element isn't a fragment.
fn rich_text(items: &[Value]) -> Option<String> {
    let mut out = s!();
    for item in items {
        out.push_str(item.get("text")?.as_str()?);
    }
    Some(out)
}

/* ---------------- Join date ---------------- */

/// Calendar date a member joined, or the "unknown" sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JoinDate {
    Date(NaiveDate),
    Unknown,
}

impl JoinDate {
    /// Epoch milliseconds → date in `offset`. Zero and out-of-range values are `Unknown`.
    pub fn from_millis(ms: i64, offset: &FixedOffset) -> Self {
        if ms == 0 {
            return JoinDate::Unknown;
        }
        match DateTime::from_timestamp_millis(ms) {
            Some(utc) => JoinDate::Date(utc.with_timezone(offset).date_naive()),
            None => JoinDate::Unknown,
        }
    }

    /// Parse the raw `入社日期` cell. Anything that isn't a usable number is `Unknown`.
    pub fn parse(value: Option<&Value>, offset: &FixedOffset) -> Self {
        match value.and_then(epoch_millis) {
            Some(ms) => Self::from_millis(ms, offset),
            None => JoinDate::Unknown,
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            JoinDate::Date(d) => Some(*d),
            JoinDate::Unknown => None,
        }
    }
}

impl fmt::Display for JoinDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinDate::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            JoinDate::Unknown => f.write_str(UNKNOWN_DATE),
        }
    }
}

fn epoch_millis(value: &Value) -> Option<i64> {
    let Value::Number(n) = value else { return None };
    n.as_i64().or_else(|| {
        n.as_f64()
            .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
            .map(|f| f as i64)
    })
}

/* ---------------- Profile + collection ---------------- */

/// One member, derived from one raw record.
#[derive(Clone, Debug, PartialEq)]
pub struct MemberProfile {
    pub record_id: String,
    pub name: String,
    pub student_id: Cell,
    pub grade: Cell,
    pub gender: Cell,
    pub department: Cell,
    pub join_date: JoinDate,
    /// Activity column labels, in the record's field order.
    pub activities: Vec<String>,
}

impl MemberProfile {
    pub fn activity_count(&self) -> usize {
        self.activities.len()
    }
}

/// All members of one load, in fetch order. Replaced wholesale, never patched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemberCollection {
    members: Vec<MemberProfile>,
}

impl MemberCollection {
    pub fn new(members: Vec<MemberProfile>) -> Self {
        Self { members }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MemberProfile> {
        self.members.iter()
    }

    pub fn as_slice(&self) -> &[MemberProfile] {
        &self.members
    }
}

impl FromIterator<MemberProfile> for MemberCollection {
    fn from_iter<I: IntoIterator<Item = MemberProfile>>(iter: I) -> Self {
        Self { members: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a MemberCollection {
    type Item = &'a MemberProfile;
    type IntoIter = std::slice::Iter<'a, MemberProfile>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
