// src/lookup.rs
//
// Exact (name, student ID) lookup over a loaded collection.

use crate::error::LookupError;
use crate::members::{MemberCollection, MemberProfile};

/// A validated lookup request: both parts present.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LookupQuery<'q> {
    pub name: &'q str,
    pub student_id: &'q str,
}

impl<'q> LookupQuery<'q> {
    /// Empty input is a caller mistake, not a "not found".
    pub fn new(name: &'q str, student_id: &'q str) -> Result<Self, LookupError> {
        if name.is_empty() || student_id.is_empty() {
            return Err(LookupError::MissingInput);
        }
        Ok(Self { name, student_id })
    }
}

/// First member whose name and student-ID text both equal the inputs.
///
/// IDs compare as strings: `7` in the table matches `"7"`, never `"07"`.
/// Duplicates are not detected; the first in collection order wins.
pub fn find<'c>(
    collection: &'c MemberCollection,
    name: &str,
    student_id: &str,
) -> Option<&'c MemberProfile> {
    collection
        .iter()
        .find(|m| m.name == name && m.student_id.text() == student_id)
}

pub fn find_query<'c>(collection: &'c MemberCollection, query: &LookupQuery<'_>) -> Option<&'c MemberProfile> {
    find(collection, query.name, query.student_id)
}
