// src/members/mod.rs
//! Member profiles and the wide-table → activity-list transform.

pub mod fields;
pub mod normalize;
pub mod profile;

pub use fields::{FieldShape, is_attended};
pub use normalize::{Normalizer, normalize};
pub use profile::{Cell, JoinDate, MemberCollection, MemberProfile};
