// src/members/fields.rs
//
// Column labels of the membership table and the rule that turns any
// other non-empty column into an attended activity.

use serde_json::Value;

pub const NAME: &str = "姓名";
pub const STUDENT_ID: &str = "学号";
pub const GRADE: &str = "年级";
pub const GENDER: &str = "性别";
pub const DEPARTMENT: &str = "院系";
pub const JOIN_DATE: &str = "入社日期";

/// Columns that are profile data or survey answers, never activities.
/// Matched by exact string equality against the table's column names.
pub const EXCLUDED_FIELDS: [&str; 15] = [
    "您的微信号",
    "想说的话",
    "判断",
    "扫码交社费",
    "您来到爱心社希望收获",
    "您来到爱心社希望收获：其他",
    "（旧题）",
    "主要活动的部组（多选）",
    "骨干",
    JOIN_DATE,
    NAME,
    STUDENT_ID,
    GRADE,
    GENDER,
    DEPARTMENT,
];

pub fn is_excluded(field: &str) -> bool {
    EXCLUDED_FIELDS.contains(&field)
}

/// Emptiness classes of a cell value. Only `Other` marks attendance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldShape {
    Null,
    EmptyMap,
    EmptyList,
    /// Anything else, including `0`, `false` and `""`.
    Other,
}

impl FieldShape {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => FieldShape::Null,
            Value::Object(m) if m.is_empty() => FieldShape::EmptyMap,
            Value::Array(a) if a.is_empty() => FieldShape::EmptyList,
            _ => FieldShape::Other,
        }
    }
}

/// Does this cell count as "attended"? Looks at emptiness only, never content.
pub fn is_attended(value: &Value) -> bool {
    FieldShape::of(value) == FieldShape::Other
}
