// src/file.rs
//
// Export of one member's activity record to a CSV file.

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::{Local, NaiveDate};

use crate::config::consts::{EXPORT_EXT, EXPORT_LABEL};
use crate::config::options::ExportOptions;
use crate::core::sanitize::sanitize_file_stem;
use crate::csv::to_export_string;
use crate::error::ExportError;
use crate::members::MemberProfile;

pub const EXPORT_HEADERS: [&str; 7] = ["姓名", "学号", "年级", "性别", "院系", "入社日期", "活动名称"];

/// One row per attended activity; the profile columns repeat on every row.
pub fn activity_rows(member: &MemberProfile) -> Vec<Vec<String>> {
    let base = [
        member.name.clone(),
        member.student_id.text(),
        member.grade.text(),
        member.gender.text(),
        member.department.text(),
        member.join_date.to_string(),
    ];
    member
        .activities
        .iter()
        .map(|activity| {
            let mut row = Vec::with_capacity(EXPORT_HEADERS.len());
            row.extend(base.iter().cloned());
            row.push(activity.clone());
            row
        })
        .collect()
}

/// Full file contents: BOM, header, rows.
pub fn export_string(member: &MemberProfile) -> String {
    to_export_string(&EXPORT_HEADERS, &activity_rows(member), ',')
}

/// `<name>_活动记录_<YYYYMMDD>.csv`
pub fn export_file_name(member: &MemberProfile, date: NaiveDate) -> String {
    let stem = sanitize_file_stem(&member.name, "member");
    let day = date.format("%Y%m%d").to_string();
    join!(stem, "_", EXPORT_LABEL, "_", &day, ".", EXPORT_EXT)
}

/// Write the export into `dir` (created if missing). Returns the file path.
pub fn write_export(member: &MemberProfile, dir: &Path, date: NaiveDate) -> Result<PathBuf, ExportError> {
    ensure_directory(dir)?;
    let path = dir.join(export_file_name(member, date));
    fs::write(&path, export_string(member))?;
    logf!("Export: wrote {} ({} activities)", path.display(), member.activity_count());
    Ok(path)
}

/// Write into the configured output directory, stamped with today's local date.
pub fn write_export_today(member: &MemberProfile, export: &ExportOptions) -> Result<PathBuf, ExportError> {
    write_export(member, export.out_dir(), Local::now().date_naive())
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
