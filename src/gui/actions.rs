// src/gui/actions.rs
use crate::{
    error::LookupError,
    file,
    gui::{app::{App, Outcome}, progress::GuiProgress},
};

pub fn search(app: &mut App) {
    app.notice = None;

    if app.name_text.is_empty() && app.id_text.is_empty() {
        return;
    }
    if app.session.is_none() {
        app.status(app.startup_error.clone().unwrap_or_else(|| s!("未配置")));
        return;
    }

    let mut prog = GuiProgress::new(app.status.clone());
    let Some(session) = app.session.as_mut() else { return };
    if !session.is_loaded() {
        logf!("Search: first query, loading all records");
    }

    // → Loads on first use, then matches ←
    let result = session
        .lookup(&app.name_text, &app.id_text, &mut prog)
        .map(|hit| hit.cloned());
    let truncated = session.last_load().and_then(|l| l.truncated);

    match result {
        Ok(Some(member)) => {
            app.outcome = Some(Outcome::Found(member));
        }
        Ok(None) => {
            app.outcome = Some(Outcome::NotFound);
        }
        Err(LookupError::MissingInput) => {
            app.outcome = None;
            app.notice = Some(s!("请同时输入姓名和学号进行查询"));
            return;
        }
        Err(LookupError::Load(e)) => {
            loge!("Search: load failed: {}", e);
            app.outcome = None;
            app.status(format!("查询过程中发生错误: {e}"));
            return;
        }
    }

    if let Some(w) = truncated {
        app.notice = Some(format!("仅加载了部分数据: {w}"));
    }
}

pub fn export(app: &mut App) {
    app.export.set_dir(&app.out_dir_text);

    let Some(member) = app.found() else {
        app.status("没有可导出的记录");
        return;
    };

    match file::write_export_today(member, &app.export) {
        Ok(path) => app.status(format!("已导出到 {}", path.display())),
        Err(e) => {
            loge!("Export: {}", e);
            app.status(format!("导出失败: {e}"));
        }
    }
}

pub fn reset(app: &mut App) {
    if let Some(session) = app.session.as_mut() {
        session.reset();
    }
    app.outcome = None;
    app.notice = None;
    app.status("已重置，下次查询将重新加载所有数据");
}
