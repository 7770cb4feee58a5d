// src/gui/components/member_view.rs
//
// Result area: profile, numbered activities, export bar.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::gui::{actions, app::{App, Outcome}};
use crate::members::MemberProfile;

const WARN: egui::Color32 = egui::Color32::from_rgb(200, 140, 0);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if let Some(notice) = &app.notice {
        ui.colored_label(WARN, notice);
    }

    let member = match &app.outcome {
        None => return,
        Some(Outcome::NotFound) => {
            ui.colored_label(WARN, "未找到匹配的成员记录，请检查姓名和学号是否正确");
            return;
        }
        Some(Outcome::Found(m)) => m.clone(),
    };

    ui.label(RichText::new(format!("找到您的记录: {} ({})", member.name, member.student_id)).strong());
    ui.add_space(6.0);

    profile_grid(ui, &member);

    ui.add_space(8.0);
    ui.heading("参加的活动");
    if member.activities.is_empty() {
        ui.label("暂无活动记录");
    } else {
        activity_table(ui, &member);
    }

    ui.separator();
    export_bar(ui, app);
}

fn profile_grid(ui: &mut egui::Ui, m: &MemberProfile) {
    egui::Grid::new("profile")
        .num_columns(2)
        .spacing([24.0, 4.0])
        .show(ui, |ui| {
            let rows = [
                ("年级", m.grade.text()),
                ("性别", m.gender.text()),
                ("院系", m.department.text()),
                ("入社日期", m.join_date.to_string()),
                ("参加活动数", m.activity_count().to_string()),
            ];
            for (label, value) in rows {
                ui.label(RichText::new(label).strong());
                ui.label(value);
                ui.end_row();
            }
        });
}

fn activity_table(ui: &mut egui::Ui, m: &MemberProfile) {
    let height = (ui.available_height() - 60.0).max(120.0);
    TableBuilder::new(ui)
        .striped(true)
        .resizable(false)
        .max_scroll_height(height)
        .column(Column::exact(40.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| { ui.strong("#"); });
            header.col(|ui| { ui.strong("活动名称"); });
        })
        .body(|mut body| {
            for (i, activity) in m.activities.iter().enumerate() {
                body.row(18.0, |mut row| {
                    row.col(|ui| { ui.label((i + 1).to_string()); });
                    row.col(|ui| { ui.label(activity); });
                });
            }
        });
}

fn export_bar(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("导出目录:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_dir_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            logd!("UI: out_dir_text changed → {}", app.out_dir_text);
        }

        if ui.button("导出我的活动记录").clicked() {
            actions::export(app);
        }
    });
}
