// src/gui/components/query_panel.rs

use eframe::egui;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("个人信息查询");
    ui.label("请输入您的姓名和学号查询个人活动记录");

    let mut submit = false;
    ui.horizontal(|ui| {
        ui.label("姓名:");
        let r1 = ui.add(egui::TextEdit::singleline(&mut app.name_text)
            .hint_text("请输入您的姓名")
            .desired_width(180.0));

        ui.label("学号:");
        let r2 = ui.add(egui::TextEdit::singleline(&mut app.id_text)
            .hint_text("请输入您的学号")
            .font(egui::TextStyle::Monospace)
            .desired_width(180.0));

        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (r1.lost_focus() || r2.lost_focus()) && enter {
            submit = true;
        }

        let can_search = app.session.is_some();
        if ui.add_enabled(can_search, egui::Button::new("查询")).clicked() {
            submit = true;
        }
    });

    // One-sided input gets a hint, not a query
    let (has_name, has_id) = (!app.name_text.is_empty(), !app.id_text.is_empty());
    if has_name != has_id {
        ui.colored_label(egui::Color32::from_rgb(200, 140, 0), "请同时输入姓名和学号进行查询");
    }

    if submit {
        logd!("UI: search submitted");
        actions::search(app);
    }

    let status = app.status_text();
    ui.label(status);
}
