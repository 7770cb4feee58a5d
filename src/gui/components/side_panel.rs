// src/gui/components/side_panel.rs

use eframe::egui;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("使用说明");
    ui.label("1. 输入您的姓名和学号查询个人活动记录");
    ui.label("2. 系统只会显示与您姓名和学号完全匹配的记录");
    ui.label("3. 首次查询需要加载所有数据，请耐心等待");
    ui.label("4. 您可以导出您的活动记录为CSV文件");

    ui.add_space(12.0);
    ui.heading("隐私声明");
    ui.label("本系统仅用于查询个人活动记录，不会显示其他成员的信息。");
    ui.label("您的个人信息将严格保密，不会用于其他用途。");

    ui.add_space(12.0);
    if ui.button("重置查询").on_hover_text("清除已加载的数据，下次查询重新加载").clicked() {
        logf!("UI: Reset clicked");
        actions::reset(app);
    }

    if let Some(err) = &app.startup_error {
        ui.add_space(12.0);
        ui.colored_label(egui::Color32::from_rgb(220, 30, 30), format!("配置错误: {err}"));
    }
}
