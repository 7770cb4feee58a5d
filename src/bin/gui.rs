// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use member_lookup::{gui, log};
use eframe::egui::ViewportBuilder;

fn main() {
    log::init();

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_title("成员活动记录查询系统"),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        member_lookup::loge!("GUI failed: {}", e);
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
