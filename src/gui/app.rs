// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    bitable::FeishuClient,
    config::{Settings, options::ExportOptions},
    members::MemberProfile,
    session::{Session, Source},
};

use super::{components, fonts};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let boot = boot();
    eframe::run_native(
        "成员活动记录查询系统",
        options,
        Box::new(move |cc| {
            fonts::install_cjk_fallback(&cc.egui_ctx);
            Ok(Box::new(App::new(boot)))
        }),
    )?;
    Ok(())
}

/// Settings + HTTP client, or the reason the app cannot query anything.
fn boot() -> Result<(Session<FeishuClient>, ExportOptions), String> {
    let settings = Settings::load(None).map_err(|e| e.to_string())?;
    let source = Source::from_settings(&settings).map_err(|e| e.to_string())?;
    let api = FeishuClient::new().map_err(|e| e.to_string())?;
    Ok((Session::new(api, source), settings.export))
}

/// What the last search produced.
#[derive(Clone, Debug)]
pub enum Outcome {
    Found(MemberProfile),
    NotFound,
}

pub struct App {
    // `None` when startup failed; `startup_error` says why
    pub session: Option<Session<FeishuClient>>,
    pub startup_error: Option<String>,
    pub export: ExportOptions,

    // form
    pub name_text: String,
    pub id_text: String,
    pub out_dir_text: String,

    // result + user-facing notices
    pub outcome: Option<Outcome>,
    pub notice: Option<String>,

    // status line (progress writes here)
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(boot: Result<(Session<FeishuClient>, ExportOptions), String>) -> Self {
        let (session, export, startup_error, status) = match boot {
            Ok((session, export)) => (Some(session), export, None, s!("就绪")),
            Err(e) => {
                loge!("Init: {}", e);
                (None, ExportOptions::default(), Some(e), s!("未配置"))
            }
        };
        let out_dir_text = export.out_dir().to_string_lossy().into_owned();
        logf!("Init: configured={}", session.is_some());

        Self {
            session,
            startup_error,
            export,
            name_text: s!(),
            id_text: s!(),
            out_dir_text,
            outcome: None,
            notice: None,
            status: Arc::new(Mutex::new(status)),
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn found(&self) -> Option<&MemberProfile> {
        match &self.outcome {
            Some(Outcome::Found(m)) => Some(m),
            _ => None,
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("help")
            .resizable(false)
            .show(ctx, |ui| {
                components::side_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::query_panel::draw(ui, self);

            ui.separator();

            components::member_view::draw(ui, self);
        });
    }
}
