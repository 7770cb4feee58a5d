// src/gui/progress.rs
use std::sync::{ Arc, Mutex };
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    pages: usize,
    records: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, pages: 0, records: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn log(&mut self, msg: &str) {
        self.set_status(msg);
    }
    fn page_done(&mut self, page: usize, total: usize) {
        self.pages = page;
        self.records = total;
        self.set_status(format!("已获取第 {} 页数据（共 {} 条）", page, total));
    }
    fn warn(&mut self, msg: &str) {
        self.set_status(format!("警告: {msg}"));
    }
    fn finish(&mut self) {
        if self.pages == 0 {
            self.set_status("加载结束"); // no counts if no page arrived
        } else {
            self.set_status(format!("加载完成（{} 页，{} 条记录）", self.pages, self.records));
        }
    }
}
