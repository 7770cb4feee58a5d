// src/gui/fonts.rs
//
// egui's bundled fonts have no CJK glyphs; borrow one from the system.

use std::sync::Arc;

use eframe::egui::{self, FontData, FontDefinitions, FontFamily};

const CJK_CANDIDATES: &[&str] = &[
    "C:\\Windows\\Fonts\\msyh.ttc",
    "C:\\Windows\\Fonts\\simhei.ttf",
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/STHeiti Medium.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
];

/// Append the first CJK font found as a fallback for both families.
pub fn install_cjk_fallback(ctx: &egui::Context) {
    for path in CJK_CANDIDATES {
        let Ok(bytes) = std::fs::read(path) else { continue };

        let mut fonts = FontDefinitions::default();
        fonts.font_data.insert(s!("cjk"), Arc::new(FontData::from_owned(bytes)));
        for family in [FontFamily::Proportional, FontFamily::Monospace] {
            fonts.families.entry(family).or_default().push(s!("cjk"));
        }
        ctx.set_fonts(fonts);
        logf!("GUI: CJK fallback font {}", path);
        return;
    }
    logw!("GUI: no CJK font found, Chinese text may not render");
}
