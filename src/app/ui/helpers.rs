// UI描画用のヘルパー関数

use egui::{Color32, Stroke};

use crate::domain::render::HexColor;
use crate::infrastructure::render::StrokeLine;

/// HexColor を egui の色へ
pub fn to_color32(color: HexColor) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

/// キャンバスの背景色
pub fn canvas_background(light: bool) -> Color32 {
    if light {
        Color32::from_rgb(250, 250, 250)
    } else {
        Color32::from_rgb(32, 33, 36)
    }
}

/// 蓄積済みの線を塗る
pub fn paint_lines(painter: &egui::Painter, origin: egui::Pos2, lines: &[StrokeLine]) {
    for line in lines {
        let from = origin + egui::vec2(line.from[0], line.from[1]);
        let to = origin + egui::vec2(line.to[0], line.to[1]);
        painter.line_segment([from, to], Stroke::new(line.width, to_color32(line.color)));
    }
}

/// 日本語フォントのインストール
pub fn install_japanese_fonts(ctx: &egui::Context) {
    use egui::{FontData, FontDefinitions, FontFamily};

    let mut fonts = FontDefinitions::default();

    let windir = std::env::var("WINDIR").unwrap_or_else(|_| "C:\\Windows".to_string());
    let candidates = [
        std::path::Path::new(&windir).join("Fonts").join("meiryo.ttc"),
        std::path::Path::new(&windir).join("Fonts").join("YuGothM.ttc"),
        std::path::Path::new(&windir).join("Fonts").join("msgothic.ttc"),
        "/System/Library/Fonts/ヒラギノ角ゴシック W3.ttc".into(),
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc".into(),
        "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc".into(),
    ];

    for path in candidates.iter() {
        let Ok(bytes) = std::fs::read(path) else {
            continue;
        };
        let key = "jp-font".to_string();
        fonts.font_data.insert(key.clone(), FontData::from_owned(bytes));
        for family in [FontFamily::Proportional, FontFamily::Monospace] {
            if let Some(list) = fonts.families.get_mut(&family) {
                list.insert(0, key.clone());
            }
        }
        ctx.set_fonts(fonts);
        log::info!("日本語フォント: {}", path.display());
        return;
    }
    log::warn!("日本語フォントを見つけられませんでした");
}
