// あみだくじ - GUIエントリポイント

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use eframe::egui;

use amidakuji::app::ui::helpers::install_japanese_fonts;
use amidakuji::{logging, App, SessionConfig};

/// 第1引数にJSONの設定ファイルを指定できる
fn load_config() -> Result<SessionConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(SessionConfig::default());
    };
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("設定ファイルを読めません: {}", path))?;
    let config = SessionConfig::from_json(&json)?;
    log::info!("設定を読み込みました: {}", path);
    Ok(config)
}

fn main() -> Result<()> {
    // AMIDAKUJI_LOG_FILE を指定するとログをファイルに書き出す
    let log_path = std::env::var_os("AMIDAKUJI_LOG_FILE");
    logging::init_logger(log_path.as_deref().map(Path::new))
        .context("ログファイルを開けません")?;

    let config = load_config()?;
    log::debug!("設定: {}", config.to_json());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(egui::vec2(1280.0, 720.0)),
        ..Default::default()
    };

    eframe::run_native(
        "あみだくじ",
        options,
        Box::new(move |cc| {
            install_japanese_fonts(&cc.egui_ctx);
            Box::new(App::new(config))
        }),
    )
    .map_err(|e| anyhow!("GUI起動に失敗: {e}"))
}
