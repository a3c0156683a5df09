// ログ設定と詳細トレース
//
// 出力はすべて log ファサード経由。詳細トレースは実行中に切り替えられるよう
// 専用ターゲットに info レベルで流し、フラグで抑止する。

use std::fs::File;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

/// 詳細トレースのターゲット名
pub const TRACE_TARGET: &str = "amidakuji::trace";

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// env_logger の設定（既定フィルタは info）
///
/// `log_file` を渡すと標準エラーの代わりにファイルへ書き出す。
pub fn logger_builder(log_file: Option<File>) -> env_logger::Builder {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(file) = log_file {
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder
}

/// ロガーを初期化する（初期化済みなら何もしない）
pub fn init_logger(log_path: Option<&Path>) -> std::io::Result<()> {
    let file = log_path.map(File::create).transpose()?;
    if logger_builder(file).try_init().is_err() {
        log::debug!("ロガーは初期化済みです");
    }
    Ok(())
}

/// 詳細トレースの有効・無効
pub fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// 詳細トレース出力マクロ
#[macro_export]
macro_rules! vlog {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            ::log::info!(target: $crate::logging::TRACE_TARGET, $($arg)*);
        }
    };
}
