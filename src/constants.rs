// 梯子の定数

use std::time::Duration;

/// ====== 梯子の寸法 ======
pub const MIN_LANES: usize = 2;
pub const MAX_LANES: usize = 20;
pub const MIN_ROWS: usize = 3;
pub const DEFAULT_ROWS: usize = 12;
/// 参加者数の既定上限（画面入力）
pub const DEFAULT_PARTICIPANT_LIMIT: usize = 10;

/// 上下それぞれ横線を置かない行数
pub const RUNG_MARGIN: usize = 2;

/// 1ペアあたりの横線密度（候補行に対する割合）
pub const MIN_DENSITY: f64 = 0.25;
pub const MAX_DENSITY: f64 = 0.6;

// 描画用
pub const CELL_WIDTH: f32 = 100.0;
pub const CELL_HEIGHT: f32 = 25.0;
pub const CANVAS_OFFSET_X: f32 = 3.0;
pub const CANVAS_OFFSET_Y: f32 = 2.0;
pub const CANVAS_PADDING: f32 = 6.0;
pub const GRID_STROKE: f32 = 2.0;
pub const PATH_STROKE: f32 = 3.0;
pub const OUTLINE_EXTRA: f32 = 2.0;

/// アニメーション1段あたりの既定待ち時間
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(50);
pub const MAX_STEP_DELAY_MS: u64 = 2000;
