// あみだくじ - ライブラリモジュール

pub mod constants;
pub mod error;
pub mod logging;
pub mod domain;         // ドメイン層
pub mod application;    // アプリケーション層
pub mod infrastructure; // インフラ層
pub mod presentation;   // プレゼンテーション層
pub mod app;

// 外部クレートの再エクスポート
pub use anyhow::{anyhow, Context, Result};

// 主要な型を再エクスポート
pub use app::App;
pub use application::session::{
    GameOutcome, GameSession, Participant, SessionConfig, SessionEvent, StartOutcome,
};
pub use domain::ladder::{Coord, Ladder, LadderGenerator, Node, RungDirection};
pub use domain::render::{HexColor, RenderTarget, Segment, SegmentStyle};
pub use domain::walk::{draw_path_sync, outcomes, terminal_lane, walk, Move, PathWalker, WalkStep};
pub use error::{LadderError, LadderResult};
pub use infrastructure::render::{CanvasBuffer, RecordingTarget};
