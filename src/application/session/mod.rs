// ゲームセッション - 参加者・結果・歩行アニメーション

pub mod animation;
pub mod config;
pub mod event;
pub mod palette;
pub mod service;

pub use animation::{AnimPhase, AnimTick, AnimatedWalk};
pub use config::{ParticipantLimit, RowCount, SessionConfig, StepDelay};
pub use event::{SessionEvent, StartOutcome};
pub use palette::{assign_colors, random_color};
pub use service::{GameOutcome, GameSession, Participant};
