// アプリケーション層 - ユースケース

pub mod session;

pub use session::{GameSession, SessionConfig, SessionEvent, StartOutcome};
