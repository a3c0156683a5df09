// アプリケーション状態

use crate::application::session::{GameSession, SessionConfig};
use crate::infrastructure::render::CanvasBuffer;
use crate::presentation::state::GameScreenState;

const MAX_LOG_LINES: usize = 500;

/// アプリケーション状態
pub struct App {
    pub session: GameSession,
    pub view: GameScreenState,
    pub canvas: CanvasBuffer,
    pub log_lines: Vec<String>,
    pub verbose_logging: bool,
}

impl App {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            session: GameSession::new(config),
            view: GameScreenState::new(),
            canvas: CanvasBuffer::new(),
            log_lines: vec!["待機中".into()],
            verbose_logging: false,
        }
    }

    /// シード固定のセッションで作る（テスト用）
    pub fn with_session(session: GameSession) -> Self {
        Self {
            session,
            ..Self::new(SessionConfig::default())
        }
    }

    pub fn push_log(&mut self, s: String) {
        self.log_lines.push(s);
        if self.log_lines.len() > MAX_LOG_LINES {
            let cut = self.log_lines.len() - MAX_LOG_LINES;
            self.log_lines.drain(0..cut);
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
