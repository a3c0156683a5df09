// エラー型定義

use thiserror::Error;

pub type LadderResult<T> = std::result::Result<T, LadderError>;

/// 梯子の生成・走査・描画で発生するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LadderError {
    #[error("引数が不正です: {message}")]
    InvalidArgument { message: String },

    #[error("描画先が利用できません: {reason}")]
    RenderUnavailable { reason: String },

    #[error("梯子がまだ生成されていません")]
    NoLadder,

    #[error("色の形式が不正です: {input}")]
    InvalidColor { input: String },
}

impl LadderError {
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn render_unavailable(reason: impl Into<String>) -> Self {
        Self::RenderUnavailable {
            reason: reason.into(),
        }
    }
}
