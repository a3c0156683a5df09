// ゲーム画面のUI状態管理

use crate::application::session::ParticipantLimit;
use crate::constants::MIN_LANES;
use crate::error::{LadderError, LadderResult};

/// 表示中の画面
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    /// 参加者数の入力
    Landing,
    /// 梯子と参加者・結果の表示
    Playing,
}

impl Default for Screen {
    fn default() -> Self {
        Self::Landing
    }
}

/// 参加者数の入力を解釈する
pub fn parse_participant_count(input: &str, limit: ParticipantLimit) -> LadderResult<usize> {
    let trimmed = input.trim();
    let count: usize = trimmed.parse().map_err(|_| {
        LadderError::invalid(format!("参加者数を数字で入力してください: {:?}", trimmed))
    })?;
    if !limit.accepts(count) {
        return Err(LadderError::invalid(format!(
            "参加者数は2~{}の範囲で入力してください",
            limit.get()
        )));
    }
    Ok(count)
}

/// ゲーム画面のUI状態
#[derive(Clone, Debug)]
pub struct GameScreenState {
    /// 現在の画面
    pub screen: Screen,
    /// 参加者数の入力欄
    pub count_input: String,
    /// 入力エラーなどの表示メッセージ
    pub message: Option<String>,
    /// キャンバスの再描画が必要か
    pub needs_redraw: bool,
    /// 全員の結果を記録済みか
    pub summary_logged: bool,
}

impl GameScreenState {
    pub fn new() -> Self {
        Self {
            screen: Screen::Landing,
            count_input: MIN_LANES.to_string(),
            message: None,
            needs_redraw: false,
            summary_logged: false,
        }
    }

    /// ゲーム画面へ
    pub fn enter_game(&mut self) {
        self.screen = Screen::Playing;
        self.message = None;
        self.needs_redraw = true;
        self.summary_logged = false;
    }

    /// 入力画面へ戻る
    pub fn back_to_landing(&mut self) {
        self.screen = Screen::Landing;
        self.needs_redraw = false;
    }

    pub fn set_error(&mut self, message: String) {
        self.message = Some(message);
    }

    pub fn is_playing(&self) -> bool {
        self.screen == Screen::Playing
    }
}

impl Default for GameScreenState {
    fn default() -> Self {
        Self::new()
    }
}
