// ゲーム画面の操作ロジック（egui非依存）

use std::time::Instant;

use crate::app::App;
use crate::application::session::{SessionEvent, StartOutcome};
use crate::presentation::state::parse_participant_count;
use crate::domain::render::RenderTarget;

/// ゲーム操作のユーティリティ関数群
pub struct GameOperations;

impl GameOperations {
    /// 入力された参加者数でゲームを開始する
    pub fn start_from_input(app: &mut App) {
        let limit = app.session.config().participant_limit;
        let result = parse_participant_count(&app.view.count_input, limit)
            .and_then(|count| app.session.start_game(count).map(|_| count));
        match result {
            Ok(count) => {
                app.canvas.clear();
                app.view.enter_game();
                app.push_log(format!("ゲーム開始: 参加者{}人", count));
            }
            Err(e) => {
                app.view.set_error(e.to_string());
                app.push_log(format!("エラー: {e}"));
            }
        }
    }

    /// 参加者の歩行を開始する
    pub fn start_walk(app: &mut App, participant: usize, now: Instant) {
        match app.session.start_walk(participant, now, &app.canvas) {
            Ok(StartOutcome::Started) => {
                if let Some(p) = app.session.participants().get(participant) {
                    let label = p.label.clone();
                    app.push_log(format!("{} の経路を表示中…", label));
                }
            }
            Ok(StartOutcome::Rejected) => {}
            Err(e) => app.push_log(format!("エラー: {e}")),
        }
    }

    /// 全員の結果を順に表示する
    pub fn reveal_all(app: &mut App, now: Instant) {
        match app.session.reveal_all(now, &mut app.canvas) {
            Ok(0) => {}
            Ok(n) => app.push_log(format!("{}人の結果を順に表示します", n)),
            Err(e) => app.push_log(format!("エラー: {e}")),
        }
    }

    /// キャンバスを消して描き直す
    pub fn reset_paths(app: &mut App) {
        match app.session.redraw(&mut app.canvas) {
            Ok(true) => app.view.needs_redraw = false,
            Ok(false) => app.push_log("歩行中は描き直せません".into()),
            Err(e) => app.push_log(format!("エラー: {e}")),
        }
    }

    /// キャンバス接続後の初回描画
    pub fn sync_canvas(app: &mut App) {
        if app.view.needs_redraw && app.canvas.is_ready() && !app.session.is_busy() {
            Self::reset_paths(app);
        }
    }

    /// 入力画面へ戻る
    pub fn back(app: &mut App) {
        app.session.end_game();
        app.canvas.clear();
        app.canvas.detach();
        app.view.back_to_landing();
        app.push_log("入力画面に戻りました".into());
    }

    /// アニメーションを進めてイベントをログに反映する
    pub fn tick(app: &mut App, now: Instant) {
        let events = app.session.tick(now, &mut app.canvas);
        for event in events {
            let line = Self::describe(app, &event);
            app.push_log(line);
        }
        Self::log_summary_once(app);
    }

    fn describe(app: &App, event: &SessionEvent) -> String {
        match event {
            SessionEvent::WalkFinished {
                participant,
                result_slot,
            } => {
                let who = app
                    .session
                    .participants()
                    .get(*participant)
                    .map_or("?", |p| p.label.as_str());
                let what = app
                    .session
                    .results()
                    .get(*result_slot)
                    .map_or("?", String::as_str);
                format!("{} → {}", who, what)
            }
            SessionEvent::WalkAborted {
                participant,
                message,
            } => format!("参加者{}の歩行を中断: {}", participant + 1, message),
            SessionEvent::AllRevealed => "全員の結果が出ました".to_string(),
        }
    }

    fn log_summary_once(app: &mut App) {
        if app.view.summary_logged || !app.session.is_complete() {
            return;
        }
        app.view.summary_logged = true;
        match app.session.summary_json() {
            Ok(json) => {
                log::info!("結果一覧: {}", json);
                app.push_log(format!("結果一覧: {}", json));
            }
            Err(e) => log::warn!("結果一覧の出力に失敗: {}", e),
        }
    }
}
