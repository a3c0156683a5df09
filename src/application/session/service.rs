// ゲームセッションサービス

use std::collections::{BTreeMap, VecDeque};
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use super::animation::{AnimTick, AnimatedWalk};
use super::config::SessionConfig;
use super::event::{SessionEvent, StartOutcome};
use super::palette::assign_colors;
use crate::domain::ladder::{Ladder, LadderGenerator};
use crate::domain::render::{draw_static_grid, HexColor, RenderTarget, SegmentStyle};
use crate::domain::walk::{draw_path_sync, WalkCursor};
use crate::error::{LadderError, LadderResult};
use crate::vlog;

/// 参加者
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Participant {
    pub label: String,
    pub color: HexColor,
}

/// 1人分の結果
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameOutcome {
    pub participant: String,
    pub start_lane: usize,
    pub result_slot: usize,
    pub result: String,
}

/// 参加者・結果ラベル・梯子・歩行状態をまとめて管理する
///
/// 参加者 i は常にレーン i から出発し、到達レーンがそのまま結果スロットになる。
pub struct GameSession {
    config: SessionConfig,
    rng: StdRng,
    participants: Vec<Participant>,
    results: Vec<String>,
    ladder: Option<Ladder>,
    /// 進行中の歩行（Someの間は他の歩行を受け付けない）
    active: Option<AnimatedWalk>,
    /// 参加者 → 結果スロット
    outcomes: BTreeMap<usize, usize>,
    /// 結果スロット → 到達時点の参加者ラベル
    holders: BTreeMap<usize, String>,
    reveal_queue: VecDeque<usize>,
    revealing: bool,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// シード固定（テスト・再現用）
    pub fn with_seed(config: SessionConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: SessionConfig, rng: StdRng) -> Self {
        Self {
            config,
            rng,
            participants: Vec::new(),
            results: Vec::new(),
            ladder: None,
            active: None,
            outcomes: BTreeMap::new(),
            holders: BTreeMap::new(),
            reveal_queue: VecDeque::new(),
            revealing: false,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// ゲームを開始する（梯子を生成し、ラベルと色を初期化）
    pub fn start_game(&mut self, count: usize) -> LadderResult<()> {
        let limit = self.config.participant_limit;
        if !limit.accepts(count) {
            return Err(LadderError::invalid(format!(
                "参加者数は2~{}の範囲: {}",
                limit.get(),
                count
            )));
        }
        let ladder =
            LadderGenerator::with_rng(&mut self.rng).generate(count, self.config.row_count.get())?;
        let colors = assign_colors(&mut self.rng, count);

        self.participants = colors
            .into_iter()
            .enumerate()
            .map(|(i, color)| Participant {
                label: format!("参加者 {}", i + 1),
                color,
            })
            .collect();
        self.results = (0..count).map(|i| format!("結果 {}", i + 1)).collect();
        self.ladder = Some(ladder);
        self.clear_progress();

        log::info!("ゲーム開始: 参加者{}人", count);
        Ok(())
    }

    /// ゲームを終了して初期状態に戻す
    pub fn end_game(&mut self) {
        self.participants.clear();
        self.results.clear();
        self.ladder = None;
        self.clear_progress();
    }

    fn clear_progress(&mut self) {
        self.active = None;
        self.outcomes.clear();
        self.holders.clear();
        self.reveal_queue.clear();
        self.revealing = false;
    }

    pub fn ladder(&self) -> Option<&Ladder> {
        self.ladder.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.ladder.is_some()
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn results(&self) -> &[String] {
        &self.results
    }

    pub fn rename_participant(&mut self, index: usize, label: impl Into<String>) -> LadderResult<()> {
        let participant = self
            .participants
            .get_mut(index)
            .ok_or_else(|| LadderError::invalid(format!("参加者番号が範囲外: {}", index)))?;
        participant.label = label.into();
        Ok(())
    }

    pub fn rename_result(&mut self, index: usize, label: impl Into<String>) -> LadderResult<()> {
        let result = self
            .results
            .get_mut(index)
            .ok_or_else(|| LadderError::invalid(format!("結果番号が範囲外: {}", index)))?;
        *result = label.into();
        Ok(())
    }

    /// 歩行中か（ビジーガード）
    pub fn is_busy(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_participant(&self) -> Option<usize> {
        self.active.as_ref().map(|a| a.participant())
    }

    /// 参加者の到達スロット
    pub fn outcome_of(&self, participant: usize) -> Option<usize> {
        self.outcomes.get(&participant).copied()
    }

    /// 結果スロットに到達した参加者のラベル
    pub fn holder_of(&self, slot: usize) -> Option<&str> {
        self.holders.get(&slot).map(String::as_str)
    }

    /// 全員の結果が出たか
    pub fn is_complete(&self) -> bool {
        !self.participants.is_empty() && self.outcomes.len() == self.participants.len()
    }

    fn path_style(&self, participant: usize) -> Option<SegmentStyle> {
        self.participants
            .get(participant)
            .map(|p| SegmentStyle::path(p.color, self.config.light_background))
    }

    /// 参加者の歩行アニメーションを開始する
    pub fn start_walk(
        &mut self,
        participant: usize,
        now: Instant,
        target: &dyn RenderTarget,
    ) -> LadderResult<StartOutcome> {
        if self.is_busy() {
            vlog!("[セッション] 歩行中のため参加者{}の開始要求を無視", participant);
            return Ok(StartOutcome::Rejected);
        }
        let ladder = self.ladder.as_ref().ok_or(LadderError::NoLadder)?;
        let style = self
            .path_style(participant)
            .ok_or_else(|| LadderError::invalid(format!("参加者番号が範囲外: {}", participant)))?;
        let cursor = WalkCursor::new(ladder, participant)?;
        if !target.is_ready() {
            log::warn!("キャンバス未接続のため参加者{}の歩行を開始できません", participant);
            return Err(LadderError::render_unavailable("キャンバスが未接続です"));
        }

        self.active = Some(AnimatedWalk::new(
            participant,
            cursor,
            style,
            self.config.step_delay.as_duration(),
            now,
        ));
        log::info!("歩行開始: 参加者{}", participant);
        Ok(StartOutcome::Started)
    }

    /// 結果の出ていない参加者を順に歩かせる。戻り値は予約した人数
    pub fn reveal_all(&mut self, now: Instant, target: &mut dyn RenderTarget) -> LadderResult<usize> {
        if self.is_busy() {
            return Ok(0);
        }
        let pending: VecDeque<usize> = (0..self.participants.len())
            .filter(|p| !self.outcomes.contains_key(p))
            .collect();
        let count = pending.len();
        if count == 0 {
            return Ok(0);
        }
        self.reveal_queue = pending;
        self.revealing = true;
        if let Err(e) = self.start_next_queued(now, target) {
            self.reveal_queue.clear();
            self.revealing = false;
            return Err(e);
        }
        Ok(count)
    }

    fn start_next_queued(&mut self, now: Instant, target: &mut dyn RenderTarget) -> LadderResult<()> {
        while let Some(next) = self.reveal_queue.pop_front() {
            if self.outcomes.contains_key(&next) {
                continue;
            }
            self.start_walk(next, now, target)?;
            return Ok(());
        }
        Ok(())
    }

    /// アニメーションを時刻 `now` まで進める
    pub fn tick(&mut self, now: Instant, target: &mut dyn RenderTarget) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        let Some(mut walk) = self.active.take() else {
            return events;
        };
        let Some(ladder) = self.ladder.as_ref() else {
            return events;
        };
        let participant = walk.participant();

        match walk.step(ladder, target, now) {
            Ok(AnimTick::Pending) => {
                self.active = Some(walk);
            }
            Ok(AnimTick::Finished { terminal }) => {
                self.outcomes.insert(participant, terminal);
                if let Some(p) = self.participants.get(participant) {
                    self.holders.insert(terminal, p.label.clone());
                }
                log::info!("歩行完了: 参加者{} → 結果{}", participant, terminal);
                events.push(SessionEvent::WalkFinished {
                    participant,
                    result_slot: terminal,
                });
                if self.revealing {
                    if let Err(e) = self.start_next_queued(now, target) {
                        events.push(self.abort_reveal(participant, e));
                    } else if !self.is_busy() {
                        self.revealing = false;
                        events.push(SessionEvent::AllRevealed);
                    }
                }
            }
            Err(e) => {
                log::warn!("歩行を中断: 参加者{}: {}", participant, e);
                self.reveal_queue.clear();
                self.revealing = false;
                events.push(SessionEvent::WalkAborted {
                    participant,
                    message: e.to_string(),
                });
            }
        }
        events
    }

    fn abort_reveal(&mut self, participant: usize, error: LadderError) -> SessionEvent {
        log::warn!("全員表示を中断: {}", error);
        self.reveal_queue.clear();
        self.revealing = false;
        SessionEvent::WalkAborted {
            participant,
            message: error.to_string(),
        }
    }

    /// 次の描画までの残り時間（歩行中のみ）
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        self.active.as_ref().map(|a| a.remaining(now))
    }

    /// キャンバスを消して梯子本体と完了済みの経路を描き直す
    ///
    /// 歩行中は描きかけの経路が消えるため何もしない（false）。
    pub fn redraw(&self, target: &mut dyn RenderTarget) -> LadderResult<bool> {
        if self.is_busy() {
            return Ok(false);
        }
        let ladder = self.ladder.as_ref().ok_or(LadderError::NoLadder)?;
        if !target.is_ready() {
            return Err(LadderError::render_unavailable("キャンバスが未接続です"));
        }
        target.clear();
        draw_static_grid(ladder, target)?;
        for &participant in self.outcomes.keys() {
            if let Some(style) = self.path_style(participant) {
                draw_path_sync(ladder, participant, &style, target)?;
            }
        }
        Ok(true)
    }

    /// 結果一覧（参加者順）
    pub fn summary(&self) -> Vec<GameOutcome> {
        self.outcomes
            .iter()
            .filter_map(|(&p, &slot)| {
                Some(GameOutcome {
                    participant: self.holders.get(&slot)?.clone(),
                    start_lane: p,
                    result_slot: slot,
                    result: self.results.get(slot)?.clone(),
                })
            })
            .collect()
    }

    pub fn summary_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.summary())
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
