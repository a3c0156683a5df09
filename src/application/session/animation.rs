// 歩行アニメーション制御

use std::time::{Duration, Instant};

use crate::domain::ladder::Ladder;
use crate::domain::render::{RenderTarget, Segment, SegmentStyle};
use crate::domain::walk::{WalkCursor, WalkStep};
use crate::error::{LadderError, LadderResult};
use crate::vlog;

/// アニメーション段階
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimPhase {
    /// 次の手をすぐ描ける
    Ready,
    /// 横線を描いた直後（縦線待ち）
    AfterAcross { down: Segment },
    /// 1手描き終えて待機中
    AfterDown,
}

/// 1ステップ進めた結果
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimTick {
    Pending,
    Finished { terminal: usize },
}

/// 進行中の歩行アニメーション
///
/// 呼び出し側が現在時刻を渡して `step` を呼ぶ。タイマーは持たないので、
/// テストでは任意の `Instant` を与えて時間を進められる。
/// 待ち時間は実際に線を描いた時刻から数えるため、1回の `step` で描くのは1本まで。
pub struct AnimatedWalk {
    participant: usize,
    cursor: WalkCursor,
    style: SegmentStyle,
    delay: Duration,
    phase: AnimPhase,
    since: Instant,
}

impl AnimatedWalk {
    pub fn new(
        participant: usize,
        cursor: WalkCursor,
        style: SegmentStyle,
        delay: Duration,
        now: Instant,
    ) -> Self {
        Self {
            participant,
            cursor,
            style,
            delay,
            phase: AnimPhase::Ready,
            since: now,
        }
    }

    pub fn participant(&self) -> usize {
        self.participant
    }

    pub fn phase(&self) -> AnimPhase {
        self.phase
    }

    /// 次の描画までの残り時間（すぐ描けるならゼロ）
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.phase {
            AnimPhase::Ready => Duration::ZERO,
            _ => (self.since + self.delay).saturating_duration_since(now),
        }
    }

    /// 時刻 `now` に描ける次の線を描く（待ち時間中なら何もしない）
    pub fn step(
        &mut self,
        ladder: &Ladder,
        target: &mut dyn RenderTarget,
        now: Instant,
    ) -> LadderResult<AnimTick> {
        loop {
            match self.phase {
                AnimPhase::Ready => {
                    let Some(step) = self.cursor.next_step(ladder) else {
                        return Ok(AnimTick::Finished {
                            terminal: self.cursor.current().lane,
                        });
                    };
                    match step {
                        WalkStep::Terminal(lane) => {
                            vlog!("[歩行] 参加者{}: 終点 {}", self.participant, lane);
                            return Ok(AnimTick::Finished { terminal: lane });
                        }
                        WalkStep::Move(mv) => {
                            vlog!("[歩行] 参加者{}: {:?}", self.participant, mv);
                            let segments = mv.segments();
                            self.draw(target, &segments[0], now)?;
                            self.phase = match segments.get(1) {
                                Some(down) => AnimPhase::AfterAcross { down: *down },
                                None => AnimPhase::AfterDown,
                            };
                        }
                    }
                }
                AnimPhase::AfterAcross { down } => {
                    if now < self.since + self.delay {
                        return Ok(AnimTick::Pending);
                    }
                    self.draw(target, &down, now)?;
                    self.phase = AnimPhase::AfterDown;
                }
                AnimPhase::AfterDown => {
                    if now < self.since + self.delay {
                        return Ok(AnimTick::Pending);
                    }
                    self.phase = AnimPhase::Ready;
                }
            }
        }
    }

    fn draw(
        &mut self,
        target: &mut dyn RenderTarget,
        segment: &Segment,
        now: Instant,
    ) -> LadderResult<()> {
        if !target.is_ready() {
            return Err(LadderError::render_unavailable("キャンバスが未接続です"));
        }
        target.draw_segment(segment, &self.style)?;
        self.since = now;
        Ok(())
    }
}
