// 経路探索（梯子を上から下へたどる）

use super::step::{Move, WalkStep};
use crate::domain::ladder::{Coord, Ladder, RungDirection};
use crate::domain::render::{RenderTarget, SegmentStyle};
use crate::error::{LadderError, LadderResult};

/// 走査中の位置（梯子を借用しない）
///
/// アニメーション側が梯子と別々に保持できるよう、
/// 1手ごとに梯子を受け取って進める。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WalkCursor {
    start_lane: usize,
    current: Coord,
    finished: bool,
}

impl WalkCursor {
    pub fn new(ladder: &Ladder, start_lane: usize) -> LadderResult<Self> {
        if start_lane >= ladder.lane_count() {
            return Err(LadderError::invalid(format!(
                "開始レーンが範囲外: {}（レーン数 {}）",
                start_lane,
                ladder.lane_count()
            )));
        }
        Ok(Self {
            start_lane,
            current: Coord::new(start_lane, 0),
            finished: false,
        })
    }

    pub fn current(&self) -> Coord {
        self.current
    }

    /// 開始位置に戻す
    pub fn restart(&mut self) {
        self.current = Coord::new(self.start_lane, 0);
        self.finished = false;
    }

    /// 次の1手。終点到達後はNone
    pub fn next_step(&mut self, ladder: &Ladder) -> Option<WalkStep> {
        if self.finished {
            return None;
        }
        let Coord { lane, row } = self.current;
        if row >= ladder.terminal_row() {
            self.finished = true;
            return Some(WalkStep::Terminal(lane));
        }

        let direction = ladder
            .node(self.current)
            .map_or(RungDirection::None, |n| n.direction);
        let mv = match direction {
            RungDirection::ToRight => Move::CrossRight { lane, row },
            RungDirection::ToLeft => Move::CrossLeft { lane, row },
            RungDirection::None => Move::DescendInPlace { lane, row },
        };
        self.current = mv.destination();
        Some(WalkStep::Move(mv))
    }
}

/// 梯子を借用する経路イテレータ（有限・再開可能）
pub struct PathWalker<'a> {
    ladder: &'a Ladder,
    cursor: WalkCursor,
}

impl<'a> PathWalker<'a> {
    pub fn new(ladder: &'a Ladder, start_lane: usize) -> LadderResult<Self> {
        Ok(Self {
            ladder,
            cursor: WalkCursor::new(ladder, start_lane)?,
        })
    }

    pub fn restart(&mut self) {
        self.cursor.restart();
    }

    /// 残りを走らせて到達レーンを返す
    pub fn run_to_end(&mut self) -> usize {
        let mut terminal = self.cursor.current().lane;
        for step in self.by_ref() {
            if let WalkStep::Terminal(lane) = step {
                terminal = lane;
            }
        }
        terminal
    }
}

impl Iterator for PathWalker<'_> {
    type Item = WalkStep;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next_step(self.ladder)
    }
}

/// 経路を列挙する
pub fn walk(ladder: &Ladder, start_lane: usize) -> LadderResult<PathWalker<'_>> {
    PathWalker::new(ladder, start_lane)
}

/// 開始レーンから到達するレーン
pub fn terminal_lane(ladder: &Ladder, start_lane: usize) -> LadderResult<usize> {
    Ok(walk(ladder, start_lane)?.run_to_end())
}

/// 全レーンの到達先（index = 開始レーン）
pub fn outcomes(ladder: &Ladder) -> Vec<usize> {
    (0..ladder.lane_count())
        .filter_map(|lane| terminal_lane(ladder, lane).ok())
        .collect()
}

/// 1レーン分の経路を待ちなしで描画し、到達レーンを返す
pub fn draw_path_sync(
    ladder: &Ladder,
    start_lane: usize,
    style: &SegmentStyle,
    target: &mut dyn RenderTarget,
) -> LadderResult<usize> {
    if !target.is_ready() {
        return Err(LadderError::render_unavailable("キャンバスが未接続です"));
    }
    let mut terminal = start_lane;
    for step in walk(ladder, start_lane)? {
        match step {
            WalkStep::Move(mv) => target.draw_all(&mv.segments(), style)?,
            WalkStep::Terminal(lane) => terminal = lane,
        }
    }
    Ok(terminal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::render::Segment;

    fn sample_ladder() -> Ladder {
        // レーン0-1 を行2、レーン1-2 を行3で接続
        Ladder::from_rungs(3, 6, &[(0, 2), (1, 3)]).unwrap()
    }

    #[test]
    fn walk_follows_rungs() {
        let ladder = sample_ladder();
        let steps: Vec<WalkStep> = walk(&ladder, 0).unwrap().collect();
        assert_eq!(
            steps,
            vec![
                WalkStep::Move(Move::DescendInPlace { lane: 0, row: 0 }),
                WalkStep::Move(Move::DescendInPlace { lane: 0, row: 1 }),
                WalkStep::Move(Move::CrossRight { lane: 0, row: 2 }),
                WalkStep::Move(Move::CrossRight { lane: 1, row: 3 }),
                WalkStep::Move(Move::DescendInPlace { lane: 2, row: 4 }),
                WalkStep::Terminal(2),
            ]
        );
    }

    #[test]
    fn walk_crosses_left_from_right_endpoint() {
        let ladder = sample_ladder();
        let steps: Vec<WalkStep> = walk(&ladder, 1).unwrap().collect();
        assert_eq!(steps[2], WalkStep::Move(Move::CrossLeft { lane: 1, row: 2 }));
        assert_eq!(steps.last(), Some(&WalkStep::Terminal(0)));
    }

    #[test]
    fn walk_rejects_out_of_range_start() {
        let ladder = sample_ladder();
        assert!(walk(&ladder, 3).is_err());
    }

    #[test]
    fn walker_is_finite_and_restartable() {
        let ladder = sample_ladder();
        let mut walker = walk(&ladder, 2).unwrap();
        let first: Vec<WalkStep> = walker.by_ref().collect();
        assert_eq!(walker.next(), None);

        walker.restart();
        let second: Vec<WalkStep> = walker.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn outcomes_are_a_permutation() {
        let ladder = sample_ladder();
        let mut mapping = outcomes(&ladder);
        assert_eq!(mapping, vec![2, 0, 1]);
        mapping.sort_unstable();
        assert_eq!(mapping, vec![0, 1, 2]);
    }

    #[test]
    fn no_rungs_walks_straight_down() {
        let ladder = Ladder::empty(5, 3).unwrap();
        for lane in 0..5 {
            assert_eq!(terminal_lane(&ladder, lane).unwrap(), lane);
        }
    }

    #[derive(Default)]
    struct Collect {
        segments: Vec<Segment>,
        ready: bool,
    }

    impl RenderTarget for Collect {
        fn is_ready(&self) -> bool {
            self.ready
        }

        fn draw_segment(&mut self, segment: &Segment, _style: &SegmentStyle) -> LadderResult<()> {
            self.segments.push(*segment);
            Ok(())
        }

        fn clear(&mut self) {
            self.segments.clear();
        }
    }

    #[test]
    fn draw_path_sync_draws_every_segment() {
        let ladder = sample_ladder();
        let mut target = Collect {
            ready: true,
            ..Default::default()
        };
        let style = SegmentStyle::grid();
        let lane = draw_path_sync(&ladder, 0, &style, &mut target).unwrap();
        assert_eq!(lane, 2);
        // 縦3本 + 横移動2回×2本
        assert_eq!(target.segments.len(), 7);
        assert_eq!(target.segments[2], Segment::across_right(0, 2));
        assert_eq!(target.segments[3], Segment::down(1, 2));
    }

    #[test]
    fn draw_path_sync_requires_ready_target() {
        let ladder = sample_ladder();
        let mut target = Collect::default();
        let result = draw_path_sync(&ladder, 0, &SegmentStyle::grid(), &mut target);
        assert!(matches!(result, Err(LadderError::RenderUnavailable { .. })));
        assert!(target.segments.is_empty());
    }
}
