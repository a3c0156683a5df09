// 梯子生成器

use rand::rngs::{StdRng, ThreadRng};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::grid::Ladder;
use super::node::RungDirection;
use crate::constants::{MAX_DENSITY, MIN_DENSITY, RUNG_MARGIN};
use crate::error::LadderResult;
use crate::vlog;

/// 横線本数の範囲 (min, max)。候補行がなければNone
pub fn density_bounds(available: usize) -> Option<(usize, usize)> {
    if available == 0 {
        return None;
    }
    let min_lines = 1.max((available as f64 * MIN_DENSITY).floor() as usize);
    let max_lines = min_lines.max((available as f64 * MAX_DENSITY).floor() as usize);
    Some((min_lines, max_lines))
}

/// レーンペア (lane, lane+1) に横線を置ける行
///
/// 上下2行ずつの余白を除き、直前のペア (lane-1, lane) が同じ行に
/// 横線を置いている行も除く（ジグザグにする）。
pub fn candidate_rows(ladder: &Ladder, lane: usize) -> Vec<usize> {
    let end = ladder.row_count().saturating_sub(RUNG_MARGIN);
    (RUNG_MARGIN..end)
        .filter(|&row| {
            if lane == 0 {
                return true;
            }
            ladder
                .get(lane - 1, row)
                .map_or(true, |n| n.direction != RungDirection::ToRight)
        })
        .collect()
}

/// 乱数源を持つ梯子生成器
pub struct LadderGenerator<R: Rng> {
    rng: R,
}

impl LadderGenerator<ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for LadderGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl LadderGenerator<StdRng> {
    /// シード固定（テスト・再現用）
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> LadderGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// 梯子を生成する
    pub fn generate(&mut self, lane_count: usize, row_count: usize) -> LadderResult<Ladder> {
        let mut ladder = Ladder::empty(lane_count, row_count)?;

        for lane in 0..lane_count - 1 {
            let candidates = candidate_rows(&ladder, lane);
            let Some((min_lines, max_lines)) = density_bounds(candidates.len()) else {
                vlog!("[生成器] ペア{}: 候補行なし", lane);
                continue;
            };
            let target = self.rng.gen_range(min_lines..=max_lines);
            vlog!(
                "[生成器] ペア{}: 候補{}行 → {}本（範囲 {}..={}）",
                lane,
                candidates.len(),
                target,
                min_lines,
                max_lines
            );

            let selected: Vec<usize> = candidates
                .choose_multiple(&mut self.rng, target)
                .copied()
                .collect();
            for row in selected {
                ladder.place_rung(lane, row);
            }
        }

        log::debug!(
            "梯子を生成: {}レーン × {}行, 横線{}本",
            lane_count,
            row_count,
            ladder.rung_count()
        );
        Ok(ladder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn density_bounds_for_eight_rows() {
        assert_eq!(density_bounds(8), Some((2, 4)));
    }

    #[test]
    fn density_bounds_forces_at_least_one() {
        assert_eq!(density_bounds(1), Some((1, 1)));
        assert_eq!(density_bounds(3), Some((1, 1)));
        assert_eq!(density_bounds(0), None);
    }

    #[test]
    fn candidate_rows_respect_margins() {
        let ladder = Ladder::empty(2, 12).unwrap();
        assert_eq!(candidate_rows(&ladder, 0), (2..=9).collect::<Vec<_>>());
    }

    #[test]
    fn candidate_rows_empty_for_short_ladder() {
        let ladder = Ladder::empty(5, 4).unwrap();
        assert!(candidate_rows(&ladder, 0).is_empty());
    }

    #[test]
    fn candidate_rows_skip_previous_pair_rungs() {
        let ladder = Ladder::from_rungs(3, 12, &[(0, 4), (0, 7)]).unwrap();
        let rows = candidate_rows(&ladder, 1);
        assert!(!rows.contains(&4));
        assert!(!rows.contains(&7));
        assert_eq!(rows.len(), 6);
    }

    #[test]
    fn generate_rejects_invalid_arguments() {
        let mut generator = LadderGenerator::seeded(1);
        assert!(generator.generate(1, 12).is_err());
        assert!(generator.generate(4, 2).is_err());
    }

    #[test]
    fn generated_ladder_is_valid() {
        let mut generator = LadderGenerator::seeded(42);
        for lanes in 2..=10 {
            let ladder = generator.generate(lanes, 12).unwrap();
            assert!(ladder.validate().is_ok(), "lanes={}", lanes);
        }
    }

    #[test]
    fn two_lanes_twelve_rows_has_two_to_four_rungs() {
        let mut generator = LadderGenerator::seeded(7);
        for _ in 0..50 {
            let ladder = generator.generate(2, 12).unwrap();
            let count = ladder.rung_count();
            assert!((2..=4).contains(&count), "count={}", count);
        }
    }

    #[test]
    fn three_rows_produce_no_rungs() {
        let mut generator = LadderGenerator::seeded(3);
        let ladder = generator.generate(5, 3).unwrap();
        assert_eq!(ladder.rung_count(), 0);
    }

    #[test]
    fn same_seed_same_ladder() {
        let a = LadderGenerator::seeded(99).generate(6, 12).unwrap();
        let b = LadderGenerator::seeded(99).generate(6, 12).unwrap();
        assert_eq!(a, b);
    }
}
