// 梯子の性質テスト（proptest）

use proptest::prelude::*;

use amidakuji::constants::RUNG_MARGIN;
use amidakuji::domain::ladder::{density_bounds, Ladder, LadderGenerator, RungDirection};
use amidakuji::domain::render::{draw_static_grid, RenderTarget};
use amidakuji::domain::walk::{outcomes, walk};
use amidakuji::infrastructure::render::RecordingTarget;

fn generate(seed: u64, lanes: usize, rows: usize) -> Ladder {
    LadderGenerator::seeded(seed).generate(lanes, rows).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn outcomes_form_a_bijection(seed in any::<u64>(), lanes in 2usize..=20, rows in 3usize..=30) {
        let ladder = generate(seed, lanes, rows);
        let mut mapping = outcomes(&ladder);
        prop_assert_eq!(mapping.len(), lanes);
        mapping.sort_unstable();
        prop_assert_eq!(mapping, (0..lanes).collect::<Vec<_>>());
    }

    #[test]
    fn rungs_are_never_half(seed in any::<u64>(), lanes in 2usize..=12, rows in 3usize..=20) {
        let ladder = generate(seed, lanes, rows);
        for (coord, node) in ladder.iter() {
            prop_assert_eq!(node.has_rung, node.direction != RungDirection::None);
            match node.direction {
                RungDirection::ToRight => {
                    let right = ladder.get(coord.lane + 1, coord.row);
                    prop_assert_eq!(right.map(|n| n.direction), Some(RungDirection::ToLeft));
                }
                RungDirection::ToLeft => {
                    prop_assert!(coord.lane > 0);
                    let left = ladder.get(coord.lane - 1, coord.row);
                    prop_assert_eq!(left.map(|n| n.direction), Some(RungDirection::ToRight));
                }
                RungDirection::None => {}
            }
        }
    }

    #[test]
    fn margins_stay_empty(seed in any::<u64>(), lanes in 2usize..=12, rows in 3usize..=20) {
        let ladder = generate(seed, lanes, rows);
        for (coord, node) in ladder.iter() {
            if coord.row < RUNG_MARGIN || coord.row + RUNG_MARGIN >= rows {
                prop_assert!(!node.has_rung, "rung at {}", coord);
            }
        }
    }

    #[test]
    fn density_is_bounded_per_pair(seed in any::<u64>(), lanes in 2usize..=12, rows in 3usize..=20) {
        let ladder = generate(seed, lanes, rows);
        for lane in 0..lanes - 1 {
            let previous = if lane == 0 { Vec::new() } else { ladder.rung_rows(lane - 1) };
            let available = (RUNG_MARGIN..rows.saturating_sub(RUNG_MARGIN))
                .filter(|row| !previous.contains(row))
                .count();
            let placed = ladder.rung_rows(lane).len();
            match density_bounds(available) {
                Some((min, max)) => prop_assert!((min..=max).contains(&placed)),
                None => prop_assert_eq!(placed, 0),
            }
        }
    }

    #[test]
    fn neighbouring_pairs_never_share_a_row(seed in any::<u64>(), lanes in 3usize..=12, rows in 5usize..=20) {
        let ladder = generate(seed, lanes, rows);
        for lane in 1..lanes - 1 {
            let left = ladder.rung_rows(lane - 1);
            for row in ladder.rung_rows(lane) {
                prop_assert!(!left.contains(&row));
            }
        }
    }

    #[test]
    fn traversal_is_deterministic(seed in any::<u64>(), lanes in 2usize..=10, rows in 3usize..=16) {
        let ladder = generate(seed, lanes, rows);
        for lane in 0..lanes {
            let first: Vec<_> = walk(&ladder, lane).unwrap().collect();
            let second: Vec<_> = walk(&ladder, lane).unwrap().collect();
            prop_assert_eq!(first.len(), rows);
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn same_seed_gives_same_ladder(seed in any::<u64>(), lanes in 2usize..=10, rows in 3usize..=16) {
        prop_assert_eq!(generate(seed, lanes, rows), generate(seed, lanes, rows));
    }

    #[test]
    fn static_render_is_repeatable(seed in any::<u64>(), lanes in 2usize..=8, rows in 3usize..=16) {
        let ladder = generate(seed, lanes, rows);
        let mut target = RecordingTarget::new();
        draw_static_grid(&ladder, &mut target).unwrap();
        let first = target.records().to_vec();
        target.clear();
        draw_static_grid(&ladder, &mut target).unwrap();
        prop_assert_eq!(target.records(), first.as_slice());
        prop_assert_eq!(first.len(), lanes * (rows - 1) + ladder.rung_count());
    }
}
