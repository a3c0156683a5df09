// 梯子本体（縦線＋横線）の描画指示

use super::segment::{Segment, SegmentStyle};
use super::target::RenderTarget;
use crate::domain::ladder::Ladder;
use crate::error::LadderResult;

/// 梯子本体の線分一覧（縦線 → 横線の順）
pub fn static_grid_segments(ladder: &Ladder) -> Vec<Segment> {
    let poles = ladder.lane_count() * ladder.terminal_row();
    let mut segments = Vec::with_capacity(poles + ladder.rung_count());

    for lane in 0..ladder.lane_count() {
        for row in 0..ladder.terminal_row() {
            segments.push(Segment::down(lane, row));
        }
    }

    for (coord, node) in ladder.iter() {
        if node.is_rung_start() {
            segments.push(Segment::across_right(coord.lane, coord.row));
        }
    }
    segments
}

/// 梯子本体を描画する
pub fn draw_static_grid(ladder: &Ladder, target: &mut dyn RenderTarget) -> LadderResult<()> {
    target.draw_all(&static_grid_segments(ladder), &SegmentStyle::grid())
}
