// 線分の描画指示

use serde::{Deserialize, Serialize};

use super::color::HexColor;
use crate::constants::{
    CANVAS_OFFSET_X, CANVAS_OFFSET_Y, CANVAS_PADDING, CELL_HEIGHT, CELL_WIDTH, GRID_STROKE, OUTLINE_EXTRA,
    PATH_STROKE,
};

/// 線分の軸
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// 線分の向き
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Right,
    Left,
    Down,
}

/// (lane, row) から伸びる1本の線分
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    pub lane: usize,
    pub row: usize,
    pub axis: Axis,
    pub orientation: Orientation,
}

impl Segment {
    pub const fn down(lane: usize, row: usize) -> Self {
        Self {
            lane,
            row,
            axis: Axis::Vertical,
            orientation: Orientation::Down,
        }
    }

    pub const fn across_right(lane: usize, row: usize) -> Self {
        Self {
            lane,
            row,
            axis: Axis::Horizontal,
            orientation: Orientation::Right,
        }
    }

    pub const fn across_left(lane: usize, row: usize) -> Self {
        Self {
            lane,
            row,
            axis: Axis::Horizontal,
            orientation: Orientation::Left,
        }
    }

    /// キャンバス上の始点と終点（ピクセル）
    pub fn endpoints(&self, cell_width: f32, cell_height: f32) -> ([f32; 2], [f32; 2]) {
        let x = self.lane as f32 * cell_width + CANVAS_OFFSET_X;
        let y = self.row as f32 * cell_height + CANVAS_OFFSET_Y;
        let end = match self.orientation {
            Orientation::Right => [x + cell_width, y],
            Orientation::Left => [x - cell_width, y],
            Orientation::Down => [x, y + cell_height],
        };
        ([x, y], end)
    }
}

/// 線の見た目
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SegmentStyle {
    pub color: HexColor,
    pub stroke_width: f32,
    pub cell_width: f32,
    pub cell_height: f32,
    pub light_background: bool,
}

impl SegmentStyle {
    /// 梯子本体
    pub fn grid() -> Self {
        Self {
            color: HexColor::GRID,
            stroke_width: GRID_STROKE,
            cell_width: CELL_WIDTH,
            cell_height: CELL_HEIGHT,
            light_background: false,
        }
    }

    /// 参加者の経路
    pub fn path(color: HexColor, light_background: bool) -> Self {
        Self {
            color,
            stroke_width: PATH_STROKE,
            cell_width: CELL_WIDTH,
            cell_height: CELL_HEIGHT,
            light_background,
        }
    }

    /// 縁取り線（梯子本体の色以外のときだけ）
    pub fn outline(&self) -> Option<(HexColor, f32)> {
        if self.color == HexColor::GRID {
            return None;
        }
        let color = if self.light_background {
            HexColor::rgba(0, 0, 0, 51)
        } else {
            HexColor::rgba(255, 255, 255, 204)
        };
        Some((color, self.stroke_width + OUTLINE_EXTRA))
    }

    pub fn endpoints(&self, segment: &Segment) -> ([f32; 2], [f32; 2]) {
        segment.endpoints(self.cell_width, self.cell_height)
    }
}

/// 梯子全体を収めるキャンバスサイズ
pub fn canvas_size(lane_count: usize, row_count: usize, cell_width: f32, cell_height: f32) -> [f32; 2] {
    [
        lane_count.saturating_sub(1) as f32 * cell_width + CANVAS_PADDING,
        row_count.saturating_sub(1) as f32 * cell_height + CANVAS_PADDING,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn down_segment_endpoints() {
        let (start, end) = Segment::down(1, 2).endpoints(100.0, 25.0);
        assert_eq!(start, [103.0, 52.0]);
        assert_eq!(end, [103.0, 77.0]);
    }

    #[test]
    fn horizontal_segment_endpoints() {
        let (start, end) = Segment::across_right(0, 3).endpoints(100.0, 25.0);
        assert_eq!(start, [3.0, 77.0]);
        assert_eq!(end, [103.0, 77.0]);

        let (start, end) = Segment::across_left(2, 3).endpoints(100.0, 25.0);
        assert_eq!(start, [203.0, 77.0]);
        assert_eq!(end, [103.0, 77.0]);
    }

    #[test]
    fn grid_style_has_no_outline() {
        assert!(SegmentStyle::grid().outline().is_none());
    }

    #[test]
    fn path_outline_depends_on_background() {
        let color = HexColor::rgb(200, 10, 10);
        let (dark, width) = SegmentStyle::path(color, false).outline().unwrap();
        assert_eq!(dark, HexColor::rgba(255, 255, 255, 204));
        assert_eq!(width, 5.0);
        let (light, _) = SegmentStyle::path(color, true).outline().unwrap();
        assert_eq!(light, HexColor::rgba(0, 0, 0, 51));
    }

    #[test]
    fn canvas_size_matches_ladder() {
        assert_eq!(canvas_size(3, 12, 100.0, 25.0), [206.0, 281.0]);
    }
}
