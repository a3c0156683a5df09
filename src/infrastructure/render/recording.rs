// 描画指示を記録する描画先（テスト・ヘッドレス用）

use crate::domain::render::{RenderTarget, Segment, SegmentStyle};
use crate::error::{LadderError, LadderResult};

/// 受け取った線分と見た目をそのまま保持する
pub struct RecordingTarget {
    records: Vec<(Segment, SegmentStyle)>,
    attached: bool,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            attached: true,
        }
    }

    /// 未接続状態で作成（描画不可）
    pub fn detached() -> Self {
        Self {
            records: Vec::new(),
            attached: false,
        }
    }

    pub fn set_attached(&mut self, attached: bool) {
        self.attached = attached;
    }

    pub fn records(&self) -> &[(Segment, SegmentStyle)] {
        &self.records
    }

    pub fn segments(&self) -> Vec<Segment> {
        self.records.iter().map(|(s, _)| *s).collect()
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }
}

impl Default for RecordingTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderTarget for RecordingTarget {
    fn is_ready(&self) -> bool {
        self.attached
    }

    fn draw_segment(&mut self, segment: &Segment, style: &SegmentStyle) -> LadderResult<()> {
        if !self.attached {
            return Err(LadderError::render_unavailable("記録先が未接続です"));
        }
        self.records.push((*segment, *style));
        Ok(())
    }

    fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ladder::Ladder;
    use crate::domain::render::draw_static_grid;

    #[test]
    fn records_static_grid_in_order() {
        let ladder = Ladder::from_rungs(2, 5, &[(0, 2)]).unwrap();
        let mut target = RecordingTarget::new();
        draw_static_grid(&ladder, &mut target).unwrap();

        assert_eq!(target.count(), 2 * 4 + 1);
        assert_eq!(target.segments()[8], Segment::across_right(0, 2));
        assert!(target.records().iter().all(|(_, s)| *s == SegmentStyle::grid()));
    }

    #[test]
    fn drawing_twice_repeats_instructions() {
        let ladder = Ladder::from_rungs(3, 8, &[(0, 2), (1, 4)]).unwrap();
        let mut first = RecordingTarget::new();
        let mut second = RecordingTarget::new();
        draw_static_grid(&ladder, &mut first).unwrap();
        draw_static_grid(&ladder, &mut second).unwrap();
        assert_eq!(first.segments(), second.segments());
    }

    #[test]
    fn detached_target_rejects_draw() {
        let mut target = RecordingTarget::detached();
        assert!(!target.is_ready());
        let result = target.draw_segment(&Segment::down(0, 0), &SegmentStyle::grid());
        assert!(matches!(result, Err(LadderError::RenderUnavailable { .. })));
        assert_eq!(target.count(), 0);
    }
}
