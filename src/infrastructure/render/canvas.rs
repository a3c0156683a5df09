// 描画済みの線を保持するキャンバスバッファ
//
// egui は毎フレーム描き直すため、描画指示をピクセル座標の線として
// 蓄積しておき、UI側が毎フレームこれを塗る。

use serde::Serialize;

use crate::domain::render::{HexColor, RenderTarget, Segment, SegmentStyle};
use crate::error::{LadderError, LadderResult};

/// キャンバス上の1本の線（ピクセル座標）
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StrokeLine {
    pub from: [f32; 2],
    pub to: [f32; 2],
    pub color: HexColor,
    pub width: f32,
}

/// 線の蓄積先。UIがキャンバス領域を確保するまでは未接続
pub struct CanvasBuffer {
    lines: Vec<StrokeLine>,
    attached: bool,
}

impl CanvasBuffer {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            attached: false,
        }
    }

    /// キャンバス領域が確保された
    pub fn attach(&mut self) {
        self.attached = true;
    }

    pub fn detach(&mut self) {
        self.attached = false;
    }

    pub fn lines(&self) -> &[StrokeLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for CanvasBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderTarget for CanvasBuffer {
    fn is_ready(&self) -> bool {
        self.attached
    }

    fn draw_segment(&mut self, segment: &Segment, style: &SegmentStyle) -> LadderResult<()> {
        if !self.attached {
            return Err(LadderError::render_unavailable("キャンバスが未接続です"));
        }
        let (from, to) = style.endpoints(segment);
        // 経路線は先に縁取りを敷く
        if let Some((color, width)) = style.outline() {
            self.lines.push(StrokeLine {
                from,
                to,
                color,
                width,
            });
        }
        self.lines.push(StrokeLine {
            from,
            to,
            color: style.color,
            width: style.stroke_width,
        });
        Ok(())
    }

    fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_detached() {
        let mut canvas = CanvasBuffer::new();
        assert!(!canvas.is_ready());
        assert!(canvas
            .draw_segment(&Segment::down(0, 0), &SegmentStyle::grid())
            .is_err());
        canvas.attach();
        assert!(canvas.is_ready());
    }

    #[test]
    fn grid_segment_is_single_line() {
        let mut canvas = CanvasBuffer::new();
        canvas.attach();
        canvas
            .draw_segment(&Segment::down(1, 0), &SegmentStyle::grid())
            .unwrap();
        assert_eq!(
            canvas.lines(),
            &[StrokeLine {
                from: [103.0, 2.0],
                to: [103.0, 27.0],
                color: HexColor::GRID,
                width: 2.0,
            }]
        );
    }

    #[test]
    fn path_segment_gets_outline_first() {
        let mut canvas = CanvasBuffer::new();
        canvas.attach();
        let style = SegmentStyle::path(HexColor::rgb(255, 0, 0), false);
        canvas
            .draw_segment(&Segment::across_right(0, 2), &style)
            .unwrap();

        let lines = canvas.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].color, HexColor::rgba(255, 255, 255, 204));
        assert_eq!(lines[0].width, 5.0);
        assert_eq!(lines[1].color, HexColor::rgb(255, 0, 0));
        assert_eq!(lines[1].width, 3.0);
    }

    #[test]
    fn clear_keeps_attachment() {
        let mut canvas = CanvasBuffer::new();
        canvas.attach();
        canvas
            .draw_segment(&Segment::down(0, 0), &SegmentStyle::grid())
            .unwrap();
        canvas.clear();
        assert!(canvas.is_empty());
        assert!(canvas.is_ready());
    }
}
