// 描画先のtrait

use super::segment::{Segment, SegmentStyle};
use crate::error::LadderResult;

/// 線分を描画する先（キャンバスなど）
///
/// ゲームロジックの検証は行わない。同じ線分を何度描いてもよい。
pub trait RenderTarget {
    /// 描画可能か（キャンバスが未接続ならfalse）
    fn is_ready(&self) -> bool {
        true
    }

    /// 線分を1本描画する
    fn draw_segment(&mut self, segment: &Segment, style: &SegmentStyle) -> LadderResult<()>;

    /// 複数の線分を順に描画する
    fn draw_all(&mut self, segments: &[Segment], style: &SegmentStyle) -> LadderResult<()> {
        for segment in segments {
            self.draw_segment(segment, style)?;
        }
        Ok(())
    }

    /// 描画内容を消去する
    fn clear(&mut self);
}
