// 経路の1手

use serde::{Deserialize, Serialize};

use crate::domain::ladder::Coord;
use crate::domain::render::Segment;

/// 1行ぶんの移動
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// その場で1行下る
    DescendInPlace { lane: usize, row: usize },
    /// 右へ渡ってから右隣のレーンを下る
    CrossRight { lane: usize, row: usize },
    /// 左へ渡ってから左隣のレーンを下る
    CrossLeft { lane: usize, row: usize },
}

impl Move {
    /// 移動元の座標
    pub fn origin(self) -> Coord {
        match self {
            Move::DescendInPlace { lane, row }
            | Move::CrossRight { lane, row }
            | Move::CrossLeft { lane, row } => Coord::new(lane, row),
        }
    }

    /// 移動先の座標（常に1行下）
    pub fn destination(self) -> Coord {
        let below = self.origin().below();
        match self {
            Move::DescendInPlace { .. } => below,
            Move::CrossRight { .. } => Coord::new(below.lane + 1, below.row),
            Move::CrossLeft { .. } => Coord::new(below.lane - 1, below.row),
        }
    }

    pub fn is_cross(self) -> bool {
        !matches!(self, Move::DescendInPlace { .. })
    }

    /// 描画順の線分（横移動なら横線 → 縦線）
    pub fn segments(self) -> Vec<Segment> {
        match self {
            Move::DescendInPlace { lane, row } => vec![Segment::down(lane, row)],
            Move::CrossRight { lane, row } => {
                vec![Segment::across_right(lane, row), Segment::down(lane + 1, row)]
            }
            Move::CrossLeft { lane, row } => {
                vec![Segment::across_left(lane, row), Segment::down(lane - 1, row)]
            }
        }
    }
}

/// 経路の列挙要素
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WalkStep {
    Move(Move),
    /// 終点に到達（到達レーン）
    Terminal(usize),
}
