// Ladder型 - レーン×行の梯子を表現

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::node::{Node, RungDirection};
use crate::constants::{MIN_LANES, MIN_ROWS, RUNG_MARGIN};
use crate::error::{LadderError, LadderResult};

/// 生成済みの梯子（ノードは行優先のフラット配列）
///
/// 読み込み時も `validate` を通すので、不変条件を満たさない梯子は作れない。
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LadderSnapshot")]
pub struct Ladder {
    lane_count: usize,
    row_count: usize,
    nodes: Vec<Node>,
}

/// 検証前の読み込み形式
#[derive(Deserialize)]
struct LadderSnapshot {
    lane_count: usize,
    row_count: usize,
    nodes: Vec<Node>,
}

impl TryFrom<LadderSnapshot> for Ladder {
    type Error = LadderError;

    fn try_from(snapshot: LadderSnapshot) -> Result<Self, Self::Error> {
        check_dimensions(snapshot.lane_count, snapshot.row_count)?;
        let ladder = Self {
            lane_count: snapshot.lane_count,
            row_count: snapshot.row_count,
            nodes: snapshot.nodes,
        };
        ladder.validate()?;
        Ok(ladder)
    }
}

impl Ladder {
    /// 横線のない梯子を作成
    pub fn empty(lane_count: usize, row_count: usize) -> LadderResult<Self> {
        check_dimensions(lane_count, row_count)?;
        Ok(Self {
            lane_count,
            row_count,
            nodes: vec![Node::EMPTY; lane_count * row_count],
        })
    }

    /// 横線の左端座標の一覧から構築（検証付き）
    pub fn from_rungs(
        lane_count: usize,
        row_count: usize,
        rungs: &[(usize, usize)],
    ) -> LadderResult<Self> {
        let mut ladder = Self::empty(lane_count, row_count)?;
        for &(lane, row) in rungs {
            if lane + 1 >= lane_count || row >= row_count {
                return Err(LadderError::invalid(format!(
                    "横線の座標が範囲外: ({}, {})",
                    lane, row
                )));
            }
            ladder.place_rung(lane, row);
        }
        ladder.validate()?;
        Ok(ladder)
    }

    pub fn lane_count(&self) -> usize {
        self.lane_count
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// 終点の行
    pub fn terminal_row(&self) -> usize {
        self.row_count - 1
    }

    /// ノードを取得（範囲外はNone）
    pub fn get(&self, lane: usize, row: usize) -> Option<Node> {
        if lane >= self.lane_count || row >= self.row_count {
            return None;
        }
        Some(self.nodes[self.index(lane, row)])
    }

    pub fn node(&self, coord: Coord) -> Option<Node> {
        self.get(coord.lane, coord.row)
    }

    /// 座標付きで全ノードを走査（行優先）
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Node)> + '_ {
        let lanes = self.lane_count;
        self.nodes
            .iter()
            .enumerate()
            .map(move |(i, node)| (Coord::new(i % lanes, i / lanes), *node))
    }

    /// レーンペア (lane, lane+1) の横線がある行
    pub fn rung_rows(&self, lane: usize) -> Vec<usize> {
        (0..self.row_count)
            .filter(|&row| {
                self.get(lane, row)
                    .is_some_and(|n| n.direction == RungDirection::ToRight)
            })
            .collect()
    }

    /// 横線の総数
    pub fn rung_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_rung_start()).count()
    }

    /// 不変条件の検証
    pub fn validate(&self) -> LadderResult<()> {
        if self.nodes.len() != self.lane_count * self.row_count {
            return Err(LadderError::invalid(format!(
                "ノード数が不正: 期待{}、実際{}",
                self.lane_count * self.row_count,
                self.nodes.len()
            )));
        }
        let last = self.row_count - 1;
        for (coord, node) in self.iter() {
            if !node.is_consistent() {
                return Err(LadderError::invalid(format!(
                    "ノードの状態が矛盾: {}",
                    coord
                )));
            }
            if !node.has_rung {
                continue;
            }
            // 上下の余白行には横線を置かない
            if coord.row < RUNG_MARGIN || coord.row + RUNG_MARGIN > last {
                return Err(LadderError::invalid(format!(
                    "余白行に横線があります: {}",
                    coord
                )));
            }
            match node.direction {
                RungDirection::ToRight => {
                    let partner = self.get(coord.lane + 1, coord.row);
                    if partner.map(|n| n.direction) != Some(RungDirection::ToLeft) {
                        return Err(LadderError::invalid(format!(
                            "横線の右端がありません: {}",
                            coord
                        )));
                    }
                    // 直前ペアと同じ行で連続しない（ジグザグ）
                    if coord.lane > 0
                        && self
                            .get(coord.lane - 1, coord.row)
                            .is_some_and(|n| n.direction == RungDirection::ToRight)
                    {
                        return Err(LadderError::invalid(format!(
                            "同じ行で横線が連続しています: {}",
                            coord
                        )));
                    }
                }
                RungDirection::ToLeft => {
                    let partner = coord
                        .lane
                        .checked_sub(1)
                        .and_then(|lane| self.get(lane, coord.row));
                    if partner.map(|n| n.direction) != Some(RungDirection::ToRight) {
                        return Err(LadderError::invalid(format!(
                            "横線の左端がありません: {}",
                            coord
                        )));
                    }
                }
                RungDirection::None => {}
            }
        }
        Ok(())
    }

    /// ノードの上書き（生成器とfrom_rungs専用）
    pub(crate) fn place_rung(&mut self, lane: usize, row: usize) {
        let left = self.index(lane, row);
        let right = self.index(lane + 1, row);
        self.nodes[left] = Node::rung_start();
        self.nodes[right] = Node::rung_end();
    }

    #[inline]
    fn index(&self, lane: usize, row: usize) -> usize {
        row * self.lane_count + lane
    }
}

fn check_dimensions(lane_count: usize, row_count: usize) -> LadderResult<()> {
    if lane_count < MIN_LANES {
        return Err(LadderError::invalid(format!(
            "レーン数は{}以上である必要があります: {}",
            MIN_LANES, lane_count
        )));
    }
    if row_count < MIN_ROWS {
        return Err(LadderError::invalid(format!(
            "行数は{}以上である必要があります: {}",
            MIN_ROWS, row_count
        )));
    }
    Ok(())
}
