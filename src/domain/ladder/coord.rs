// 梯子上の座標

use serde::{Deserialize, Serialize};

/// (レーン, 行) の座標。行0が開始、行 row_count-1 が終点
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub lane: usize,
    pub row: usize,
}

impl Coord {
    pub const fn new(lane: usize, row: usize) -> Self {
        Self { lane, row }
    }

    /// 一段下
    pub const fn below(self) -> Self {
        Self::new(self.lane, self.row + 1)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.lane, self.row)
    }
}
