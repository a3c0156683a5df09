// ノード（座標ごとの接続情報）

use serde::{Deserialize, Serialize};

/// 横線の向き
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RungDirection {
    #[default]
    None,
    /// 右隣へ伸びる横線の左端
    ToRight,
    /// 左隣から来た横線の右端
    ToLeft,
}

/// 1座標分の接続レコード
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Node {
    pub has_rung: bool,
    pub direction: RungDirection,
}

impl Node {
    pub const EMPTY: Node = Node {
        has_rung: false,
        direction: RungDirection::None,
    };

    pub const fn rung_start() -> Self {
        Self {
            has_rung: true,
            direction: RungDirection::ToRight,
        }
    }

    pub const fn rung_end() -> Self {
        Self {
            has_rung: true,
            direction: RungDirection::ToLeft,
        }
    }

    pub fn is_rung_start(self) -> bool {
        self.direction == RungDirection::ToRight
    }

    /// has_rung と direction が矛盾していないか
    pub fn is_consistent(self) -> bool {
        self.has_rung == (self.direction != RungDirection::None)
    }
}
