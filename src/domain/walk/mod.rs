// 経路探索 - 開始レーンから終点までの手順

pub mod step;
pub mod walker;

pub use step::{Move, WalkStep};
pub use walker::{draw_path_sync, outcomes, terminal_lane, walk, PathWalker, WalkCursor};
