// 梯子モデル - 座標・ノード・生成

pub mod coord;
pub mod generator;
pub mod grid;
pub mod node;

pub use coord::Coord;
pub use generator::{candidate_rows, density_bounds, LadderGenerator};
pub use grid::Ladder;
pub use node::{Node, RungDirection};
