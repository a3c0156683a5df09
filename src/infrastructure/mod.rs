// インフラ層 - 描画先など技術的実装

pub mod render;

pub use render::{CanvasBuffer, RecordingTarget};
