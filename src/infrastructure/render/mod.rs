// 描画先の実装

pub mod canvas;
pub mod recording;

pub use canvas::{CanvasBuffer, StrokeLine};
pub use recording::RecordingTarget;
