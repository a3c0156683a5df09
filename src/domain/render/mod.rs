// 描画境界 - 線分指示・色・描画先

pub mod color;
pub mod segment;
pub mod static_grid;
pub mod target;

pub use color::HexColor;
pub use segment::{canvas_size, Axis, Orientation, Segment, SegmentStyle};
pub use static_grid::{draw_static_grid, static_grid_segments};
pub use target::RenderTarget;
