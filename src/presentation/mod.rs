// プレゼンテーション層

pub mod state;

pub use state::{GameScreenState, Screen};
