// アプリケーション（egui）

pub mod game_operations;
pub mod state;
pub mod ui;

pub use game_operations::GameOperations;
pub use state::App;
