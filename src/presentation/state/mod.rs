// UI状態

pub mod game;

pub use game::{parse_participant_count, GameScreenState, Screen};
