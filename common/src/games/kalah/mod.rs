mod board;
mod game;
mod move_outcome;
mod pit;
mod settings;
mod snapshot;
mod types;

pub use board::KalahBoard;
pub use game::KalahGame;
pub use move_outcome::{IllegalMoveReason, MoveOutcome};
pub use pit::{Pit, PitKind};
pub use settings::BoardSettings;
pub use snapshot::{GameSnapshot, PlayerView};
pub use types::{GameStatus, KalahPlayer, PlayerSide};
