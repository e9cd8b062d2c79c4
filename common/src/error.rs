use std::fmt;

use crate::{GameId, PlayerId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KalahError {
    GameNotFound(GameId),
    GameFull(GameId),
    GameNotStarted(GameId),
    GameFinished(GameId),
    WrongTurn { game_id: GameId, player_id: PlayerId },
    UnauthorizedPitAccess { game_id: GameId, player_id: PlayerId, pit_index: i64 },
    IllegalMove { game_id: GameId, player_id: PlayerId },
    InvalidSettings(String),
}

impl fmt::Display for KalahError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KalahError::GameNotFound(game_id) => write!(f, "Could not find game with id {}", game_id),
            KalahError::GameFull(game_id) => write!(f, "Game is already full : {}", game_id),
            KalahError::GameNotStarted(game_id) => write!(f, "Game has not yet started : {}", game_id),
            KalahError::GameFinished(game_id) => write!(f, "Game has already finished : {}", game_id),
            KalahError::WrongTurn { game_id, player_id } => {
                write!(f, "Game {}, Not {}'s turn", game_id, player_id)
            }
            KalahError::UnauthorizedPitAccess { game_id, player_id, pit_index } => {
                write!(f, "Player {} doesn't own pit {} in game {}", player_id, pit_index, game_id)
            }
            KalahError::IllegalMove { game_id, player_id } => {
                write!(f, "Illegal Move by player {} in game {}", player_id, game_id)
            }
            KalahError::InvalidSettings(message) => write!(f, "Invalid game settings: {}", message),
        }
    }
}

impl std::error::Error for KalahError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_game_and_player() {
        let err = KalahError::UnauthorizedPitAccess {
            game_id: GameId::from("g1"),
            player_id: PlayerId::from("p2"),
            pit_index: 3,
        };
        assert_eq!(err.to_string(), "Player p2 doesn't own pit 3 in game g1");

        let err = KalahError::WrongTurn {
            game_id: GameId::from("g1"),
            player_id: PlayerId::from("p2"),
        };
        assert_eq!(err.to_string(), "Game g1, Not p2's turn");
    }
}
