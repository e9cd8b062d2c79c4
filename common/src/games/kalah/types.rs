use serde::{Deserialize, Serialize};

use crate::PlayerId;
use crate::id_generator::generate_player_id;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSide {
    One,
    Two,
}

impl PlayerSide {
    pub fn opponent(&self) -> PlayerSide {
        match self {
            PlayerSide::One => PlayerSide::Two,
            PlayerSide::Two => PlayerSide::One,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(PlayerSide),
    Draw,
}

impl GameStatus {
    pub fn is_finished(&self) -> bool {
        *self != GameStatus::InProgress
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KalahPlayer {
    pub id: PlayerId,
    pub name: String,
}

impl KalahPlayer {
    pub fn new(name: String) -> Self {
        Self {
            id: generate_player_id(),
            name,
        }
    }
}
