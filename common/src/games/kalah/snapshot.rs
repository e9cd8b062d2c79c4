use serde::{Deserialize, Serialize};

use super::types::KalahPlayer;
use crate::{GameId, PlayerId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
}

impl From<&KalahPlayer> for PlayerView {
    fn from(player: &KalahPlayer) -> Self {
        Self {
            id: player.id.clone(),
            name: player.name.clone(),
        }
    }
}

/// Settled state of a game as handed out to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub game_id: GameId,
    pub name: String,
    pub player1: Option<PlayerView>,
    pub player2: Option<PlayerView>,
    pub current_player: Option<PlayerView>,
    pub pits_per_player: usize,
    pub pits: Vec<u32>,
    pub player_one_stone_count: u32,
    pub player_two_stone_count: u32,
    pub player_one_score: u32,
    pub player_two_score: u32,
    pub result: String,
}
