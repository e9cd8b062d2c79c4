use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use kalah_common::games::kalah::{BoardSettings, GameSnapshot, KalahGame};
use kalah_common::{GameId, KalahError, PlayerId, log};

#[derive(Debug)]
struct GameSlot {
    game: KalahGame,
    last_activity: Instant,
}

impl GameSlot {
    fn new(game: KalahGame) -> Self {
        Self {
            game,
            last_activity: Instant::now(),
        }
    }

    fn touch(&mut self) {
        self.last_activity = Instant::now();
    }
}

/// In-memory home of every running game.
///
/// The map lock is only held to look a game up, add it or drop it. Each game sits
/// behind its own lock, so moves on one game are applied one at a time while other
/// games proceed independently.
#[derive(Debug, Clone)]
pub struct GameRegistry {
    games: Arc<Mutex<HashMap<GameId, Arc<Mutex<GameSlot>>>>>,
    default_settings: BoardSettings,
}

impl GameRegistry {
    pub fn new(default_settings: BoardSettings) -> Self {
        Self {
            games: Arc::new(Mutex::new(HashMap::new())),
            default_settings,
        }
    }

    async fn slot(&self, game_id: &GameId) -> Result<Arc<Mutex<GameSlot>>, KalahError> {
        let games = self.games.lock().await;
        games
            .get(game_id)
            .cloned()
            .ok_or_else(|| KalahError::GameNotFound(game_id.clone()))
    }

    pub async fn create_game(
        &self,
        name: String,
        settings: Option<BoardSettings>,
    ) -> Result<GameId, KalahError> {
        let settings = settings.unwrap_or(self.default_settings);
        let game = KalahGame::with_settings(name, &settings)?;
        let game_id = game.id().clone();
        log!(
            "Game created: {} '{}' ({} pits x {} stones)",
            game_id,
            game.name(),
            settings.pits_per_player,
            settings.stones_per_pit
        );

        let mut games = self.games.lock().await;
        games.insert(game_id.clone(), Arc::new(Mutex::new(GameSlot::new(game))));
        Ok(game_id)
    }

    pub async fn assign_player(
        &self,
        game_id: &GameId,
        player_name: String,
    ) -> Result<PlayerId, KalahError> {
        let slot = self.slot(game_id).await?;
        let mut slot = slot.lock().await;
        let player_id = slot.game.assign_player(player_name)?;
        slot.touch();
        Ok(player_id)
    }

    /// Applies a move for `player_id`. When the move empties either side the game is
    /// closed out, its final state returned, and it is dropped from the registry.
    pub async fn make_move(
        &self,
        game_id: &GameId,
        player_id: &PlayerId,
        pit_index: i64,
    ) -> Result<GameSnapshot, KalahError> {
        let slot = self.slot(game_id).await?;
        let mut slot = slot.lock().await;

        if !slot.game.has_started() {
            return Err(KalahError::GameNotStarted(game_id.clone()));
        }
        if !slot.game.is_finished() && !slot.game.is_current_player(player_id) {
            return Err(KalahError::WrongTurn {
                game_id: game_id.clone(),
                player_id: player_id.clone(),
            });
        }

        slot.game.make_move(pit_index)?;
        slot.touch();

        if slot.game.has_game_ended() {
            slot.game.end_game();
            let snapshot = slot.game.snapshot();
            drop(slot);
            self.remove_game(game_id).await;
            return Ok(snapshot);
        }

        Ok(slot.game.snapshot())
    }

    pub async fn get_game(&self, game_id: &GameId) -> Result<GameSnapshot, KalahError> {
        let slot = self.slot(game_id).await?;
        let slot = slot.lock().await;
        Ok(slot.game.snapshot())
    }

    pub async fn remove_game(&self, game_id: &GameId) -> bool {
        let mut games = self.games.lock().await;
        let removed = games.remove(game_id).is_some();
        if removed {
            log!("Game retired: {}", game_id);
        }
        removed
    }

    pub async fn game_count(&self) -> usize {
        self.games.lock().await.len()
    }

    pub async fn inactive_games(&self, timeout: Duration) -> Vec<GameId> {
        let slots: Vec<(GameId, Arc<Mutex<GameSlot>>)> = {
            let games = self.games.lock().await;
            games
                .iter()
                .map(|(id, slot)| (id.clone(), slot.clone()))
                .collect()
        };

        let mut inactive = Vec::new();
        for (game_id, slot) in slots {
            if slot.lock().await.last_activity.elapsed() >= timeout {
                inactive.push(game_id);
            }
        }
        inactive
    }
}
