use super::board::KalahBoard;
use super::move_outcome::MoveOutcome;
use super::settings::BoardSettings;
use super::snapshot::{GameSnapshot, PlayerView};
use super::types::{GameStatus, KalahPlayer, PlayerSide};
use crate::config::Validate;
use crate::defaults::{DRAW_RESULT, IN_PROGRESS_RESULT};
use crate::error::KalahError;
use crate::id_generator::generate_game_id;
use crate::{GameId, PlayerId, log};

/// One Kalah match: two seats, the board, and whose turn it is.
///
/// Player one sits first and moves first. Player one owns house indices up to and
/// including `pits_per_player`, player two everything above it; the ownership check
/// runs before the board is consulted.
#[derive(Debug, Clone)]
pub struct KalahGame {
    id: GameId,
    name: String,
    player1: Option<KalahPlayer>,
    player2: Option<KalahPlayer>,
    current_player: Option<PlayerSide>,
    board: KalahBoard,
    status: GameStatus,
}

impl KalahGame {
    pub fn new(name: String) -> Self {
        Self::with_board(name, KalahBoard::from_settings(&BoardSettings::default()))
    }

    /// Creates a game on a custom board. Settings outside the supported ranges
    /// are rejected with `InvalidSettings`.
    pub fn with_settings(name: String, settings: &BoardSettings) -> Result<Self, KalahError> {
        settings.validate().map_err(KalahError::InvalidSettings)?;
        Ok(Self::with_board(name, KalahBoard::from_settings(settings)))
    }

    fn with_board(name: String, board: KalahBoard) -> Self {
        Self {
            id: generate_game_id(),
            name,
            player1: None,
            player2: None,
            current_player: None,
            board,
            status: GameStatus::InProgress,
        }
    }

    pub fn id(&self) -> &GameId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn board(&self) -> &KalahBoard {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn player1(&self) -> Option<&KalahPlayer> {
        self.player1.as_ref()
    }

    pub fn player2(&self) -> Option<&KalahPlayer> {
        self.player2.as_ref()
    }

    pub fn player(&self, side: PlayerSide) -> Option<&KalahPlayer> {
        match side {
            PlayerSide::One => self.player1.as_ref(),
            PlayerSide::Two => self.player2.as_ref(),
        }
    }

    pub fn current_side(&self) -> Option<PlayerSide> {
        self.current_player
    }

    pub fn current_player(&self) -> Option<&KalahPlayer> {
        self.current_player.and_then(|side| self.player(side))
    }

    pub fn is_current_player(&self, player_id: &PlayerId) -> bool {
        self.current_player()
            .is_some_and(|player| &player.id == player_id)
    }

    pub fn has_started(&self) -> bool {
        self.player1.is_some() && self.player2.is_some()
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// Seats a new player in the first free seat and returns their freshly minted id.
    pub fn assign_player(&mut self, name: String) -> Result<PlayerId, KalahError> {
        let side = if self.player1.is_none() {
            PlayerSide::One
        } else if self.player2.is_none() {
            PlayerSide::Two
        } else {
            return Err(KalahError::GameFull(self.id.clone()));
        };

        let player = KalahPlayer::new(name);
        let player_id = player.id.clone();
        log!("Player {} ({}) joined game {} as {:?}", player.name, player_id, self.id, side);

        match side {
            PlayerSide::One => {
                self.player1 = Some(player);
                self.current_player = Some(PlayerSide::One);
            }
            PlayerSide::Two => self.player2 = Some(player),
        }
        Ok(player_id)
    }

    fn owns_pit(&self, side: PlayerSide, pit_index: i64) -> bool {
        let boundary = self.board.pits_per_player() as i64;
        match side {
            PlayerSide::One => pit_index <= boundary,
            PlayerSide::Two => pit_index > boundary,
        }
    }

    /// Plays `pit_index` for whoever holds the turn and hands the turn over unless
    /// the last stone ended in the mover's store.
    pub fn make_move(&mut self, pit_index: i64) -> Result<MoveOutcome, KalahError> {
        if self.is_finished() {
            return Err(KalahError::GameFinished(self.id.clone()));
        }

        let (side, player_id) = match (self.has_started(), self.current_player) {
            (true, Some(side)) => match self.player(side) {
                Some(player) => (side, player.id.clone()),
                None => return Err(KalahError::GameNotStarted(self.id.clone())),
            },
            _ => return Err(KalahError::GameNotStarted(self.id.clone())),
        };

        if !self.owns_pit(side, pit_index) {
            return Err(KalahError::UnauthorizedPitAccess {
                game_id: self.id.clone(),
                player_id,
                pit_index,
            });
        }

        let outcome = match usize::try_from(pit_index) {
            Ok(index) => self.board.make_move(index),
            Err(_) => MoveOutcome::Illegal,
        };

        match outcome {
            MoveOutcome::Illegal => {
                return Err(KalahError::IllegalMove {
                    game_id: self.id.clone(),
                    player_id,
                });
            }
            MoveOutcome::Continue | MoveOutcome::Capture => {
                self.current_player = Some(side.opponent());
            }
            MoveOutcome::PlayAgain => {}
        }

        log!("Game {}: {:?} played pit {} ({})", self.id, side, pit_index, outcome);
        Ok(outcome)
    }

    /// True once either side has no stones left in its houses.
    pub fn has_game_ended(&self) -> bool {
        self.board.player_one_stone_count() == 0 || self.board.player_two_stone_count() == 0
    }

    /// Sweeps the remaining stones into the stores and decides the result.
    /// A finished game keeps its first result.
    pub fn end_game(&mut self) -> String {
        if !self.is_finished() {
            self.board.end_game();
            let player_one = self.board.player_one_score();
            let player_two = self.board.player_two_score();
            self.status = if player_one > player_two {
                GameStatus::Won(PlayerSide::One)
            } else if player_two > player_one {
                GameStatus::Won(PlayerSide::Two)
            } else {
                GameStatus::Draw
            };
            log!(
                "Game {} finished {}:{}, {}",
                self.id,
                player_one,
                player_two,
                self.result()
            );
        }
        self.result()
    }

    pub fn winner(&self) -> Option<&KalahPlayer> {
        match self.status {
            GameStatus::Won(side) => self.player(side),
            _ => None,
        }
    }

    pub fn result(&self) -> String {
        match self.status {
            GameStatus::InProgress => IN_PROGRESS_RESULT.to_string(),
            GameStatus::Draw => DRAW_RESULT.to_string(),
            GameStatus::Won(side) => {
                let name = self.player(side).map(|p| p.name.as_str()).unwrap_or_default();
                format!("{} Wins", name)
            }
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            game_id: self.id.clone(),
            name: self.name.clone(),
            player1: self.player1.as_ref().map(PlayerView::from),
            player2: self.player2.as_ref().map(PlayerView::from),
            current_player: self.current_player().map(PlayerView::from),
            pits_per_player: self.board.pits_per_player(),
            pits: self.board.pits().iter().map(|pit| pit.stones()).collect(),
            player_one_stone_count: self.board.player_one_stone_count(),
            player_two_stone_count: self.board.player_two_stone_count(),
            player_one_score: self.board.player_one_score(),
            player_two_score: self.board.player_two_score(),
            result: self.result(),
        }
    }
}
