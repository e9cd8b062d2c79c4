use std::ops::Range;

use super::move_outcome::{IllegalMoveReason, MoveOutcome};
use super::pit::Pit;
use super::settings::BoardSettings;
use super::types::PlayerSide;
use crate::log;

/// The ring of pits for both players.
///
/// Layout for `n` pits per player: houses of player one at `0..n`, their store
/// at `n`, houses of player two at `n + 1..=2n` and their store at `2n + 1`.
/// Sowing walks the ring in increasing index order and wraps to zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KalahBoard {
    pits_per_player: usize,
    stones_per_pit: u32,
    pits: Vec<Pit>,
}

impl KalahBoard {
    /// Builds a fresh board with every house holding `stones_per_pit`.
    ///
    /// # Panics
    ///
    /// Panics if `pits_per_player` is zero. `KalahGame::with_settings` validates
    /// settings before reaching this.
    pub fn new(pits_per_player: usize, stones_per_pit: u32) -> Self {
        assert!(pits_per_player > 0, "Kalah board needs at least one house per player");

        let mut pits = Vec::with_capacity(2 * (pits_per_player + 1));
        for _ in 0..2 {
            pits.extend((0..pits_per_player).map(|_| Pit::house(stones_per_pit)));
            pits.push(Pit::store());
        }

        Self {
            pits_per_player,
            stones_per_pit,
            pits,
        }
    }

    pub fn from_settings(settings: &BoardSettings) -> Self {
        Self::new(settings.pits_per_player, settings.stones_per_pit)
    }

    #[cfg(test)]
    pub(crate) fn from_stones(pits_per_player: usize, stones: &[u32]) -> Self {
        let mut board = Self::new(pits_per_player, 0);
        assert_eq!(stones.len(), board.pits.len());
        for (pit, &count) in board.pits.iter_mut().zip(stones) {
            pit.pick_stones();
            pit.add_stones(count);
        }
        board
    }

    pub fn pits_per_player(&self) -> usize {
        self.pits_per_player
    }

    pub fn stones_per_pit(&self) -> u32 {
        self.stones_per_pit
    }

    pub fn pits(&self) -> &[Pit] {
        &self.pits
    }

    pub fn store_index(&self, side: PlayerSide) -> usize {
        match side {
            PlayerSide::One => self.pits_per_player,
            PlayerSide::Two => 2 * self.pits_per_player + 1,
        }
    }

    pub fn house_range(&self, side: PlayerSide) -> Range<usize> {
        match side {
            PlayerSide::One => 0..self.pits_per_player,
            PlayerSide::Two => self.pits_per_player + 1..2 * self.pits_per_player + 1,
        }
    }

    /// Side owning a house index. Only meaningful for house indices.
    pub fn side_of_house(&self, index: usize) -> PlayerSide {
        if index < self.pits_per_player {
            PlayerSide::One
        } else {
            PlayerSide::Two
        }
    }

    /// The house facing `index` across the board.
    pub fn mirror_index(&self, index: usize) -> usize {
        2 * self.pits_per_player - index
    }

    fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.pits.len()
    }

    fn validate(&self, pit_index: usize) -> Result<(), IllegalMoveReason> {
        let pit = self.pits.get(pit_index).ok_or(IllegalMoveReason::OutOfRange)?;
        if pit.is_store() {
            return Err(IllegalMoveReason::Store);
        }
        if pit.is_empty() {
            return Err(IllegalMoveReason::EmptyHouse);
        }
        Ok(())
    }

    /// Picks up every stone in the house at `pit_index` and sows them one per pit.
    ///
    /// The opponent's store is passed over without receiving a stone, so the walk is
    /// driven by the stones left in hand rather than by a step count. The last stone
    /// decides the outcome: in the mover's own store it is `PlayAgain`, in an empty
    /// house on the mover's side it is `Capture`. An illegal index leaves the board
    /// untouched.
    pub fn make_move(&mut self, pit_index: usize) -> MoveOutcome {
        if let Err(reason) = self.validate(pit_index) {
            log!("Illegal move at pit {}: {}", pit_index, reason);
            return MoveOutcome::Illegal;
        }

        let mut stones = self.pits[pit_index].pick_stones();
        let mut outcome = MoveOutcome::Continue;
        let mut on_opponent_side = false;
        let mut index = pit_index;

        while stones > 0 {
            index = self.next_index(index);
            let pit = &mut self.pits[index];

            if pit.is_store() {
                if !on_opponent_side {
                    pit.sow_stone();
                    stones -= 1;
                    if stones == 0 {
                        outcome = MoveOutcome::PlayAgain;
                    }
                }
                on_opponent_side = !on_opponent_side;
            } else {
                if !on_opponent_side && stones == 1 && pit.is_empty() {
                    outcome = MoveOutcome::Capture;
                }
                pit.sow_stone();
                stones -= 1;
            }
        }

        if outcome == MoveOutcome::Capture {
            self.capture(index);
        }
        outcome
    }

    fn capture(&mut self, landing_index: usize) {
        let mirror = self.mirror_index(landing_index);
        let captured = self.pits[landing_index].pick_stones() + self.pits[mirror].pick_stones();
        let store = self.store_index(self.side_of_house(landing_index));
        self.pits[store].add_stones(captured);
    }

    pub fn house_stone_count(&self, side: PlayerSide) -> u32 {
        self.pits[self.house_range(side)]
            .iter()
            .map(Pit::stones)
            .sum()
    }

    pub fn score(&self, side: PlayerSide) -> u32 {
        self.pits[self.store_index(side)].stones()
    }

    pub fn player_one_stone_count(&self) -> u32 {
        self.house_stone_count(PlayerSide::One)
    }

    pub fn player_two_stone_count(&self) -> u32 {
        self.house_stone_count(PlayerSide::Two)
    }

    pub fn player_one_score(&self) -> u32 {
        self.score(PlayerSide::One)
    }

    pub fn player_two_score(&self) -> u32 {
        self.score(PlayerSide::Two)
    }

    pub fn total_stones(&self) -> u32 {
        self.pits.iter().map(Pit::stones).sum()
    }

    /// Sweeps every house into its owner's store. Houses are empty afterwards,
    /// so a repeated sweep changes nothing.
    pub fn end_game(&mut self) {
        for side in [PlayerSide::One, PlayerSide::Two] {
            let swept: u32 = self
                .house_range(side)
                .map(|index| self.pits[index].pick_stones())
                .sum();
            let store = self.store_index(side);
            self.pits[store].add_stones(swept);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn standard_board() -> KalahBoard {
        KalahBoard::new(6, 6)
    }

    fn stone_counts(board: &KalahBoard) -> Vec<u32> {
        board.pits().iter().map(Pit::stones).collect()
    }

    #[test]
    fn test_new_board_layout() {
        let board = standard_board();
        assert_eq!(board.pits().len(), 14);
        assert_eq!(board.pits_per_player(), 6);
        assert_eq!(board.stones_per_pit(), 6);
        assert!(board.pits()[6].is_store());
        assert!(board.pits()[13].is_store());
        assert_eq!(board.player_one_score(), 0);
        assert_eq!(board.player_two_score(), 0);
        assert_eq!(board.player_one_stone_count(), 36);
        assert_eq!(board.player_two_stone_count(), 36);
    }

    #[test]
    fn test_index_helpers() {
        let board = standard_board();
        assert_eq!(board.house_range(PlayerSide::One), 0..6);
        assert_eq!(board.house_range(PlayerSide::Two), 7..13);
        assert_eq!(board.store_index(PlayerSide::One), 6);
        assert_eq!(board.store_index(PlayerSide::Two), 13);
        assert_eq!(board.mirror_index(0), 12);
        assert_eq!(board.mirror_index(5), 7);
        assert_eq!(board.side_of_house(5), PlayerSide::One);
        assert_eq!(board.side_of_house(7), PlayerSide::Two);
    }

    #[test]
    fn test_last_stone_in_own_store_plays_again() {
        let mut board = standard_board();
        assert_eq!(board.make_move(0), MoveOutcome::PlayAgain);
        assert_eq!(board.player_one_stone_count(), 35);
        assert_eq!(board.player_two_stone_count(), 36);
        assert_eq!(board.player_one_score(), 1);
        assert_eq!(board.player_two_score(), 0);
    }

    #[test]
    fn test_last_stone_in_opponent_house_continues() {
        let mut board = standard_board();
        assert_eq!(board.make_move(1), MoveOutcome::Continue);
        assert_eq!(board.player_one_stone_count(), 34);
        assert_eq!(board.player_two_stone_count(), 37);
        assert_eq!(board.player_one_score(), 1);
        assert_eq!(board.player_two_score(), 0);
    }

    #[test]
    fn test_store_is_illegal_and_leaves_board_untouched() {
        let mut board = standard_board();
        let before = stone_counts(&board);
        assert_eq!(board.make_move(6), MoveOutcome::Illegal);
        assert_eq!(board.make_move(13), MoveOutcome::Illegal);
        assert_eq!(stone_counts(&board), before);
    }

    #[test]
    fn test_out_of_range_is_illegal() {
        let mut board = standard_board();
        let before = stone_counts(&board);
        assert_eq!(board.make_move(14), MoveOutcome::Illegal);
        assert_eq!(board.make_move(usize::MAX), MoveOutcome::Illegal);
        assert_eq!(stone_counts(&board), before);
    }

    #[test]
    fn test_empty_house_is_illegal() {
        let mut board = standard_board();
        board.make_move(0);
        let before = stone_counts(&board);
        assert_eq!(board.make_move(0), MoveOutcome::Illegal);
        assert_eq!(stone_counts(&board), before);
    }

    #[test]
    fn test_capture_when_last_stone_lands_in_empty_own_house() {
        let mut board = standard_board();
        board.make_move(0);
        board.make_move(1);
        board.make_move(7);
        let outcome = board.make_move(0);
        assert_eq!(outcome, MoveOutcome::Capture);
        assert_eq!(board.player_one_score(), 10);
        assert_eq!(board.player_two_score(), 1);
        assert_eq!(board.player_one_stone_count(), 32);
        assert_eq!(board.player_two_stone_count(), 29);
        assert_eq!(board.pits()[1].stones(), 0);
        assert_eq!(board.pits()[11].stones(), 0);
    }

    #[test]
    fn test_player_two_capture_goes_to_player_two_store() {
        let mut board = KalahBoard::from_stones(6, &[4, 4, 4, 4, 4, 4, 0, 4, 1, 0, 4, 4, 4, 0]);
        assert_eq!(board.make_move(8), MoveOutcome::Capture);
        assert_eq!(board.pits()[9].stones(), 0);
        assert_eq!(board.pits()[3].stones(), 0);
        assert_eq!(board.player_two_score(), 5);
        assert_eq!(board.player_one_score(), 0);
    }

    #[test]
    fn test_opponent_store_is_skipped() {
        let mut board = KalahBoard::from_stones(6, &[6, 6, 6, 6, 6, 9, 0, 6, 6, 6, 6, 6, 6, 0]);
        assert_eq!(board.make_move(5), MoveOutcome::Continue);
        assert_eq!(stone_counts(&board), vec![7, 7, 6, 6, 6, 0, 1, 7, 7, 7, 7, 7, 7, 0]);
    }

    #[test]
    fn test_full_lap_lands_back_in_emptied_source_house() {
        let mut board = KalahBoard::from_stones(6, &[13, 6, 6, 6, 6, 6, 0, 6, 6, 6, 6, 6, 6, 0]);
        assert_eq!(board.make_move(0), MoveOutcome::Capture);
        assert_eq!(board.player_one_score(), 9);
        assert_eq!(board.player_two_score(), 0);
        assert_eq!(board.player_one_stone_count(), 35);
        assert_eq!(board.player_two_stone_count(), 35);
        assert_eq!(board.total_stones(), 79);
    }

    #[test]
    fn test_played_out_game_reaches_empty_side() {
        let mut board = standard_board();
        let moves = [0, 1, 7, 0, 8, 2, 8, 1, 12, 3, 8, 2, 7, 1, 12, 9, 0, 8, 2, 11, 1];
        for pit in moves {
            assert!(board.make_move(pit).is_legal());
        }
        let outcome = board.make_move(12);
        assert_eq!(outcome, MoveOutcome::PlayAgain);
        assert_eq!(board.player_one_score(), 41);
        assert_eq!(board.player_two_score(), 8);
        assert_eq!(board.player_one_stone_count(), 23);
        assert_eq!(board.player_two_stone_count(), 0);
    }

    #[test]
    fn test_end_game_sweeps_houses_into_stores() {
        let mut board = KalahBoard::from_stones(6, &[1, 0, 2, 0, 0, 3, 10, 0, 0, 0, 0, 0, 0, 20]);
        board.end_game();
        assert_eq!(board.player_one_score(), 16);
        assert_eq!(board.player_two_score(), 20);
        assert_eq!(board.player_one_stone_count(), 0);
        assert_eq!(board.player_two_stone_count(), 0);

        board.end_game();
        assert_eq!(board.player_one_score(), 16);
        assert_eq!(board.player_two_score(), 20);
    }

    #[test]
    fn test_random_games_conserve_stones_and_close_cleanly() {
        let mut rng = StdRng::seed_from_u64(7);
        for pits_per_player in 1..=8 {
            for stones_per_pit in 1..=7 {
                let mut board = KalahBoard::new(pits_per_player, stones_per_pit);
                let total = 2 * pits_per_player as u32 * stones_per_pit;
                let mut side = PlayerSide::One;
                let mut plies = 0;

                while board.player_one_stone_count() > 0
                    && board.player_two_stone_count() > 0
                    && plies < 10_000
                {
                    plies += 1;
                    let legal: Vec<usize> = board
                        .house_range(side)
                        .filter(|&index| !board.pits()[index].is_empty())
                        .collect();
                    let pit = legal[rng.random_range(0..legal.len())];
                    let outcome = board.make_move(pit);
                    assert!(outcome.is_legal());
                    assert_eq!(board.total_stones(), total);
                    if !outcome.keeps_turn() {
                        side = side.opponent();
                    }
                }

                board.end_game();
                assert_eq!(board.player_one_score() + board.player_two_score(), total);
            }
        }
    }
}
