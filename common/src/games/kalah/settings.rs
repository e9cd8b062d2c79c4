use serde::{Deserialize, Serialize};

use crate::config::{Validate, check_range};
use crate::defaults::{DEFAULT_PITS_PER_PLAYER, DEFAULT_STONES_PER_PIT};

pub const MAX_PITS_PER_PLAYER: usize = 32;
pub const MAX_STONES_PER_PIT: u32 = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSettings {
    pub pits_per_player: usize,
    pub stones_per_pit: u32,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            pits_per_player: DEFAULT_PITS_PER_PLAYER,
            stones_per_pit: DEFAULT_STONES_PER_PIT,
        }
    }
}

impl Validate for BoardSettings {
    fn validate(&self) -> Result<(), String> {
        check_range("Pits per player", self.pits_per_player, 1, MAX_PITS_PER_PLAYER)?;
        check_range(
            "Stones per pit",
            self.stones_per_pit as usize,
            1,
            MAX_STONES_PER_PIT as usize,
        )?;
        Ok(())
    }
}
