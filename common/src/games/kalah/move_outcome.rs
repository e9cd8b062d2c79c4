use std::fmt;

/// Result of sowing one house, consumed by the turn logic in `KalahGame`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Continue,
    PlayAgain,
    Capture,
    Illegal,
}

impl MoveOutcome {
    pub fn is_legal(&self) -> bool {
        *self != MoveOutcome::Illegal
    }

    pub fn keeps_turn(&self) -> bool {
        *self == MoveOutcome::PlayAgain
    }
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveOutcome::Continue => write!(f, "continue"),
            MoveOutcome::PlayAgain => write!(f, "play again"),
            MoveOutcome::Capture => write!(f, "capture"),
            MoveOutcome::Illegal => write!(f, "illegal"),
        }
    }
}

/// Why the board refused a move. Only logged; callers see `MoveOutcome::Illegal`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalMoveReason {
    OutOfRange,
    Store,
    EmptyHouse,
}

impl fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMoveReason::OutOfRange => write!(f, "pit is out of range"),
            IllegalMoveReason::Store => write!(f, "pit is a store"),
            IllegalMoveReason::EmptyHouse => write!(f, "pit is empty"),
        }
    }
}
