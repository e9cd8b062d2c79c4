pub const DEFAULT_PITS_PER_PLAYER: usize = 6;
pub const DEFAULT_STONES_PER_PIT: u32 = 6;

pub const IN_PROGRESS_RESULT: &str = "In Progress";
pub const DRAW_RESULT: &str = "Draw";
