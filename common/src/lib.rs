pub mod config;
pub mod error;
pub mod games;
pub mod id_generator;
pub mod identifiers;
pub mod logger;
mod defaults;

pub use defaults::{DEFAULT_PITS_PER_PLAYER, DEFAULT_STONES_PER_PIT};
pub use error::KalahError;
pub use identifiers::*;
