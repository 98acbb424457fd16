//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call to `tick` is one step, no wall-clock time involved
//! - Stable iteration order (blocks keep their index for the whole game)
//! - No rendering or platform dependencies

pub mod collision;
pub mod layout;
pub mod state;
pub mod tick;

pub use collision::{Wall, ball_hits_paddle, ball_missed, blocks_in_range, bounce_off_walls};
pub use layout::{block_grid, column_color};
pub use state::{Ball, Block, BlockColor, GameEvent, GamePhase, GameState, Paddle};
pub use tick::{PaddleCommand, tick};
