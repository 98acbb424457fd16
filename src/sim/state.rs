//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in `GameState`. Nothing here is
//! global; the host owns one state and hands it to `tick`.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::collision::Wall;
use super::layout::block_grid;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball in play
    Playing,
    /// Ball crossed the bottom boundary; terminal
    GameOver,
}

/// Something that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    WallBounce { wall: Wall },
    PaddleHit,
    BlockDestroyed { index: usize },
    /// Last alive block went down (the game keeps running)
    FieldCleared,
    BallLost,
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: DVec2,
    /// Direction vector, scaled by the speed scalar each tick
    pub dir: DVec2,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: DVec2::ZERO,
            dir: DVec2::new(BALL_START_DX, BALL_START_DY),
        }
    }
}

impl Ball {
    /// Euler step, no time-delta normalization
    pub fn advance(&mut self, speed: f64) {
        self.pos += self.dir * speed;
    }

    pub fn flip_x(&mut self) {
        self.dir.x = -self.dir.x;
    }

    pub fn flip_y(&mut self) {
        self.dir.y = -self.dir.y;
    }
}

/// The player's paddle (moves along x only)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f64,
}

impl Paddle {
    pub fn pos(&self) -> DVec2 {
        DVec2::new(self.x, PADDLE_Y)
    }

    /// Move by `delta` and clamp to the paddle track
    pub fn shift(&mut self, delta: f64) {
        self.x = (self.x + delta).clamp(-PADDLE_LIMIT, PADDLE_LIMIT);
    }
}

/// Block color categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockColor {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
}

impl BlockColor {
    pub const PALETTE: [BlockColor; 5] = [
        BlockColor::Red,
        BlockColor::Orange,
        BlockColor::Yellow,
        BlockColor::Green,
        BlockColor::Blue,
    ];
}

/// A block in the arena. Index into `GameState::blocks` is stable for the
/// whole game; destroyed blocks are flagged, never removed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub pos: DVec2,
    pub color: BlockColor,
    pub alive: bool,
}

impl Block {
    pub fn new(pos: DVec2, color: BlockColor) -> Self {
        Self {
            pos,
            color,
            alive: true,
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub ball: Ball,
    pub paddle: Paddle,
    pub blocks: Vec<Block>,
    pub score: u64,
    /// Speed scalar, grows by `SPEED_RAMP` every tick
    pub speed: f64,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh game: ball at center, paddle centered, full block grid
    pub fn new() -> Self {
        Self::with_blocks(block_grid())
    }

    /// Fresh game with a custom block arena
    pub fn with_blocks(blocks: Vec<Block>) -> Self {
        Self {
            ball: Ball::default(),
            paddle: Paddle::default(),
            blocks,
            score: 0,
            speed: BALL_START_SPEED,
            phase: GamePhase::Playing,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn blocks_alive(&self) -> usize {
        self.blocks.iter().filter(|b| b.alive).count()
    }

    pub fn move_left(&mut self) {
        if !self.is_over() {
            self.paddle.shift(-PADDLE_STEP);
        }
    }

    pub fn move_right(&mut self) {
        if !self.is_over() {
            self.paddle.shift(PADDLE_STEP);
        }
    }
}
