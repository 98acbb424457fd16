//! Block Breaker - A breakout-style arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball motion, collisions, score)
//! - `clock`: Fixed-rate tick scheduling
//! - `renderer`: Rendering/input collaborator and the terminal frontend
//! - `settings`: Runtime configuration
//! - `app`: Host loop tying it all together

pub mod app;
pub mod clock;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Playfield side length (square, centered at origin)
    pub const PLAYFIELD_SIZE: f64 = 600.0;
    /// Ball center is kept inside +/- this on both axes
    pub const WALL_LIMIT: f64 = 290.0;

    /// Paddle defaults
    pub const PADDLE_Y: f64 = -250.0;
    pub const PADDLE_HALF_WIDTH: f64 = 50.0;
    pub const PADDLE_HEIGHT: f64 = 20.0;
    pub const PADDLE_LIMIT: f64 = 280.0;
    pub const PADDLE_STEP: f64 = 40.0;
    /// Ball must be below this to hit the paddle
    pub const PADDLE_BAND_Y: f64 = -240.0;

    /// Ball defaults
    pub const BALL_RADIUS: f64 = 10.0;
    pub const BALL_START_DX: f64 = 2.0;
    pub const BALL_START_DY: f64 = -2.0;
    pub const BALL_START_SPEED: f64 = 2.0;
    /// Added to the speed scalar every tick (the only difficulty ramp)
    pub const SPEED_RAMP: f64 = 0.01;

    /// Block grid
    pub const BLOCK_SIZE: f64 = 20.0;
    pub const BLOCK_COLUMN_START: i32 = -280;
    pub const BLOCK_COLUMN_END: i32 = 280;
    pub const BLOCK_COLUMN_STEP: i32 = 70;
    pub const BLOCK_ROW_START: i32 = 260;
    pub const BLOCK_ROW_END: i32 = 140;
    pub const BLOCK_ROW_STEP: i32 = 40;
    pub const BLOCK_HIT_RADIUS: f64 = 20.0;

    /// Points per destroyed block
    pub const BLOCK_SCORE: u64 = 10;

    /// Default simulation rate
    pub const TICK_RATE_HZ: f64 = 60.0;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
}
