//! Simulation tick
//!
//! Core game loop step. Resolution order is fixed: ramp speed, move, walls,
//! miss check, paddle, blocks.

use serde::{Deserialize, Serialize};

use super::collision::{ball_hits_paddle, ball_missed, blocks_in_range, bounce_off_walls};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Discrete paddle input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaddleCommand {
    Left,
    Right,
}

impl GameState {
    /// Apply a paddle command immediately. Called between ticks.
    pub fn apply(&mut self, command: PaddleCommand) {
        match command {
            PaddleCommand::Left => self.move_left(),
            PaddleCommand::Right => self.move_right(),
        }
    }
}

/// Advance the game state by one step
pub fn tick(state: &mut GameState) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.events.clear();
    state.time_ticks += 1;

    state.speed += SPEED_RAMP;
    state.ball.advance(state.speed);

    for wall in bounce_off_walls(&mut state.ball) {
        log::debug!("Tick {}: wall bounce {:?}", state.time_ticks, wall);
        state.events.push(GameEvent::WallBounce { wall });
    }

    if ball_missed(state.ball.pos) {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::BallLost);
        log::info!(
            "Game over after {} ticks, score {}",
            state.time_ticks,
            state.score
        );
        return;
    }

    // x is left alone so a fast ball can still slip past the paddle edge
    if ball_hits_paddle(state.ball.pos, &state.paddle) {
        state.ball.pos.y = PADDLE_BAND_Y;
        state.ball.flip_y();
        state.events.push(GameEvent::PaddleHit);
        log::debug!(
            "Tick {}: paddle hit at x {:.1} (paddle {:.1})",
            state.time_ticks,
            state.ball.pos.x,
            state.paddle.x
        );
    }

    let hits = blocks_in_range(state.ball.pos, &state.blocks);
    if hits.is_empty() {
        return;
    }

    for index in hits {
        state.ball.flip_y();
        state.blocks[index].alive = false;
        state.score += BLOCK_SCORE;
        state.events.push(GameEvent::BlockDestroyed { index });
        log::debug!("Block {} destroyed, score {}", index, state.score);
    }

    if state.blocks_alive() == 0 {
        state.events.push(GameEvent::FieldCleared);
        log::info!("All blocks cleared at tick {}", state.time_ticks);
    }
}
