//! Collision detection and response
//!
//! Everything is axis-aligned except block hits, which use a fixed radius
//! around the block center regardless of block size.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::state::{Ball, Block, Paddle};
use crate::consts::*;

/// Playfield walls the ball can bounce off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Top,
    Left,
    Right,
}

/// Clamp the ball back inside the top and side walls, flipping the direction
/// component of every axis that crossed. Returns the walls that were hit.
pub fn bounce_off_walls(ball: &mut Ball) -> Vec<Wall> {
    let mut hits = Vec::new();

    if ball.pos.y > WALL_LIMIT {
        ball.pos.y = WALL_LIMIT;
        ball.flip_y();
        hits.push(Wall::Top);
    }

    if ball.pos.x > WALL_LIMIT {
        ball.pos.x = WALL_LIMIT;
        ball.flip_x();
        hits.push(Wall::Right);
    } else if ball.pos.x < -WALL_LIMIT {
        ball.pos.x = -WALL_LIMIT;
        ball.flip_x();
        hits.push(Wall::Left);
    }

    hits
}

/// Ball fell past the bottom boundary
#[inline]
pub fn ball_missed(ball_pos: DVec2) -> bool {
    ball_pos.y < -WALL_LIMIT
}

/// Ball is inside the paddle band and strictly within the paddle's span.
/// A ball exactly on a paddle edge does not bounce.
pub fn ball_hits_paddle(ball_pos: DVec2, paddle: &Paddle) -> bool {
    ball_pos.y < PADDLE_BAND_Y
        && paddle.x - PADDLE_HALF_WIDTH < ball_pos.x
        && ball_pos.x < paddle.x + PADDLE_HALF_WIDTH
}

/// Indices of alive blocks whose center is closer than the hit radius.
/// The returned list is a snapshot; the caller applies the hits afterwards.
pub fn blocks_in_range(ball_pos: DVec2, blocks: &[Block]) -> Vec<usize> {
    blocks
        .iter()
        .enumerate()
        .filter(|(_, block)| block.alive && block.pos.distance(ball_pos) < BLOCK_HIT_RADIUS)
        .map(|(index, _)| index)
        .collect()
}
