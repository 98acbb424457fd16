//! Mirrors a `GameState` onto renderer entities
//!
//! Positions and the score are read from the state. One-off effects (block
//! hit bursts, the ball-loss flash) are driven by the events collected from
//! every tick since the previous frame.

use std::f64::consts::TAU;
use std::io;

use glam::DVec2;

use super::{Align, Color, EntityHandle, Font, Renderer, Shape, TextHandle};
use crate::consts::*;
use crate::sim::{GameEvent, GameState};

const SCORE_POS: DVec2 = DVec2::new(-290.0, 280.0);
const GAME_OVER_TEXT: &str = "Game Over";

/// Particles per block hit burst
const BURST_PARTICLES: usize = 8;
/// Playfield units per frame
const BURST_SPEED: f64 = 2.0;
/// Frames a burst particle stays on screen
const BURST_FRAMES: u32 = 20;
const PARTICLE_RADIUS: f64 = 2.0;
/// Maximum particles alive at once
const MAX_PARTICLES: usize = 256;
/// Frames the ball-loss flash stays on screen
const FLASH_FRAMES: u32 = 12;

/// A burst particle (visual only)
#[derive(Debug)]
struct Particle {
    handle: EntityHandle,
    pos: DVec2,
    vel: DVec2,
    /// Frames left on screen
    life: f64,
}

#[derive(Debug)]
struct Flash {
    handle: EntityHandle,
    frames_left: u32,
}

/// Entity handles for everything on screen
#[derive(Debug)]
pub struct Scene {
    paddle: EntityHandle,
    ball: EntityHandle,
    /// Same order as `GameState::blocks`
    blocks: Vec<EntityHandle>,
    score_text: TextHandle,
    shown_score: u64,
    game_over_text: Option<TextHandle>,
    particles: Vec<Particle>,
    flash: Option<Flash>,
}

fn score_line(score: u64) -> String {
    format!("Score: {}", score)
}

impl Scene {
    /// Create all entities for a fresh state
    pub fn build<R: Renderer>(renderer: &mut R, state: &GameState, border: bool) -> Self {
        if border {
            renderer.create_entity(
                Shape::Outline {
                    size: PLAYFIELD_SIZE,
                },
                Color::White,
                DVec2::ZERO,
            );
        }

        let paddle = renderer.create_entity(
            Shape::Rect {
                width: PADDLE_HALF_WIDTH * 2.0,
                height: PADDLE_HEIGHT,
            },
            Color::Blue,
            state.paddle.pos(),
        );

        let ball = renderer.create_entity(
            Shape::Circle {
                radius: BALL_RADIUS,
            },
            Color::Red,
            state.ball.pos,
        );

        let blocks = state
            .blocks
            .iter()
            .map(|block| {
                let handle = renderer.create_entity(
                    Shape::Rect {
                        width: BLOCK_SIZE,
                        height: BLOCK_SIZE,
                    },
                    block.color.into(),
                    block.pos,
                );
                if !block.alive {
                    renderer.hide(handle);
                }
                handle
            })
            .collect();

        let score_text = renderer.draw_text(
            SCORE_POS,
            &score_line(state.score),
            Align::Left,
            Font::Normal,
        );

        Self {
            paddle,
            ball,
            blocks,
            score_text,
            shown_score: state.score,
            game_over_text: None,
            particles: Vec::new(),
            flash: None,
        }
    }

    /// Push the current state and the frame's events to the renderer, then
    /// present one frame. `events` holds everything since the last sync.
    pub fn sync<R: Renderer>(
        &mut self,
        renderer: &mut R,
        state: &GameState,
        events: &[GameEvent],
    ) -> io::Result<()> {
        self.update_effects(renderer);

        for event in events {
            match *event {
                GameEvent::BlockDestroyed { index } => {
                    let (Some(&handle), Some(block)) =
                        (self.blocks.get(index), state.blocks.get(index))
                    else {
                        continue;
                    };
                    renderer.hide(handle);
                    self.spawn_burst(renderer, block.pos, block.color.into());
                }
                GameEvent::BallLost => self.start_flash(renderer),
                _ => {}
            }
        }

        renderer.set_position(self.paddle, state.paddle.pos());
        renderer.set_position(self.ball, state.ball.pos);

        if state.score != self.shown_score {
            renderer.clear_text(self.score_text);
            self.score_text = renderer.draw_text(
                SCORE_POS,
                &score_line(state.score),
                Align::Left,
                Font::Normal,
            );
            self.shown_score = state.score;
        }

        if state.is_over() && self.game_over_text.is_none() {
            self.game_over_text = Some(renderer.draw_text(
                DVec2::ZERO,
                GAME_OVER_TEXT,
                Align::Center,
                Font::Large,
            ));
        }

        renderer.present_frame()
    }

    /// Radial burst of particles in the hit block's color
    fn spawn_burst<R: Renderer>(&mut self, renderer: &mut R, origin: DVec2, color: Color) {
        for i in 0..BURST_PARTICLES {
            if self.particles.len() >= MAX_PARTICLES {
                break;
            }
            let angle = TAU * i as f64 / BURST_PARTICLES as f64;
            let handle = renderer.create_entity(
                Shape::Circle {
                    radius: PARTICLE_RADIUS,
                },
                color,
                origin,
            );
            self.particles.push(Particle {
                handle,
                pos: origin,
                vel: DVec2::from_angle(angle) * BURST_SPEED,
                life: BURST_FRAMES as f64,
            });
        }
    }

    fn start_flash<R: Renderer>(&mut self, renderer: &mut R) {
        if self.flash.is_some() {
            return;
        }
        let handle = renderer.create_entity(
            Shape::Outline {
                size: PLAYFIELD_SIZE,
            },
            Color::Red,
            DVec2::ZERO,
        );
        self.flash = Some(Flash {
            handle,
            frames_left: FLASH_FRAMES,
        });
    }

    /// Advance particles and the flash by one frame
    fn update_effects<R: Renderer>(&mut self, renderer: &mut R) {
        for particle in self.particles.iter_mut() {
            particle.pos += particle.vel;
            particle.life -= 1.0;
            if particle.life > 0.0 {
                renderer.set_position(particle.handle, particle.pos);
            } else {
                renderer.hide(particle.handle);
            }
        }
        self.particles.retain(|p| p.life > 0.0);

        if let Some(flash) = self.flash.as_mut() {
            if flash.frames_left > 0 {
                flash.frames_left -= 1;
                if flash.frames_left == 0 {
                    renderer.hide(flash.handle);
                }
            }
        }
    }

    /// Particles currently on screen
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }
}
