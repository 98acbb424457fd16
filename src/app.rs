//! Host loop
//!
//! Owns the wall clock. Each frame: drain key presses, run the ticks that are
//! due, then push one frame to the renderer along with every event those
//! ticks produced.

use std::io;
use std::time::{Duration, Instant};

use crate::clock::FixedStep;
use crate::renderer::{Action, KeySource, Keymap, Renderer, Scene, TerminalKeys, TerminalRenderer};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, tick};

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    BallLost,
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub score: u64,
    pub ticks: u64,
    pub blocks_left: usize,
    pub outcome: Outcome,
}

impl RunSummary {
    fn new(state: &GameState, outcome: Outcome) -> Self {
        Self {
            score: state.score,
            ticks: state.time_ticks,
            blocks_left: state.blocks_alive(),
            outcome,
        }
    }
}

/// A game that has ended, with its last screen still built
#[derive(Debug)]
pub struct Finished {
    pub summary: RunSummary,
    state: GameState,
    scene: Scene,
}

impl Finished {
    fn new(state: GameState, scene: Scene, outcome: Outcome) -> Self {
        Self {
            summary: RunSummary::new(&state, outcome),
            state,
            scene,
        }
    }

    /// Keep the final screen up until any key is pressed. Every poll timeout
    /// redraws, so running effects play out and a resized terminal repaints.
    pub fn linger<R, K>(
        mut self,
        renderer: &mut R,
        keys: &mut K,
        settings: &Settings,
    ) -> io::Result<RunSummary>
    where
        R: Renderer,
        K: KeySource,
    {
        while keys.poll_key(settings.frame_interval())?.is_none() {
            self.scene.sync(renderer, &self.state, &[])?;
        }
        Ok(self.summary)
    }
}

/// Play one game in the terminal
pub fn run(settings: &Settings) -> io::Result<RunSummary> {
    let mut renderer = TerminalRenderer::init()?;
    let mut keys = TerminalKeys;
    let keymap = Keymap::default();

    let finished = play(&mut renderer, &mut keys, &keymap, settings)?;

    match finished.summary.outcome {
        Outcome::BallLost => finished.linger(&mut renderer, &mut keys, settings),
        Outcome::Quit => Ok(finished.summary),
    }
}

/// Run up to `due` ticks, appending each tick's events to `events`.
/// Stops early once the ball is lost.
pub fn run_ticks(state: &mut GameState, due: u32, events: &mut Vec<GameEvent>) {
    for _ in 0..due {
        tick(state);
        events.extend_from_slice(&state.events);
        if state.is_over() {
            break;
        }
    }
}

/// Run the game loop until the ball is lost or a quit key is pressed
pub fn play<R, K>(
    renderer: &mut R,
    keys: &mut K,
    keymap: &Keymap,
    settings: &Settings,
) -> io::Result<Finished>
where
    R: Renderer,
    K: KeySource,
{
    let mut state = GameState::new();
    let mut scene = Scene::build(renderer, &state, settings.border);
    let mut clock = FixedStep::new(settings.tick_rate_hz, settings.max_substeps);
    let mut frame_events = Vec::new();
    log::info!(
        "Starting game: {} blocks, {} Hz",
        state.blocks.len(),
        settings.tick_rate_hz
    );

    scene.sync(renderer, &state, &frame_events)?;
    let mut last_frame = Instant::now();

    loop {
        // Input lands between ticks, so paddle.x has a single writer
        let mut timeout = settings.frame_interval();
        while let Some(key) = keys.poll_key(timeout)? {
            timeout = Duration::ZERO;
            match keymap.lookup(key) {
                Some(Action::Paddle(command)) => state.apply(command),
                Some(Action::Quit) => {
                    log::info!("Quit at tick {}, score {}", state.time_ticks, state.score);
                    return Ok(Finished::new(state, scene, Outcome::Quit));
                }
                None => {}
            }
        }

        let now = Instant::now();
        let due = clock.advance(now - last_frame);
        last_frame = now;

        frame_events.clear();
        run_ticks(&mut state, due, &mut frame_events);
        scene.sync(renderer, &state, &frame_events)?;

        if state.is_over() {
            return Ok(Finished::new(state, scene, Outcome::BallLost));
        }
    }
}
