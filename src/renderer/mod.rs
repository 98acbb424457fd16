//! Rendering and input collaborator
//!
//! The simulation never draws. `Scene` reads a `GameState` and drives any
//! `Renderer`: the ratatui terminal frontend for play, or the headless
//! `DisplayList` for tests.

use std::io;

use glam::DVec2;

use crate::sim::BlockColor;

pub mod display;
pub mod keymap;
pub mod scene;
pub mod terminal;

pub use display::{DisplayList, Entity, Text};
pub use keymap::{Action, Key, KeySource, Keymap};
pub use scene::Scene;
pub use terminal::{TerminalKeys, TerminalRenderer};

/// Drawable shapes, sized in playfield units
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Filled rectangle centered on the entity position
    Rect { width: f64, height: f64 },
    /// Circle centered on the entity position
    Circle { radius: f64 },
    /// Unfilled square outline centered on the entity position
    Outline { size: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
}

impl From<BlockColor> for Color {
    fn from(color: BlockColor) -> Self {
        match color {
            BlockColor::Red => Color::Red,
            BlockColor::Orange => Color::Orange,
            BlockColor::Yellow => Color::Yellow,
            BlockColor::Green => Color::Green,
            BlockColor::Blue => Color::Blue,
        }
    }
}

/// Horizontal text anchoring relative to the text position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Normal,
    Large,
}

/// Handle to a drawable created by a renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityHandle(pub(crate) usize);

/// Handle to a piece of text drawn by a renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextHandle(pub(crate) usize);

/// What the game needs from a display backend
pub trait Renderer {
    /// Spawn a drawable at a position
    fn create_entity(&mut self, shape: Shape, color: Color, pos: DVec2) -> EntityHandle;

    fn set_position(&mut self, handle: EntityHandle, pos: DVec2);

    fn position(&self, handle: EntityHandle) -> Option<DVec2>;

    /// Stop drawing an entity. Hiding twice is a no-op.
    fn hide(&mut self, handle: EntityHandle);

    fn draw_text(&mut self, pos: DVec2, text: &str, align: Align, font: Font) -> TextHandle;

    fn clear_text(&mut self, handle: TextHandle);

    /// Flush one frame
    fn present_frame(&mut self) -> io::Result<()>;
}
