//! Headless display list
//!
//! Keeps every entity and text in memory. The terminal frontend paints from
//! one of these, and tests inspect it directly.

use std::io;

use glam::DVec2;

use super::{Align, Color, EntityHandle, Font, Renderer, Shape, TextHandle};

#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub shape: Shape,
    pub color: Color,
    pub pos: DVec2,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub pos: DVec2,
    pub content: String,
    pub align: Align,
    pub font: Font,
}

#[derive(Debug, Default)]
pub struct DisplayList {
    entities: Vec<Entity>,
    /// Cleared slots are reused by the next `draw_text`
    texts: Vec<Option<Text>>,
    frames: u64,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entity(&self, handle: EntityHandle) -> Option<&Entity> {
        self.entities.get(handle.0)
    }

    pub fn visible_entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.visible)
    }

    pub fn text(&self, handle: TextHandle) -> Option<&Text> {
        self.texts.get(handle.0).and_then(Option::as_ref)
    }

    pub fn texts(&self) -> impl Iterator<Item = &Text> {
        self.texts.iter().flatten()
    }

    /// Number of frames presented so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for DisplayList {
    fn create_entity(&mut self, shape: Shape, color: Color, pos: DVec2) -> EntityHandle {
        self.entities.push(Entity {
            shape,
            color,
            pos,
            visible: true,
        });
        EntityHandle(self.entities.len() - 1)
    }

    fn set_position(&mut self, handle: EntityHandle, pos: DVec2) {
        if let Some(entity) = self.entities.get_mut(handle.0) {
            entity.pos = pos;
        }
    }

    fn position(&self, handle: EntityHandle) -> Option<DVec2> {
        self.entity(handle).map(|e| e.pos)
    }

    fn hide(&mut self, handle: EntityHandle) {
        if let Some(entity) = self.entities.get_mut(handle.0) {
            entity.visible = false;
        }
    }

    fn draw_text(&mut self, pos: DVec2, text: &str, align: Align, font: Font) -> TextHandle {
        let text = Text {
            pos,
            content: text.to_string(),
            align,
            font,
        };
        match self.texts.iter().position(Option::is_none) {
            Some(slot) => {
                self.texts[slot] = Some(text);
                TextHandle(slot)
            }
            None => {
                self.texts.push(Some(text));
                TextHandle(self.texts.len() - 1)
            }
        }
    }

    fn clear_text(&mut self, handle: TextHandle) {
        if let Some(slot) = self.texts.get_mut(handle.0) {
            *slot = None;
        }
    }

    fn present_frame(&mut self) -> io::Result<()> {
        self.frames += 1;
        Ok(())
    }
}
