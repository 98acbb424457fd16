//! Terminal frontend (ratatui + crossterm)
//!
//! Paints a `DisplayList` onto a braille canvas that maps the playfield
//! [-300, 300] on both axes to the whole terminal.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use glam::DVec2;
use ratatui::{
    DefaultTerminal, Frame,
    style::{Color as TermColor, Modifier, Style},
    symbols::Marker,
    text::Line,
    widgets::canvas::{Canvas, Circle, Context, Line as CanvasLine, Rectangle},
};

use super::{
    Align, Color, DisplayList, EntityHandle, Font, Key, KeySource, Renderer, Shape, TextHandle,
};
use crate::consts::PLAYFIELD_SIZE;

impl From<Color> for TermColor {
    fn from(color: Color) -> Self {
        match color {
            Color::White => TermColor::White,
            Color::Red => TermColor::Red,
            Color::Orange => TermColor::Rgb(255, 165, 0),
            Color::Yellow => TermColor::Yellow,
            Color::Green => TermColor::Green,
            Color::Blue => TermColor::Blue,
        }
    }
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Esc => Key::Esc,
            KeyCode::Char(c) => Key::Char(c),
            _ => Key::Other,
        }
    }
}

/// Full-screen terminal renderer. Restores the terminal when dropped.
pub struct TerminalRenderer {
    terminal: DefaultTerminal,
    display: DisplayList,
}

impl TerminalRenderer {
    /// Switch the terminal to raw mode and the alternate screen
    pub fn init() -> io::Result<Self> {
        let terminal = ratatui::try_init()?;
        log::info!("Terminal initialised");
        Ok(Self {
            terminal,
            display: DisplayList::new(),
        })
    }
}

/// Key presses read from the terminal event stream
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<Key>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key.code.into())),
            // Resize lands here too; callers redraw on None
            _ => Ok(None),
        }
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        ratatui::restore();
    }
}

impl Renderer for TerminalRenderer {
    fn create_entity(&mut self, shape: Shape, color: Color, pos: DVec2) -> EntityHandle {
        self.display.create_entity(shape, color, pos)
    }

    fn set_position(&mut self, handle: EntityHandle, pos: DVec2) {
        self.display.set_position(handle, pos);
    }

    fn position(&self, handle: EntityHandle) -> Option<DVec2> {
        self.display.position(handle)
    }

    fn hide(&mut self, handle: EntityHandle) {
        self.display.hide(handle);
    }

    fn draw_text(&mut self, pos: DVec2, text: &str, align: Align, font: Font) -> TextHandle {
        self.display.draw_text(pos, text, align, font)
    }

    fn clear_text(&mut self, handle: TextHandle) {
        self.display.clear_text(handle);
    }

    fn present_frame(&mut self) -> io::Result<()> {
        self.display.present_frame()?;
        let display = &self.display;
        self.terminal.draw(|frame| draw_display(frame, display))?;
        Ok(())
    }
}

fn draw_display(frame: &mut Frame, display: &DisplayList) {
    let area = frame.area();
    let half = PLAYFIELD_SIZE / 2.0;
    let units_per_column = PLAYFIELD_SIZE / f64::from(area.width.max(1));

    let canvas = Canvas::default()
        .background_color(TermColor::Black)
        .marker(Marker::Braille)
        .x_bounds([-half, half])
        .y_bounds([-half, half])
        .paint(|ctx| {
            for entity in display.visible_entities() {
                draw_shape(ctx, entity.shape, entity.pos, entity.color.into());
            }
            ctx.layer();
            for text in display.texts() {
                let width = text.content.chars().count() as f64 * units_per_column;
                let x = match text.align {
                    Align::Left => text.pos.x,
                    Align::Center => text.pos.x - width / 2.0,
                };
                let style = match text.font {
                    Font::Normal => Style::default().fg(TermColor::White),
                    Font::Large => Style::default()
                        .fg(TermColor::White)
                        .add_modifier(Modifier::BOLD),
                };
                ctx.print(x, text.pos.y, Line::styled(text.content.clone(), style));
            }
        });

    frame.render_widget(canvas, area);
}

fn draw_shape(ctx: &mut Context, shape: Shape, pos: DVec2, color: TermColor) {
    match shape {
        Shape::Rect { width, height } => {
            // Fill with horizontal lines so small blocks stay solid
            let rows = (height / 2.0).ceil().max(1.0) as usize;
            for row in 0..=rows {
                let y = pos.y - height / 2.0 + height * row as f64 / rows as f64;
                ctx.draw(&CanvasLine {
                    x1: pos.x - width / 2.0,
                    y1: y,
                    x2: pos.x + width / 2.0,
                    y2: y,
                    color,
                });
            }
        }
        Shape::Circle { radius } => ctx.draw(&Circle {
            x: pos.x,
            y: pos.y,
            radius,
            color,
        }),
        Shape::Outline { size } => ctx.draw(&Rectangle {
            x: pos.x - size / 2.0,
            y: pos.y - size / 2.0,
            width: size,
            height: size,
            color,
        }),
    }
}
