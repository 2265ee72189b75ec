//! Drawing-surface abstraction
//!
//! Coordinates are logical playfield units (600×800 in the reference
//! build).  Implementations decide how those map to pixels or cells.

use crate::config::Rgb;

pub trait Surface {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb);

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgb);

    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Rgb);

    /// Draw `text` with its left edge at `x` on the baseline `y`.
    fn draw_text(&mut self, x: f32, y: f32, text: &str, color: Rgb);
}

/// A recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect { x: f32, y: f32, width: f32, height: f32, color: Rgb },
    Circle { cx: f32, cy: f32, radius: f32, color: Rgb },
    Line { x0: f32, y0: f32, x1: f32, y1: f32, color: Rgb },
    Text { x: f32, y: f32, text: String, color: Rgb },
}

/// Surface that records every call in order instead of drawing.
#[derive(Debug, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// All text drawn, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// All circles drawn with exactly this color.
    pub fn circles_of(&self, color: Rgb) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(move |c| matches!(c, DrawCommand::Circle { color: c_color, .. } if *c_color == color))
    }
}

impl Surface for DrawList {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb) {
        self.commands.push(DrawCommand::Rect { x, y, width, height, color });
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgb) {
        self.commands.push(DrawCommand::Circle { cx, cy, radius, color });
    }

    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Rgb) {
        self.commands.push(DrawCommand::Line { x0, y0, x1, y1, color });
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str, color: Rgb) {
        self.commands.push(DrawCommand::Text { x, y, text: text.to_string(), color });
    }
}
