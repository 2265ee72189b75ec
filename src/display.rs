//! Terminal rendering — all terminal I/O lives here.
//!
//! `TerminalSurface` rasterizes the logical playfield onto a grid of
//! character cells, then `present` flushes the grid with crossterm.  The
//! playfield is letterboxed: a cell is treated as twice as tall as it is
//! wide, and the last terminal row is kept for the controls hint.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    QueueableCommand,
};
use catch_game::surface::Surface;
use catch_game::Rgb;

const C_LETTERBOX: Rgb = Rgb::new(0, 0, 0);
const C_HINT: Color = Color::DarkGrey;

const CONTROLS_HINT: &str = "← → / A D : Move   P : Pause   R : Restart   Q : Quit";

#[derive(Clone, Copy, Debug, PartialEq)]
struct Cell {
    ch: char,
    fg: Rgb,
    bg: Rgb,
}

impl Default for Cell {
    fn default() -> Self {
        Cell { ch: ' ', fg: C_LETTERBOX, bg: C_LETTERBOX }
    }
}

pub struct TerminalSurface {
    field_width: f32,
    field_height: f32,
    cols: u16,
    rows: u16,
    /// Logical units per cell column; a row spans twice as many.
    unit: f32,
    /// First column of the playfield (horizontal letterbox).
    offset_x: u16,
    cells: Vec<Cell>,
}

impl TerminalSurface {
    pub fn new(field_width: f32, field_height: f32) -> Self {
        TerminalSurface {
            field_width,
            field_height,
            cols: 0,
            rows: 0,
            unit: 1.0,
            offset_x: 0,
            cells: Vec::new(),
        }
    }

    /// Fit the playfield to a terminal of `cols × rows` and blank the grid.
    pub fn begin_frame(&mut self, cols: u16, rows: u16) {
        let play_rows = rows.saturating_sub(1).max(1);
        let cols = cols.max(1);
        self.cols = cols;
        self.rows = play_rows;
        self.unit = (self.field_width / cols as f32).max(self.field_height / (2.0 * play_rows as f32));
        let used = (self.field_width / self.unit).ceil() as u16;
        self.offset_x = cols.saturating_sub(used) / 2;

        let len = cols as usize * play_rows as usize;
        self.cells.clear();
        self.cells.resize(len, Cell::default());
    }

    /// Write the grid and the controls hint, then flush.
    pub fn present<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let mut fg = None;
        let mut bg = None;

        for row in 0..self.rows {
            out.queue(cursor::MoveTo(0, row))?;
            for col in 0..self.cols {
                let cell = self.cells[row as usize * self.cols as usize + col as usize];
                if fg != Some(cell.fg) {
                    out.queue(style::SetForegroundColor(to_color(cell.fg)))?;
                    fg = Some(cell.fg);
                }
                if bg != Some(cell.bg) {
                    out.queue(style::SetBackgroundColor(to_color(cell.bg)))?;
                    bg = Some(cell.bg);
                }
                out.queue(Print(cell.ch))?;
            }
        }

        out.queue(style::ResetColor)?;
        out.queue(cursor::MoveTo(0, self.rows))?;
        out.queue(style::SetForegroundColor(C_HINT))?;
        let hint: String = CONTROLS_HINT.chars().take(self.cols as usize).collect();
        out.queue(Print(format!("{:<width$}", hint, width = self.cols as usize)))?;
        out.queue(style::ResetColor)?;
        out.flush()?;
        Ok(())
    }

    /// Logical point → fractional (column, row) relative to the playfield.
    fn to_cell(&self, x: f32, y: f32) -> (f32, f32) {
        (x / self.unit, y / (2.0 * self.unit))
    }

    /// Cell centre → logical point.
    fn to_logical(&self, col: i32, row: i32) -> (f32, f32) {
        ((col as f32 + 0.5) * self.unit, (row as f32 + 0.5) * 2.0 * self.unit)
    }

    /// Mutable cell at playfield-relative (col, row), if it is on screen and
    /// inside the playfield.
    fn cell_mut(&mut self, col: i32, row: i32) -> Option<&mut Cell> {
        let (x, y) = self.to_logical(col, row);
        if col < 0 || row < 0 || x > self.field_width || y > self.field_height {
            return None;
        }
        let screen_col = col as usize + self.offset_x as usize;
        if screen_col >= self.cols as usize || row as usize >= self.rows as usize {
            return None;
        }
        self.cells.get_mut(row as usize * self.cols as usize + screen_col)
    }

    fn paint(&mut self, col: i32, row: i32, color: Rgb) {
        if let Some(cell) = self.cell_mut(col, row) {
            cell.bg = color;
            cell.ch = ' ';
        }
    }
}

impl Surface for TerminalSurface {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb) {
        let (c0, r0) = self.to_cell(x, y);
        let (c1, r1) = self.to_cell(x + width, y + height);
        for row in r0.floor() as i32..(r1.ceil() as i32).max(r0.floor() as i32 + 1) {
            for col in c0.floor() as i32..(c1.ceil() as i32).max(c0.floor() as i32 + 1) {
                self.paint(col, row, color);
            }
        }
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgb) {
        let (c0, r0) = self.to_cell(cx - radius, cy - radius);
        let (c1, r1) = self.to_cell(cx + radius, cy + radius);
        let mut covered = false;
        for row in r0.floor() as i32..=r1.floor() as i32 {
            for col in c0.floor() as i32..=c1.floor() as i32 {
                let (x, y) = self.to_logical(col, row);
                if (x - cx).powi(2) + (y - cy).powi(2) <= radius * radius {
                    self.paint(col, row, color);
                    covered = true;
                }
            }
        }
        // Circles smaller than a cell still show up as one cell.
        if !covered {
            let (col, row) = self.to_cell(cx, cy);
            self.paint(col.floor() as i32, row.floor() as i32, color);
        }
    }

    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Rgb) {
        let (c0, r0) = self.to_cell(x0, y0);
        let (c1, r1) = self.to_cell(x1, y1);
        let steps = (c1 - c0).abs().max((r1 - r0).abs()).ceil().max(1.0) as i32;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let col = c0 + (c1 - c0) * t;
            let row = r0 + (r1 - r0) * t;
            self.paint(col.floor() as i32, row.floor() as i32, color);
        }
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str, color: Rgb) {
        let (col, row) = self.to_cell(x, y);
        let row = row.floor().max(0.0) as usize;
        if row >= self.rows as usize {
            return;
        }
        // Text may spill into the letterbox but is shifted left to stay on screen.
        let len = text.chars().count();
        let start = (col.floor().max(0.0) as usize + self.offset_x as usize)
            .min((self.cols as usize).saturating_sub(len));
        for (i, ch) in text.chars().enumerate() {
            let screen_col = start + i;
            if screen_col >= self.cols as usize {
                break;
            }
            let cell = &mut self.cells[row * self.cols as usize + screen_col];
            cell.ch = ch;
            cell.fg = color;
        }
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb { r: rgb.0, g: rgb.1, b: rgb.2 }
}
