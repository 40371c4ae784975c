//! Half-block pixel canvas.
//!
//! Each terminal cell shows two stacked pixels: the upper one as the
//! foreground of `▀`, the lower one as the background. Scenes paint pixels,
//! convert to a cell grid, stamp any text on top, and render the grid row by
//! row as `Paragraph` widgets.

use crate::assets::Sprite;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub type Rgb = (u8, u8, u8);

const UPPER_HALF: char = '▀';

/// Cell in the render buffer with foreground and background colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

pub struct PixelCanvas {
    width: usize,
    height: usize, // pixel rows = terminal rows * 2
    pixels: Vec<Rgb>,
}

impl PixelCanvas {
    /// Canvas covering `cols` x `rows` terminal cells.
    pub fn new(cols: u16, rows: u16, fill: Rgb) -> Self {
        let width = cols as usize;
        let height = rows as usize * 2;
        Self {
            width,
            height,
            pixels: vec![fill; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn set(&mut self, x: i32, y: i32, c: Rgb) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.pixels[y as usize * self.width + x as usize] = c;
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.pixels[y * self.width + x]
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, c: Rgb) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x + dx, y + dy, c);
            }
        }
    }

    /// Draw `sprite` stretched into the `w` x `h` rectangle at `(x, y)`,
    /// sampling nearest source pixels and skipping transparent ones.
    pub fn blit(&mut self, sprite: &Sprite, x: i32, y: i32, w: i32, h: i32) {
        if w <= 0 || h <= 0 || sprite.width() == 0 || sprite.height() == 0 {
            return;
        }

        let (sw, sh) = (sprite.width() as i64, sprite.height() as i64);
        for dy in 0..h {
            let sy = (dy as i64 * sh / h as i64) as u32;
            for dx in 0..w {
                let sx = (dx as i64 * sw / w as i64) as u32;
                if let Some(c) = sprite.pixel(sx, sy) {
                    self.set(x + dx, y + dy, c);
                }
            }
        }
    }

    /// Fold pixel pairs into terminal cells.
    pub fn to_cells(&self) -> Vec<Vec<Cell>> {
        (0..self.height / 2)
            .map(|row| {
                (0..self.width)
                    .map(|col| {
                        let top = self.get(col, row * 2);
                        let bottom = self.get(col, row * 2 + 1);
                        if top == bottom {
                            Cell {
                                ch: ' ',
                                fg: Color::Reset,
                                bg: rgb(top),
                            }
                        } else {
                            Cell {
                                ch: UPPER_HALF,
                                fg: rgb(top),
                                bg: rgb(bottom),
                            }
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

pub fn rgb((r, g, b): Rgb) -> Color {
    Color::Rgb(r, g, b)
}

/// Write `text` into a cell row starting at `col`, keeping each cell's
/// background. Characters past the right edge are dropped.
pub fn put_text(cells: &mut [Vec<Cell>], row: usize, col: usize, text: &str, fg: Color) {
    let Some(line) = cells.get_mut(row) else {
        return;
    };
    // The upper pixel of a half-block cell is lost under the glyph
    for (cell, ch) in line.iter_mut().skip(col).zip(text.chars()) {
        cell.ch = ch;
        cell.fg = fg;
    }
}

/// Render a cell grid into `area`, coalescing runs of equal style into spans.
pub fn render_cells(frame: &mut Frame, area: Rect, cells: &[Vec<Cell>]) {
    for (row_idx, row_data) in cells.iter().enumerate().take(area.height as usize) {
        let mut spans: Vec<Span> = Vec::new();
        let mut current_fg = Color::Reset;
        let mut current_bg = Color::Reset;
        let mut current_text = String::new();

        for &cell in row_data.iter().take(area.width as usize) {
            if (cell.fg != current_fg || cell.bg != current_bg) && !current_text.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut current_text),
                    Style::default().fg(current_fg).bg(current_bg),
                ));
            }
            current_fg = cell.fg;
            current_bg = cell.bg;
            current_text.push(cell.ch);
        }
        if !current_text.is_empty() {
            spans.push(Span::styled(
                current_text,
                Style::default().fg(current_fg).bg(current_bg),
            ));
        }

        let row_area = Rect::new(area.x, area.y + row_idx as u16, area.width, 1);
        frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
    }
}
