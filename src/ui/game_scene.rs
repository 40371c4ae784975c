//! Dino Jump scene rendering.
//!
//! The 800x600 play field is rasterised onto a half-block canvas sized to
//! the available area, so the picture stretches with the terminal. Text is
//! stamped onto the cell grid afterwards.

use super::canvas::{put_text, render_cells, PixelCanvas, Rgb};
use crate::assets::Assets;
use crate::build_info::{BUILD_COMMIT, BUILD_DATE};
use crate::constants::*;
use crate::game::GameState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const SKY: Rgb = (135, 190, 235);
const GROUND: Rgb = (0, 0, 0);

const INFO_PANEL_WIDTH: u16 = 24;
const STATUS_BAR_HEIGHT: u16 = 2;
/// Below this size the border, status bar and info panel are dropped.
const MIN_CHROME_WIDTH: u16 = INFO_PANEL_WIDTH + 30;
const MIN_CHROME_HEIGHT: u16 = STATUS_BAR_HEIGHT + 10;

struct SceneLayout {
    field: Rect,
    status_bar: Rect,
    info_panel: Rect,
}

/// Render the whole scene into `area`.
pub fn render_game_scene(frame: &mut Frame, area: Rect, game: &GameState, assets: &Assets) {
    let Some(layout) = split_layout(frame, area) else {
        render_play_field(frame, area, game, assets);
        return;
    };

    render_play_field(frame, layout.field, game, assets);
    render_status_bar(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game);
}

/// Draw the outer border and carve it into field / status bar / info panel.
/// Returns `None` when the area is too small for the chrome.
fn split_layout(frame: &mut Frame, area: Rect) -> Option<SceneLayout> {
    if area.width < MIN_CHROME_WIDTH || area.height < MIN_CHROME_HEIGHT {
        return None;
    }

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(GAME_TITLE)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightYellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(INFO_PANEL_WIDTH)])
        .split(inner);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(STATUS_BAR_HEIGHT)])
        .split(columns[0]);

    Some(SceneLayout {
        field: rows[0],
        status_bar: rows[1],
        info_panel: columns[1],
    })
}

/// Maps logical play field pixels onto canvas pixels.
struct Viewport {
    width: i64,
    height: i64,
}

impl Viewport {
    fn new(canvas: &PixelCanvas) -> Self {
        Self {
            width: canvas.width() as i64,
            height: canvas.height() as i64,
        }
    }

    fn x(&self, x: i32) -> i32 {
        (x as i64 * self.width).div_euclid(WINDOW_WIDTH as i64) as i32
    }

    fn y(&self, y: i32) -> i32 {
        (y as i64 * self.height).div_euclid(WINDOW_HEIGHT as i64) as i32
    }

    /// Scaled `(x, y, w, h)`; anything on screen is at least one pixel.
    fn rect(&self, x: i32, y: i32, w: i32, h: i32) -> (i32, i32, i32, i32) {
        let (x0, y0) = (self.x(x), self.y(y));
        let (x1, y1) = (self.x(x + w), self.y(y + h));
        (x0, y0, (x1 - x0).max(1), (y1 - y0).max(1))
    }
}

fn render_play_field(frame: &mut Frame, area: Rect, game: &GameState, assets: &Assets) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let mut canvas = PixelCanvas::new(area.width, area.height, SKY);
    let view = Viewport::new(&canvas);

    let (w, h) = (canvas.width() as i32, canvas.height() as i32);
    canvas.blit(&assets.background, 0, 0, w, h);

    let (x, y, w, h) = view.rect(0, GROUND_HEIGHT, WINDOW_WIDTH, LINE_HEIGHT);
    canvas.fill_rect(x, y, w, h, GROUND);

    let (x, y, w, h) = view.rect(DINO_X, game.dino_y, DINO_WIDTH, DINO_HEIGHT);
    canvas.blit(&assets.player, x, y, w, h);

    let (x, y, w, h) = view.rect(game.obstacle_x, OBSTACLE_Y, OBSTACLE_WIDTH, OBSTACLE_HEIGHT);
    canvas.blit(&assets.obstacle, x, y, w, h);

    let mut cells = canvas.to_cells();
    put_text(&mut cells, 0, 1, &format!("Score: {}", game.score), Color::White);

    if game.game_over {
        let width = area.width as usize;
        let row = cells.len() / 2;
        for (offset, (text, color)) in [
            (GAME_OVER_TEXT, Color::Red),
            (RESTART_HINT_TEXT, Color::White),
        ]
        .into_iter()
        .enumerate()
        {
            let col = width.saturating_sub(text.chars().count()) / 2;
            put_text(&mut cells, row + offset, col, text, color);
        }
    }

    render_cells(frame, area, &cells);
}

fn render_status_bar(frame: &mut Frame, area: Rect, game: &GameState) {
    let (status, color, controls) = if game.game_over {
        ("Crashed!", Color::Red, [("[R]", "Restart"), ("[Q/Esc]", "Quit")])
    } else {
        (
            "Run!",
            Color::LightYellow,
            [("[Space/Up]", "Jump"), ("[Q/Esc]", "Quit")],
        )
    };

    let status_line = Paragraph::new(status)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);
    frame.render_widget(status_line, Rect { height: 1, ..area });

    if area.height < 2 {
        return;
    }
    let mut spans = Vec::new();
    for (i, (key, action)) in controls.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        Rect {
            y: area.y + 1,
            height: 1,
            ..area
        },
    );
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &GameState) {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);
    let (state_text, state_color) = if game.game_over {
        ("Game over", Color::Red)
    } else if game.jumping {
        ("Airborne", Color::LightCyan)
    } else {
        ("Running", Color::LightGreen)
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(
                game.score.to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Speed: ", label),
            Span::styled(format!("{} px/tick", game.obstacle_speed), value),
        ]),
        Line::from(vec![
            Span::styled("Ticks: ", label),
            Span::styled(game.tick_count.to_string(), value),
        ]),
        Line::from(""),
        Line::from(Span::styled(state_text, Style::default().fg(state_color))),
        Line::from(""),
        Line::from(Span::styled(BUILD_DATE, label)),
        Line::from(Span::styled(BUILD_COMMIT, label)),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
