//! The real-time loop: poll input, step once, draw, sleep a fixed delay.

use crate::assets::Assets;
use crate::constants::FRAME_DELAY_MS;
use crate::error::Result;
use crate::game::{process_input, step, GameState, TickEvent};
use crate::input::{map_key, KeyAction};
use crate::ui::draw_ui;
use crate::ui::terminal::Tui;
use crossterm::event::{self, Event};
use std::time::Duration;

/// Run until the player quits. Returns the final state.
pub fn run_game_loop(terminal: &mut Tui, assets: &Assets) -> Result<GameState> {
    let mut game = GameState::new();
    let frame_delay = Duration::from_millis(FRAME_DELAY_MS);

    loop {
        // Drain everything that arrived since the last frame
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                match map_key(key) {
                    KeyAction::Quit => return Ok(game),
                    KeyAction::Game(input) => {
                        if let Some(event) = process_input(&mut game, input) {
                            log_event(&game, event);
                        }
                    }
                    KeyAction::Ignore => {}
                }
            }
            // Resize needs no handling: the next draw uses the new size
        }

        for event in step(&mut game) {
            log_event(&game, event);
        }

        terminal.draw(|frame| draw_ui(frame, &game, assets))?;

        std::thread::sleep(frame_delay);
    }
}

fn log_event(game: &GameState, event: TickEvent) {
    match event {
        TickEvent::Jumped => log::debug!("tick {}: jump", game.tick_count),
        TickEvent::Landed => log::debug!("tick {}: landed", game.tick_count),
        TickEvent::Scored(score) => log::debug!("tick {}: score {}", game.tick_count, score),
        TickEvent::SpeedUp(speed) => {
            log::debug!("tick {}: obstacle speed {}", game.tick_count, speed)
        }
        TickEvent::Collided => log::debug!(
            "tick {}: collision at x={}, final score {}",
            game.tick_count,
            game.obstacle_x,
            game.score
        ),
        TickEvent::Reset => log::debug!("reset"),
    }
}
