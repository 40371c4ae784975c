pub mod canvas;
pub mod game_scene;
pub mod terminal;

use crate::assets::Assets;
use crate::game::GameState;
use ratatui::Frame;

/// Main UI drawing function.
pub fn draw_ui(frame: &mut Frame, game: &GameState, assets: &Assets) {
    let area = frame.size();
    game_scene::render_game_scene(frame, area, game, assets);
}
