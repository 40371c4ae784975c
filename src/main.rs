use dino_jump::app::run_game_loop;
use dino_jump::build_info::version_line;
use dino_jump::constants::ASSET_DIR;
use dino_jump::ui::terminal::TerminalSession;
use dino_jump::{Assets, Result};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // The terminal session is already dropped, so this lands on a normal screen
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    log::info!("{} starting", version_line());

    // Load assets before touching the terminal so failures print cleanly
    log::info!("loading sprites from {}", ASSET_DIR);
    let assets = Assets::load()?;

    let final_state = {
        let mut session = TerminalSession::enter()?;
        run_game_loop(session.terminal(), &assets)?
    };

    log::info!(
        "quit after {} ticks with score {}",
        final_state.tick_count,
        final_state.score
    );
    Ok(())
}
