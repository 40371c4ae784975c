//! Dino Jump - a terminal side-scroller.
//!
//! The simulation in `game` is independent of the terminal; `app` wires it to
//! `crossterm` input and the `ui` renderer.

pub mod app;
pub mod assets;
pub mod build_info;
pub mod constants;
pub mod error;
pub mod game;
pub mod input;
pub mod ui;

pub use assets::Assets;
pub use error::{GameError, Result};
pub use game::{GameInput, GameState, TickEvent};
