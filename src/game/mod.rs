//! The Dino Jump simulation: state, input, and the fixed-timestep update.

pub mod logic;
pub mod types;

pub use logic::{check_collision, process_input, step};
pub use types::{GameInput, GameState, Hitbox, TickEvent};
