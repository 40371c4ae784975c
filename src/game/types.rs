//! Dino Jump data structures.
//!
//! A single runner jumps over one obstacle that keeps scrolling in from the
//! right edge. All positions are logical pixels on an 800x600 playfield with
//! y growing downward.

use crate::constants::*;

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    Jump,  // Space or Up arrow
    Reset, // R, only honoured after game over
}

/// Something notable that happened while handling input or stepping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    Jumped,
    Landed,
    /// Obstacle wrapped; carries the new score.
    Scored(u32),
    /// Obstacle speed went up; carries the new speed.
    SpeedUp(i32),
    Collided,
    Reset,
}

/// Axis-aligned bounding box. Edges are inclusive, so touching boxes overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hitbox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Hitbox {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn overlaps(&self, other: &Hitbox) -> bool {
        self.x <= other.right()
            && other.x <= self.right()
            && self.y <= other.bottom()
            && other.y <= self.bottom()
    }
}

/// Main game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    // -- Runner state --
    /// Top edge of the runner sprite. `DINO_GROUND_Y` = standing on the ground.
    pub dino_y: i32,
    /// Vertical velocity in pixels/tick (negative = upward).
    pub velocity: i32,
    /// True while airborne.
    pub jumping: bool,

    // -- Obstacle state --
    /// Left edge of the obstacle.
    pub obstacle_x: i32,
    /// Pixels the obstacle moves left per tick.
    pub obstacle_speed: i32,

    // -- Scoring --
    pub score: u32,
    /// Set on collision, cleared only by reset.
    pub game_over: bool,

    /// Physics steps since start or last reset.
    pub tick_count: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            dino_y: DINO_GROUND_Y,
            velocity: 0,
            jumping: false,
            obstacle_x: OBSTACLE_START_X,
            obstacle_speed: BASE_OBSTACLE_SPEED,
            score: 0,
            game_over: false,
            tick_count: 0,
        }
    }

    /// Restore every field to its starting value.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn is_on_ground(&self) -> bool {
        self.dino_y >= DINO_GROUND_Y
    }

    pub fn dino_hitbox(&self) -> Hitbox {
        Hitbox::new(DINO_X, self.dino_y, DINO_WIDTH, DINO_HEIGHT)
    }

    pub fn obstacle_hitbox(&self) -> Hitbox {
        Hitbox::new(self.obstacle_x, OBSTACLE_Y, OBSTACLE_WIDTH, OBSTACLE_HEIGHT)
    }
}
