// Playfield (logical pixels)
pub const WINDOW_WIDTH: i32 = 800;
pub const WINDOW_HEIGHT: i32 = 600;
pub const GROUND_HEIGHT: i32 = 400; // top edge of the ground line
pub const LINE_HEIGHT: i32 = 10;

// Player sprite
pub const DINO_X: i32 = 100;
pub const DINO_WIDTH: i32 = 50;
pub const DINO_HEIGHT: i32 = 50;
pub const DINO_GROUND_Y: i32 = GROUND_HEIGHT - DINO_HEIGHT;

// Obstacle
pub const OBSTACLE_WIDTH: i32 = 20;
pub const OBSTACLE_HEIGHT: i32 = 50;
pub const OBSTACLE_Y: i32 = GROUND_HEIGHT - OBSTACLE_HEIGHT;
pub const OBSTACLE_START_X: i32 = WINDOW_WIDTH;
pub const BASE_OBSTACLE_SPEED: i32 = 5;

// Jump physics (positive = downward)
pub const GRAVITY: i32 = 1;
pub const JUMP_VELOCITY: i32 = -20;

// Scoring
pub const SCORE_INCREMENT: u32 = 10;
pub const SPEED_THRESHOLD: u32 = 50;
pub const SPEED_INCREMENT: i32 = 2;

// Timing
pub const FRAME_DELAY_MS: u64 = 20;

// Assets
pub const ASSET_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets");
pub const PLAYER_SPRITE: &str = "player.png";
pub const OBSTACLE_SPRITE: &str = "obstacle.png";
pub const BACKGROUND_SPRITE: &str = "background.png";

// Text
pub const GAME_TITLE: &str = " Dino Jump ";
pub const GAME_OVER_TEXT: &str = "GAME OVER better luck next life";
pub const RESTART_HINT_TEXT: &str = "Press R to restart";
