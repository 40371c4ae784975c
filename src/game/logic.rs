//! Dino Jump game logic: input processing, physics, collision detection.
//!
//! Everything here is a pure function of `GameState`, so the whole game can
//! be driven tick by tick without a terminal.

use super::types::*;
use crate::constants::*;

/// Process player input. Returns the event it caused, if any.
pub fn process_input(game: &mut GameState, input: GameInput) -> Option<TickEvent> {
    match input {
        GameInput::Jump => {
            if game.game_over || game.jumping {
                return None;
            }
            game.jumping = true;
            game.velocity = JUMP_VELOCITY;
            Some(TickEvent::Jumped)
        }
        GameInput::Reset => {
            if !game.game_over {
                return None;
            }
            game.reset();
            Some(TickEvent::Reset)
        }
    }
}

/// Advance the game by one fixed tick.
///
/// Does nothing once the game is over. Returns the events that happened
/// during the tick, in order.
pub fn step(game: &mut GameState) -> Vec<TickEvent> {
    let mut events = Vec::new();
    if game.game_over {
        return events;
    }

    game.tick_count += 1;

    // 1. Jump physics
    if game.jumping {
        game.dino_y += game.velocity;
        game.velocity += GRAVITY;

        if game.dino_y >= DINO_GROUND_Y {
            game.dino_y = DINO_GROUND_Y;
            game.velocity = 0;
            game.jumping = false;
            events.push(TickEvent::Landed);
        }
    }

    // 2. Scroll the obstacle, wrapping once it is fully off the left edge
    game.obstacle_x -= game.obstacle_speed;
    if game.obstacle_x < -OBSTACLE_WIDTH {
        game.obstacle_x = OBSTACLE_START_X;

        let previous = game.score;
        game.score += SCORE_INCREMENT;
        events.push(TickEvent::Scored(game.score));

        if game.score / SPEED_THRESHOLD > previous / SPEED_THRESHOLD {
            game.obstacle_speed += SPEED_INCREMENT;
            events.push(TickEvent::SpeedUp(game.obstacle_speed));
        }
    }

    // 3. Collision detection
    if check_collision(game) {
        game.game_over = true;
        events.push(TickEvent::Collided);
    }

    events
}

/// True if the runner and the obstacle hitboxes overlap.
pub fn check_collision(game: &GameState) -> bool {
    game.dino_hitbox().overlaps(&game.obstacle_hitbox())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step_n(game: &mut GameState, n: usize) {
        for _ in 0..n {
            step(game);
        }
    }

    // ── Input tests ──

    #[test]
    fn test_jump_sets_velocity_and_flag() {
        let mut game = GameState::new();

        let event = process_input(&mut game, GameInput::Jump);

        assert_eq!(event, Some(TickEvent::Jumped));
        assert!(game.jumping);
        assert_eq!(game.velocity, JUMP_VELOCITY);
    }

    #[test]
    fn test_jump_ignored_while_airborne() {
        let mut game = GameState::new();
        process_input(&mut game, GameInput::Jump);
        step_n(&mut game, 5);
        let velocity = game.velocity;

        assert_eq!(process_input(&mut game, GameInput::Jump), None);
        assert_eq!(game.velocity, velocity);
    }

    #[test]
    fn test_jump_ignored_when_game_over() {
        let mut game = GameState::new();
        game.game_over = true;

        assert_eq!(process_input(&mut game, GameInput::Jump), None);
        assert!(!game.jumping);
        assert_eq!(game.velocity, 0);
    }

    #[test]
    fn test_reset_ignored_while_playing() {
        let mut game = GameState::new();
        game.score = 30;
        game.obstacle_x = 400;

        assert_eq!(process_input(&mut game, GameInput::Reset), None);
        assert_eq!(game.score, 30);
        assert_eq!(game.obstacle_x, 400);
    }

    #[test]
    fn test_reset_after_game_over_restores_defaults() {
        let mut game = GameState::new();
        game.score = 120;
        game.obstacle_speed = 9;
        game.obstacle_x = 140;
        game.dino_y = 310;
        game.velocity = 4;
        game.jumping = true;
        game.game_over = true;

        assert_eq!(
            process_input(&mut game, GameInput::Reset),
            Some(TickEvent::Reset)
        );
        assert_eq!(game, GameState::new());
    }

    // ── Physics tests ──

    #[test]
    fn test_grounded_runner_does_not_move() {
        let mut game = GameState::new();
        step_n(&mut game, 10);

        assert_eq!(game.dino_y, DINO_GROUND_Y);
        assert_eq!(game.velocity, 0);
        assert!(!game.jumping);
    }

    #[test]
    fn test_velocity_grows_by_gravity_while_airborne() {
        let mut game = GameState::new();
        process_input(&mut game, GameInput::Jump);

        let mut previous = game.velocity;
        while game.jumping {
            step(&mut game);
            if game.jumping {
                assert_eq!(game.velocity, previous + GRAVITY);
                previous = game.velocity;
            }
        }

        assert_eq!(game.velocity, 0);
        assert_eq!(game.dino_y, DINO_GROUND_Y);
    }

    #[test]
    fn test_jump_follows_parabola() {
        let mut game = GameState::new();
        process_input(&mut game, GameInput::Jump);

        for k in 1..=40 {
            step(&mut game);
            let height = 20 * k - k * (k - 1) / 2;
            assert_eq!(game.dino_y, DINO_GROUND_Y - height, "tick {}", k);
            assert!(game.jumping, "still airborne at tick {}", k);
        }

        let events = step(&mut game);
        assert!(events.contains(&TickEvent::Landed));
        assert_eq!(game.dino_y, DINO_GROUND_Y);
        assert!(!game.jumping);
    }

    #[test]
    fn test_jump_peak_height() {
        let mut game = GameState::new();
        process_input(&mut game, GameInput::Jump);

        let mut highest = game.dino_y;
        while game.jumping {
            step(&mut game);
            highest = highest.min(game.dino_y);
        }

        assert_eq!(highest, DINO_GROUND_Y - 210);
    }

    #[test]
    fn test_landing_clamps_to_ground() {
        let mut game = GameState::new();
        game.jumping = true;
        game.dino_y = DINO_GROUND_Y - 3;
        game.velocity = 8;

        let events = step(&mut game);

        assert_eq!(events.first(), Some(&TickEvent::Landed));
        assert_eq!(game.dino_y, DINO_GROUND_Y);
        assert_eq!(game.velocity, 0);
        assert!(!game.jumping);
    }

    // ── Obstacle tests ──

    #[test]
    fn test_obstacle_moves_by_speed() {
        let mut game = GameState::new();
        let mut previous = game.obstacle_x;

        for _ in 0..50 {
            step(&mut game);
            assert_eq!(game.obstacle_x, previous - game.obstacle_speed);
            previous = game.obstacle_x;
        }
    }

    #[test]
    fn test_obstacle_wraps_only_when_fully_off_screen() {
        let mut game = GameState::new();
        game.obstacle_x = -15;

        let events = step(&mut game);
        assert_eq!(game.obstacle_x, -20);
        assert!(events.is_empty());
        assert_eq!(game.score, 0);

        let events = step(&mut game);
        assert_eq!(game.obstacle_x, WINDOW_WIDTH);
        assert_eq!(events, vec![TickEvent::Scored(SCORE_INCREMENT)]);
        assert_eq!(game.score, SCORE_INCREMENT);
    }

    #[test]
    fn test_speed_up_at_threshold() {
        let mut game = GameState::new();
        game.score = 40;
        game.obstacle_x = -18;

        let events = step(&mut game);

        assert_eq!(game.score, 50);
        assert_eq!(game.obstacle_speed, BASE_OBSTACLE_SPEED + SPEED_INCREMENT);
        assert_eq!(
            events,
            vec![
                TickEvent::Scored(50),
                TickEvent::SpeedUp(BASE_OBSTACLE_SPEED + SPEED_INCREMENT),
            ]
        );
    }

    #[test]
    fn test_speed_up_once_per_threshold() {
        let mut game = GameState::new();
        let mut speed_ups = 0;

        // Force ten wraps: scores 10..=100
        for _ in 0..10 {
            game.obstacle_x = -OBSTACLE_WIDTH;
            let events = step(&mut game);
            speed_ups += events
                .iter()
                .filter(|e| matches!(e, TickEvent::SpeedUp(_)))
                .count();
        }

        assert_eq!(game.score, 100);
        assert_eq!(speed_ups, 2);
        assert_eq!(game.obstacle_speed, BASE_OBSTACLE_SPEED + 2 * SPEED_INCREMENT);
    }

    // ── Collision tests ──

    #[test]
    fn test_collision_with_grounded_runner() {
        let mut game = GameState::new();
        game.obstacle_x = DINO_X + DINO_WIDTH + 1;

        let events = step(&mut game);

        assert!(game.game_over);
        assert_eq!(events, vec![TickEvent::Collided]);
    }

    #[test]
    fn test_no_collision_when_high_enough() {
        let mut game = GameState::new();
        game.jumping = true;
        game.dino_y = OBSTACLE_Y - DINO_HEIGHT - 20;
        game.velocity = 0;
        game.obstacle_x = DINO_X + 10;

        step(&mut game);
        assert!(!game.game_over);
    }

    #[test]
    fn test_collision_when_feet_touch_obstacle_top() {
        let mut game = GameState::new();
        game.dino_y = OBSTACLE_Y - DINO_HEIGHT;
        game.obstacle_x = DINO_X;

        assert!(check_collision(&game));
    }

    #[test]
    fn test_game_over_freezes_state() {
        let mut game = GameState::new();
        game.obstacle_x = DINO_X;
        step(&mut game);
        assert!(game.game_over);

        let frozen = game.clone();
        for _ in 0..20 {
            assert!(step(&mut game).is_empty());
        }
        assert_eq!(game, frozen);
    }

    #[test]
    fn test_game_over_persists_after_obstacle_passes() {
        let mut game = GameState::new();
        game.obstacle_x = DINO_X;
        step(&mut game);
        assert!(game.game_over);

        // Even with the boxes apart, only a reset clears the flag
        game.obstacle_x = 700;
        step(&mut game);
        assert!(game.game_over);

        process_input(&mut game, GameInput::Reset);
        assert!(!game.game_over);
    }
}
