//! Property tests for the universally-quantified physics invariants.

use ledge_runner::compute::*;
use ledge_runner::config::*;
use ledge_runner::entities::*;

use proptest::prelude::*;

fn player_at(x: f32, y: f32) -> Player {
    Player {
        rect: Rect::new(x, y, PLAYER_WIDTH, PLAYER_HEIGHT),
        vel_x: 0.0,
        vel_y: 0.0,
        on_ground: false,
    }
}

proptest! {
    // Free fall never accelerates past the terminal speed, no matter how
    // long it lasts or what the starting velocity was.
    #[test]
    fn fall_speed_never_exceeds_terminal(
        ticks in 1usize..500,
        start_vy in -20.0f32..=MAX_FALL_SPEED,
    ) {
        let mut player = player_at(100.0, 0.0);
        player.vel_y = start_vy;
        for _ in 0..ticks {
            integrate(&mut player);
            prop_assert!(
                player.vel_y <= MAX_FALL_SPEED,
                "vel_y={} exceeded terminal speed",
                player.vel_y
            );
        }
    }

    // A patrolling platform may overshoot its bounds by at most one step
    // before reversing, for any range and any number of ticks.
    #[test]
    fn platform_patrol_stays_within_overshoot_bounds(
        ticks in 1usize..2000,
        start_x in 0.0f32..600.0,
        move_range in 50.0f32..300.0,
    ) {
        let mut platform = Platform {
            rect: Rect::new(start_x, 350.0, 100.0, 20.0),
            is_moving: true,
            start_x,
            move_range,
            speed: PLATFORM_SPEED,
            direction: 1.0,
        };
        let mut reversed = false;
        for _ in 0..ticks {
            update_platform(&mut platform);
            prop_assert!(platform.rect.x >= start_x - platform.speed);
            prop_assert!(platform.rect.x <= start_x + move_range + platform.speed);
            if platform.direction < 0.0 {
                reversed = true;
            }
        }
        // Enough ticks to cross the range guarantees at least one reversal
        if ticks as f32 * PLATFORM_SPEED > move_range + PLATFORM_SPEED {
            prop_assert!(reversed);
        }
    }

    // Enemies patrol the screen with the same one-step overshoot allowance.
    #[test]
    fn enemy_patrol_stays_near_screen(
        ticks in 1usize..2000,
        start_x in 0.0f32..770.0,
    ) {
        let mut enemy = Enemy {
            rect: Rect::new(start_x, 560.0, 30.0, 20.0),
            speed: ENEMY_SPEED,
            direction: 1.0,
        };
        for _ in 0..ticks {
            update_enemy(&mut enemy);
            prop_assert!(enemy.rect.left() >= -enemy.speed);
            prop_assert!(enemy.rect.right() <= SCREEN_WIDTH + enemy.speed);
        }
    }

    // Wherever the player ends up, the vertical clamp puts it back inside
    // the screen.
    #[test]
    fn clamp_restores_vertical_bounds(
        y in -500.0f32..1200.0,
        vy in -30.0f32..30.0,
    ) {
        let mut player = player_at(100.0, y);
        player.vel_y = vy;
        clamp_to_screen(&mut player);
        prop_assert!(player.rect.top() >= 0.0);
        prop_assert!(player.rect.bottom() <= SCREEN_HEIGHT);
    }

    // try_jump changes the vertical velocity if and only if the player was
    // grounded beforehand.
    #[test]
    fn jump_gated_by_on_ground(
        on_ground in any::<bool>(),
        vy in -20.0f32..20.0,
    ) {
        let mut player = player_at(100.0, 300.0);
        player.vel_y = vy;
        player.on_ground = on_ground;
        try_jump(&mut player);
        if on_ground {
            prop_assert_eq!(player.vel_y, JUMP_STRENGTH);
            prop_assert!(!player.on_ground);
        } else {
            prop_assert_eq!(player.vel_y, vy);
        }
    }

    // A player dropped anywhere above the ground platform lands exactly on
    // its top edge, grounded, with no residual vertical velocity.
    #[test]
    fn falling_player_lands_flush_on_the_ground(
        drop_y in 0.0f32..400.0,
    ) {
        let ground = Platform {
            rect: Rect::new(0.0, SCREEN_HEIGHT - 20.0, SCREEN_WIDTH, 20.0),
            is_moving: false,
            start_x: 0.0,
            move_range: 0.0,
            speed: PLATFORM_SPEED,
            direction: 1.0,
        };
        let platforms = [ground];
        let mut player = player_at(50.0, drop_y);

        for _ in 0..200 {
            integrate(&mut player);
            resolve_platform_collisions(&mut player, &platforms);
            clamp_to_screen(&mut player);
            if player.on_ground {
                break;
            }
        }

        prop_assert!(player.on_ground);
        prop_assert_eq!(player.rect.bottom(), SCREEN_HEIGHT - 20.0);
        prop_assert_eq!(player.vel_y, 0.0);
    }

    // Score is pure tick count while running; the start screen never scores.
    #[test]
    fn score_counts_running_ticks_only(ticks in 1usize..300) {
        let mut idle = new_game();
        for _ in 0..ticks {
            idle = tick(&idle, &[]);
        }
        prop_assert_eq!(idle.score, 0);

        let mut running = GameState { status: GameStatus::Running, ..new_game() };
        for _ in 0..ticks {
            running = tick(&running, &[]);
        }
        prop_assert_eq!(running.status, GameStatus::Running);
        prop_assert_eq!(running.score, ticks as u32 * SCORE_PER_TICK);
    }
}
