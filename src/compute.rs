//! Pure game-logic functions.
//!
//! The per-frame entry point is `tick`, which takes the current `GameState`
//! plus the intents collected this frame and returns a brand-new state.
//! The smaller operations it is built from are public so tests can exercise
//! them in isolation. Side effects are limited to the fatal level-table
//! assertions in `build_level`.

use crate::config::*;
use crate::entities::{Enemy, GameState, GameStatus, Intent, Platform, Player, Rect};

// ── Constructors ─────────────────────────────────────────────────────────────

fn spawn_player() -> Player {
    Player {
        rect: Rect::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y, PLAYER_WIDTH, PLAYER_HEIGHT),
        vel_x: 0.0,
        vel_y: 0.0,
        on_ground: false,
    }
}

/// Instantiate the fixed level tables.
///
/// Panics on a malformed table (non-positive dimensions, or a patrolling
/// platform with a non-positive range). There is no runtime recovery from a
/// broken level, so this is checked once, at construction.
pub fn build_level() -> (Vec<Platform>, Vec<Enemy>) {
    let platforms = LEVEL_PLATFORMS
        .iter()
        .map(|spec| {
            assert!(
                spec.width > 0.0 && spec.height > 0.0,
                "platform at ({}, {}) has non-positive size {}x{}",
                spec.x,
                spec.y,
                spec.width,
                spec.height
            );
            assert!(
                !spec.is_moving || spec.move_range > 0.0,
                "moving platform at ({}, {}) has non-positive range {}",
                spec.x,
                spec.y,
                spec.move_range
            );
            Platform {
                rect: Rect::new(spec.x, spec.y, spec.width, spec.height),
                is_moving: spec.is_moving,
                start_x: spec.x,
                move_range: spec.move_range,
                speed: PLATFORM_SPEED,
                direction: 1.0,
            }
        })
        .collect();

    let enemies = LEVEL_ENEMIES
        .iter()
        .map(|spec| {
            assert!(
                spec.width > 0.0 && spec.height > 0.0,
                "enemy at ({}, {}) has non-positive size {}x{}",
                spec.x,
                spec.y,
                spec.width,
                spec.height
            );
            Enemy {
                rect: Rect::new(spec.x, spec.y, spec.width, spec.height),
                speed: ENEMY_SPEED,
                direction: 1.0,
            }
        })
        .collect();

    (platforms, enemies)
}

/// Build a fresh session sitting on the start screen.
pub fn new_game() -> GameState {
    let (platforms, enemies) = build_level();
    GameState {
        player: spawn_player(),
        platforms,
        enemies,
        score: 0,
        status: GameStatus::Start,
    }
}

/// Full restart: score back to zero, player at the spawn point, level
/// rebuilt from the tables, already running.
pub fn reset_game() -> GameState {
    GameState {
        status: GameStatus::Running,
        ..new_game()
    }
}

// ── Player operations ─────────────────────────────────────────────────────────

pub fn move_left(player: &mut Player) {
    player.vel_x = -PLAYER_SPEED;
}

pub fn move_right(player: &mut Player) {
    player.vel_x = PLAYER_SPEED;
}

pub fn stop_horizontal(player: &mut Player) {
    player.vel_x = 0.0;
}

/// Jump only from the ground — no double jumps, no jump buffering.
pub fn try_jump(player: &mut Player) {
    if player.on_ground {
        player.vel_y = JUMP_STRENGTH;
        player.on_ground = false;
    }
}

/// Advance the player one tick: horizontal motion, then gravity (capped at
/// the terminal fall speed), then vertical motion. `on_ground` is cleared
/// here and only collision resolution may set it back.
pub fn integrate(player: &mut Player) {
    player.rect.x += player.vel_x;

    player.vel_y += GRAVITY;
    if player.vel_y > MAX_FALL_SPEED {
        player.vel_y = MAX_FALL_SPEED;
    }

    player.rect.y += player.vel_y;
    player.on_ground = false;
}

// ── Collision resolution ──────────────────────────────────────────────────────

/// Vertical-only resolution against every overlapping platform, in table
/// order. Platforms are resolved sequentially: each sees the rectangle as
/// corrected by the ones before it. A stationary overlap (`vel_y == 0`)
/// is deliberately left unresolved.
pub fn resolve_platform_collisions(player: &mut Player, platforms: &[Platform]) {
    for platform in platforms {
        if !player.rect.overlaps(&platform.rect) {
            continue;
        }
        if player.vel_y > 0.0 {
            // Falling: land on top of the platform
            player.rect.set_bottom(platform.rect.top());
            player.vel_y = 0.0;
            player.on_ground = true;
        } else if player.vel_y < 0.0 {
            // Rising: bump the underside
            player.rect.set_top(platform.rect.bottom());
            player.vel_y = 0.0;
        }
    }
}

/// Keep the player inside the vertical screen bounds. The floor counts as
/// ground; the left and right edges are open.
pub fn clamp_to_screen(player: &mut Player) {
    if player.rect.bottom() > SCREEN_HEIGHT {
        player.rect.set_bottom(SCREEN_HEIGHT);
        player.vel_y = 0.0;
        player.on_ground = true;
    }
    if player.rect.top() < 0.0 {
        player.rect.set_top(0.0);
        player.vel_y = 0.0;
    }
}

/// Loss predicate: does the player overlap any enemy?
pub fn hits_enemy(player: &Player, enemies: &[Enemy]) -> bool {
    enemies.iter().any(|enemy| player.rect.overlaps(&enemy.rect))
}

// ── Patrollers ────────────────────────────────────────────────────────────────

/// Oscillate a moving platform between `start_x` and `start_x + move_range`.
/// The bound check runs on the already-advanced position and does not clamp,
/// so a reversal may overshoot by up to `speed` units.
pub fn update_platform(platform: &mut Platform) {
    if !platform.is_moving {
        return;
    }
    platform.rect.x += platform.speed * platform.direction;
    if platform.rect.x > platform.start_x + platform.move_range
        || platform.rect.x < platform.start_x
    {
        platform.direction = -platform.direction;
    }
}

/// Enemies patrol the full screen width, reversing at the edges. Same
/// post-move overshoot characteristic as platforms.
pub fn update_enemy(enemy: &mut Enemy) {
    enemy.rect.x += enemy.speed * enemy.direction;
    if enemy.rect.right() >= SCREEN_WIDTH || enemy.rect.left() <= 0.0 {
        enemy.direction = -enemy.direction;
    }
}

// ── Per-frame tick ────────────────────────────────────────────────────────────

/// Advance the game by one frame.
///
/// On the start and game-over screens only `Confirm` is honoured; restart
/// from game-over rebuilds the whole session. While running, the update
/// order is: intents → platforms → enemies → player physics → enemy-contact
/// check → score. The score increment is unconditional, so the tick that
/// detects an enemy hit still scores before the state flips to game-over.
pub fn tick(state: &GameState, intents: &[Intent]) -> GameState {
    match state.status {
        GameStatus::Start => {
            if intents.contains(&Intent::Confirm) {
                GameState {
                    status: GameStatus::Running,
                    ..state.clone()
                }
            } else {
                state.clone()
            }
        }
        GameStatus::GameOver => {
            if intents.contains(&Intent::Confirm) {
                reset_game()
            } else {
                state.clone()
            }
        }
        GameStatus::Running => {
            let mut player = state.player.clone();
            let mut platforms = state.platforms.clone();
            let mut enemies = state.enemies.clone();

            for intent in intents {
                match intent {
                    Intent::MoveLeft => move_left(&mut player),
                    Intent::MoveRight => move_right(&mut player),
                    Intent::StopHorizontal => stop_horizontal(&mut player),
                    Intent::Jump => try_jump(&mut player),
                    Intent::Confirm => {}
                }
            }

            for platform in platforms.iter_mut() {
                update_platform(platform);
            }
            for enemy in enemies.iter_mut() {
                update_enemy(enemy);
            }

            integrate(&mut player);
            resolve_platform_collisions(&mut player, &platforms);
            clamp_to_screen(&mut player);

            let status = if hits_enemy(&player, &enemies) {
                GameStatus::GameOver
            } else {
                GameStatus::Running
            };

            GameState {
                player,
                platforms,
                enemies,
                score: state.score + SCORE_PER_TICK,
                status,
            }
        }
    }
}
