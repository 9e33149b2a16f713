//! World constants and the fixed level layout.
//!
//! Everything here is compile-time configuration: the world is a fixed
//! 800×600 region and the level is a hard-coded table, rebuilt verbatim
//! on every restart.

// ── World ─────────────────────────────────────────────────────────────────────

pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;

// ── Player ────────────────────────────────────────────────────────────────────

pub const PLAYER_WIDTH: f32 = 30.0;
pub const PLAYER_HEIGHT: f32 = 40.0;
/// Horizontal speed, world units per tick.
pub const PLAYER_SPEED: f32 = 5.0;
pub const PLAYER_SPAWN_X: f32 = 50.0;
pub const PLAYER_SPAWN_Y: f32 = SCREEN_HEIGHT - PLAYER_HEIGHT - 20.0;

// ── Physics ───────────────────────────────────────────────────────────────────

/// Added to vertical velocity every tick.
pub const GRAVITY: f32 = 0.8;
/// Terminal falling speed; vertical velocity never exceeds this.
pub const MAX_FALL_SPEED: f32 = 10.0;
/// Negative: an upward impulse.
pub const JUMP_STRENGTH: f32 = -15.0;

// ── Patrollers ────────────────────────────────────────────────────────────────

pub const PLATFORM_SPEED: f32 = 1.0;
pub const ENEMY_SPEED: f32 = 2.0;

// ── Scoring ───────────────────────────────────────────────────────────────────

/// Score accrues per tick while running, not per distance or action.
pub const SCORE_PER_TICK: u32 = 1;

// ── Level layout ──────────────────────────────────────────────────────────────

pub struct PlatformSpec {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub is_moving: bool,
    pub move_range: f32,
}

pub struct EnemySpec {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

const fn fixed(x: f32, y: f32, width: f32, height: f32) -> PlatformSpec {
    PlatformSpec { x, y, width, height, is_moving: false, move_range: 0.0 }
}

const fn patrolling(x: f32, y: f32, width: f32, height: f32, move_range: f32) -> PlatformSpec {
    PlatformSpec { x, y, width, height, is_moving: true, move_range }
}

pub const LEVEL_PLATFORMS: &[PlatformSpec] = &[
    // Ground platform spanning the whole screen
    fixed(0.0, SCREEN_HEIGHT - 20.0, SCREEN_WIDTH, 20.0),
    // Static ledges
    fixed(100.0, 500.0, 150.0, 20.0),
    fixed(550.0, 450.0, 150.0, 20.0),
    fixed(150.0, 300.0, 100.0, 20.0),
    // Patrolling platforms
    patrolling(400.0, 350.0, 100.0, 20.0, 200.0),
    patrolling(350.0, 150.0, 200.0, 20.0, 200.0),
];

pub const LEVEL_ENEMIES: &[EnemySpec] = &[
    EnemySpec { x: 600.0, y: SCREEN_HEIGHT - 40.0, width: 30.0, height: 20.0 },
    EnemySpec { x: 200.0, y: 480.0, width: 20.0, height: 20.0 },
    EnemySpec { x: 450.0, y: 330.0, width: 20.0, height: 20.0 },
];
