//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game state. No game logic is performed; this module only translates
//! world-space rectangles and the current status into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::entities::{GameState, GameStatus, Rect};

// ── World-to-cell mapping ─────────────────────────────────────────────────────

/// World units per terminal column.
const CELL_W: f32 = 10.0;
/// World units per terminal row (cells are roughly twice as tall as wide).
const CELL_H: f32 = 20.0;
/// Play field size in cells: 800×600 world → 80×30 grid.
const GRID_WIDTH: i32 = 80;
const GRID_HEIGHT: i32 = 30;
/// Rows reserved above the play field for the HUD.
const HUD_ROWS: u16 = 1;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_PLAYER: Color = Color::Green;
const C_PLATFORM: Color = Color::DarkYellow;
const C_ENEMY: Color = Color::Red;
const C_HUD_SCORE: Color = Color::Yellow;
const C_TITLE: Color = Color::Cyan;
const C_GAME_OVER: Color = Color::Red;
const C_PROMPT: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame for the current status.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    match state.status {
        GameStatus::Start => draw_start_screen(out)?,
        GameStatus::Running => draw_running_screen(out, state)?,
        GameStatus::GameOver => draw_game_over_screen(out, state)?,
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, GRID_HEIGHT as u16 + HUD_ROWS))?;
    out.flush()?;
    Ok(())
}

// ── Running screen ────────────────────────────────────────────────────────────

fn draw_running_screen<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    for platform in &state.platforms {
        draw_rect(out, &platform.rect, C_PLATFORM)?;
    }
    for enemy in &state.enemies {
        draw_rect(out, &enemy.rect, C_ENEMY)?;
    }
    draw_rect(out, &state.player.rect, C_PLAYER)?;

    // Score HUD
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {}", state.score)))?;

    Ok(())
}

/// Draw a world-space rectangle as a filled block of cells, clipped to the
/// play field. The player can leave the screen horizontally, so columns
/// outside the grid are simply not drawn.
fn draw_rect<W: Write>(out: &mut W, rect: &Rect, color: Color) -> std::io::Result<()> {
    let x0 = (rect.x / CELL_W).round() as i32;
    let y0 = (rect.y / CELL_H).round() as i32;
    let w = ((rect.width / CELL_W).round() as i32).max(1);
    let h = ((rect.height / CELL_H).round() as i32).max(1);

    out.queue(style::SetForegroundColor(color))?;
    for row in y0..y0 + h {
        if row < 0 || row >= GRID_HEIGHT {
            continue;
        }
        let col_start = x0.max(0);
        let col_end = (x0 + w).min(GRID_WIDTH);
        if col_start >= col_end {
            continue;
        }
        out.queue(cursor::MoveTo(col_start as u16, row as u16 + HUD_ROWS))?;
        out.queue(Print("█".repeat((col_end - col_start) as usize)))?;
    }
    Ok(())
}

// ── Start screen ──────────────────────────────────────────────────────────────

fn draw_start_screen<W: Write>(out: &mut W) -> std::io::Result<()> {
    let quarter = (GRID_HEIGHT / 4) as u16 + HUD_ROWS;
    let half = (GRID_HEIGHT / 2) as u16 + HUD_ROWS;
    let three_quarters = (GRID_HEIGHT * 3 / 4) as u16 + HUD_ROWS;

    draw_text_centered(out, quarter, "★  LEDGE  RUNNER  ★", C_TITLE)?;
    draw_text_centered(out, half, "Press SPACE to Start", C_PROMPT)?;
    draw_text_centered(
        out,
        three_quarters,
        "← → / A D : Move   ↑ / W / Z : Jump   Q : Quit",
        C_HINT,
    )?;
    Ok(())
}

// ── Game-over screen ──────────────────────────────────────────────────────────

fn draw_game_over_screen<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let quarter = (GRID_HEIGHT / 4) as u16 + HUD_ROWS;
    let half = (GRID_HEIGHT / 2) as u16 + HUD_ROWS;
    let three_quarters = (GRID_HEIGHT * 3 / 4) as u16 + HUD_ROWS;

    draw_text_centered(out, quarter, "GAME OVER", C_GAME_OVER)?;
    draw_text_centered(out, half, &format!("Final Score: {}", state.score), C_PROMPT)?;
    draw_text_centered(out, three_quarters, "Press SPACE to Play Again", C_PROMPT)?;
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn draw_text_centered<W: Write>(
    out: &mut W,
    row: u16,
    text: &str,
    color: Color,
) -> std::io::Result<()> {
    let col = (GRID_WIDTH as u16 / 2).saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}
