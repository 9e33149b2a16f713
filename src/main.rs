use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};

use ledge_runner::compute::{new_game, tick};
use ledge_runner::display;
use ledge_runner::entities::Intent;

const FRAME: Duration = Duration::from_micros(16_667); // ≈60 updates/sec

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames. Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 8 frames (≈133 ms) is
/// always refreshed before expiry.
const HOLD_WINDOW: u64 = 8;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs one session until the user quits.
///
/// Horizontal input model: pressing a direction key sets the movement
/// intent, and releasing it emits `StopHorizontal` only when that key's
/// direction matches the current velocity sign — releasing the inactive
/// direction key must not cancel motion set by the other one. Held state
/// is tracked in a `key_frame` map (frame of the last press/repeat event),
/// which works on two classes of terminal:
/// * **Keyboard-enhancement capable** (Ghostty, kitty, etc.): proper
///   `Press` / `Repeat` / `Release` events → keys are removed on release.
/// * **Classic terminals**: only `Press` events (OS key-repeat shows as
///   repeated `Press`). Keys expire after `HOLD_WINDOW` frames of silence,
///   which is shorter than the OS repeat interval, so a held key stays
///   live while it is actively generating repeats.
fn game_loop<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    let mut state = new_game();

    // Maps each held key → the frame it was last seen (press or repeat).
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;
    let mut prev_left = false;
    let mut prev_right = false;

    loop {
        let frame_start = Instant::now();
        frame += 1;
        let mut intents: Vec<Intent> = Vec::new();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
            match kind {
                // Press: record key + handle one-shot actions
                KeyEventKind::Press => {
                    key_frame.insert(code, frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            return Ok(());
                        }
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(());
                        }
                        KeyCode::Char(' ') => intents.push(Intent::Confirm),
                        KeyCode::Up
                        | KeyCode::Char('w')
                        | KeyCode::Char('W')
                        | KeyCode::Char('z')
                        | KeyCode::Char('Z') => intents.push(Intent::Jump),
                        _ => {}
                    }
                }
                // Repeat: refresh timestamp so key stays "held"
                KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                }
                // Release: remove key immediately (keyboard-enhancement path)
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        // ── Derive movement intents from held-state edges ─────────────────────
        let left = is_held(&key_frame, &KeyCode::Left, frame)
            || is_held(&key_frame, &KeyCode::Char('a'), frame)
            || is_held(&key_frame, &KeyCode::Char('A'), frame);
        let right = is_held(&key_frame, &KeyCode::Right, frame)
            || is_held(&key_frame, &KeyCode::Char('d'), frame)
            || is_held(&key_frame, &KeyCode::Char('D'), frame);

        if left && !prev_left {
            intents.push(Intent::MoveLeft);
        }
        if right && !prev_right {
            intents.push(Intent::MoveRight);
        }
        // A release only stops the direction that is actually moving
        if !left && prev_left && state.player.vel_x < 0.0 {
            intents.push(Intent::StopHorizontal);
        }
        if !right && prev_right && state.player.vel_x > 0.0 {
            intents.push(Intent::StopHorizontal);
        }
        prev_left = left;
        prev_right = right;

        state = tick(&state, &intents);

        display::render(out, &state)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = game_loop(&mut out, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
