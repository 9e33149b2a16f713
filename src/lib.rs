//! Ledge Runner — a small terminal platformer.
//!
//! Module layout:
//! - `entities`: pure data types (rectangles, player, level entities, state)
//! - `config`: world constants and the fixed level layout
//! - `compute`: pure game logic — physics, collisions, the per-frame tick
//! - `display`: crossterm rendering of the current state
//!
//! The binary in `main.rs` owns the terminal, the input thread and the
//! frame clock; everything it feeds into `compute::tick` is a plain value.

pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
