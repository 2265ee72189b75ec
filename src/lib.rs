//! Catch-the-falling-items arcade game.
//!
//! - `entities`: pure game data
//! - `config`: playfield, player and theme configuration
//! - `compute`: per-frame simulation (tick, restart, pause)
//! - `render`: draws a game state onto any `Surface`
//! - `surface`: the drawing-surface abstraction
//! - `input`: key events collapsed into a held-key snapshot

pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod input;
pub mod render;
pub mod surface;

pub use config::{GameConfig, PlayerConfig, Rgb, Theme};
pub use error::ConfigError;
