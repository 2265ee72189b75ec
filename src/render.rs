//! Rendering layer — translates a `GameState` into draw calls.
//!
//! No game logic is performed here and the state is only read.

use std::f32::consts::TAU;

use crate::compute::current_theme;
use crate::config::{Rgb, Theme};
use crate::entities::{FallingEntity, GameState, GameStatus};
use crate::surface::Surface;

pub const HUD_POS: (f32, f32) = (20.0, 30.0);

/// Glow rings around a giant: radius + 2·i for i = GLOW_RINGS..1.
const GLOW_RINGS: u32 = 5;
const GLOW_ALPHA: u8 = 100;

const SPIKES: u32 = 8;
const SPIKE_LENGTH: f32 = 8.0;

pub const GAME_OVER_TEXT: &str = "Game Over - Press R to restart";
pub const PAUSED_TEXT: &str = "Paused - P to resume";

// ── Public entry point ────────────────────────────────────────────────────────

pub fn hud_text(state: &GameState) -> String {
    format!("Score: {} | High Score: {}", state.score, state.high_score)
}

/// Render one complete frame.
pub fn render<S: Surface>(state: &GameState, surface: &mut S) {
    let theme = current_theme(state);
    let (width, height) = (state.width(), state.height());

    surface.fill_rect(0.0, 0.0, width, height, theme.background);

    let p = &state.player;
    surface.fill_rect(p.x, p.y, p.width, p.height, theme.player);

    for item in &state.items {
        surface.fill_circle(item.x, item.y, item.radius, theme.item);
    }
    for giant in &state.giants {
        draw_glow_circle(surface, giant, theme);
    }
    for obstacle in &state.obstacles {
        draw_spiky_circle(surface, obstacle, theme.obstacle);
    }

    surface.draw_text(HUD_POS.0, HUD_POS.1, &hud_text(state), theme.text);

    match state.status {
        GameStatus::GameOver => {
            surface.draw_text(width / 2.0 - 150.0, height / 2.0, GAME_OVER_TEXT, theme.text);
        }
        GameStatus::Paused => {
            surface.draw_text(width / 2.0 - 100.0, height / 2.0, PAUSED_TEXT, theme.text);
        }
        GameStatus::Playing => {}
    }
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_glow_circle<S: Surface>(surface: &mut S, giant: &FallingEntity, theme: &Theme) {
    let halo = theme.giant.over(theme.background, GLOW_ALPHA);
    for i in (1..=GLOW_RINGS).rev() {
        surface.fill_circle(giant.x, giant.y, giant.radius + i as f32 * 2.0, halo);
    }
    surface.fill_circle(giant.x, giant.y, giant.radius, theme.giant);
}

fn draw_spiky_circle<S: Surface>(surface: &mut S, obstacle: &FallingEntity, color: Rgb) {
    surface.fill_circle(obstacle.x, obstacle.y, obstacle.radius, color);
    let reach = obstacle.radius + SPIKE_LENGTH;
    for i in 0..SPIKES {
        let angle = i as f32 * TAU / SPIKES as f32;
        surface.draw_line(
            obstacle.x,
            obstacle.y,
            obstacle.x + reach * angle.cos(),
            obstacle.y + reach * angle.sin(),
            color,
        );
    }
}
