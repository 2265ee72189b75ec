//! Game-logic functions.
//!
//! State transitions take the `GameState` by mutable reference and advance
//! it in place.  Randomness is injected through an `Rng` handle so callers
//! control determinism (tests pass a seeded RNG).

use rand::Rng;

use crate::config::{GameConfig, Theme};
use crate::entities::{EntityKind, FallingEntity, GameEvent, GameState, GameStatus, Player};
use crate::error::ConfigError;
use crate::input::HeldKeys;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state.  Rejects invalid configuration.
pub fn new_game(config: GameConfig) -> Result<GameState, ConfigError> {
    config.validate()?;
    let player = spawn_player(&config);
    Ok(GameState {
        config,
        player,
        items: Vec::new(),
        giants: Vec::new(),
        obstacles: Vec::new(),
        score: 0,
        high_score: 0,
        last_clap: 0,
        last_theme: 0,
        theme_index: 0,
        spawn_timer: 0,
        status: GameStatus::Playing,
    })
}

/// Paddle centred horizontally, `bottom_offset` above the bottom edge.
fn spawn_player(config: &GameConfig) -> Player {
    let p = &config.player;
    Player {
        x: config.width / 2.0 - p.width / 2.0,
        y: config.height - p.bottom_offset,
        width: p.width,
        height: p.height,
        speed: p.speed,
    }
}

// ── Session control ──────────────────────────────────────────────────────────

/// Start a fresh run.  The high score and spawn timer are kept.
pub fn restart(state: &mut GameState) {
    state.score = 0;
    state.items.clear();
    state.giants.clear();
    state.obstacles.clear();
    state.player.x = state.config.width / 2.0 - state.player.width / 2.0;
    state.last_clap = 0;
    state.last_theme = 0;
    state.theme_index = 0;
    state.status = GameStatus::Playing;
    log::info!("Restarted (high score {})", state.high_score);
}

/// Flip between Playing and Paused.  Ignored once the game is over.
pub fn toggle_pause(state: &mut GameState) {
    state.status = match state.status {
        GameStatus::Playing => GameStatus::Paused,
        GameStatus::Paused => GameStatus::Playing,
        GameStatus::GameOver => return,
    };
    log::info!("Status -> {:?}", state.status);
}

/// Palette selected by the theme index.
pub fn current_theme(state: &GameState) -> &Theme {
    &state.config.themes[state.theme_index % state.config.themes.len()]
}

// ── Collision ────────────────────────────────────────────────────────────────

/// Point test: the entity's origin strictly inside the player's rectangle.
/// The entity's radius plays no part.
pub fn hits_player(player: &Player, x: f32, y: f32) -> bool {
    x > player.x && x < player.x + player.width && y > player.y && y < player.y + player.height
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame and return the side effects it
/// produced.  Only the high-score watermark moves while Paused or GameOver.
pub fn tick(state: &mut GameState, keys: HeldKeys, rng: &mut impl Rng) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.status == GameStatus::Playing {
        // ── 1. Input ─────────────────────────────────────────────────────────
        move_player(state, keys);

        // ── 2. Clap cue ──────────────────────────────────────────────────────
        if state.score >= state.last_clap + state.config.clap_every {
            state.last_clap = state.score;
            log::info!("Clap at score {}", state.score);
            events.push(GameEvent::Clap { score: state.score });
        }

        // ── 3. Theme cycle ───────────────────────────────────────────────────
        if state.score >= state.last_theme + state.config.theme_every {
            state.theme_index = (state.theme_index + 1) % state.config.themes.len();
            state.last_theme = state.score;
            log::info!("Theme -> {}", state.theme_index);
            events.push(GameEvent::ThemeChanged { index: state.theme_index });
        }

        // ── 4. Spawn ─────────────────────────────────────────────────────────
        state.spawn_timer += 1;
        if state.spawn_timer > state.config.spawn_interval {
            state.spawn_timer = 0;
            spawn(state, rng);
        }

        // ── 5. Fall & collide: items, then giants, then obstacles ────────────
        let player = state.player;
        let floor = state.config.height;

        let items = advance(&mut state.items, &player, floor);
        state.score += items * EntityKind::Item.points();
        events.extend((0..items).map(|_| GameEvent::ItemCaught));

        let giants = advance(&mut state.giants, &player, floor);
        state.score += giants * EntityKind::Giant.points();
        events.extend((0..giants).map(|_| GameEvent::GiantCaught));

        if advance(&mut state.obstacles, &player, floor) > 0 {
            state.status = GameStatus::GameOver;
            log::info!("Game over at score {}", state.score);
            events.push(GameEvent::ObstacleHit);
        }
    }

    // ── 6. High score ────────────────────────────────────────────────────────
    state.high_score = state.high_score.max(state.score);

    events
}

/// Apply held direction keys; both held cancel out.  Clamped to the field.
fn move_player(state: &mut GameState, keys: HeldKeys) {
    let player = &mut state.player;
    if keys.left {
        player.x -= player.speed;
    }
    if keys.right {
        player.x += player.speed;
    }
    player.x = player.x.max(0.0).min(player.max_x(state.config.width));
}

/// One spawn cycle: always an item, a giant whenever the score is a positive
/// multiple of 5, and an obstacle by chance.
fn spawn(state: &mut GameState, rng: &mut impl Rng) {
    let width = state.config.width;

    state.items.push(drop_entity(EntityKind::Item, width, rng));

    // Keyed on the current score, so it repeats every cycle while the score
    // sits on a multiple of 5.
    if state.score > 0 && state.score % 5 == 0 {
        state.giants.push(drop_entity(EntityKind::Giant, width, rng));
    }

    if rng.gen_bool(state.config.obstacle_chance) {
        state.obstacles.push(drop_entity(EntityKind::Obstacle, width, rng));
    }

    log::debug!(
        "Spawned (items={}, giants={}, obstacles={})",
        state.items.len(),
        state.giants.len(),
        state.obstacles.len()
    );
}

/// A new entity at the top edge with a random x in `[0, width - margin)`.
fn drop_entity(kind: EntityKind, width: f32, rng: &mut impl Rng) -> FallingEntity {
    let x = rng.gen_range(0.0..width - kind.spawn_margin());
    FallingEntity::new(kind, x, 0.0)
}

/// Move every entity down one frame, drop the ones caught by the player or
/// past the floor, and return how many were caught.
fn advance(entities: &mut Vec<FallingEntity>, player: &Player, floor: f32) -> u32 {
    let mut caught = 0;
    entities.retain_mut(|e| {
        e.y += e.speed;
        if hits_player(player, e.x, e.y) {
            caught += 1;
            false
        } else {
            e.y < floor
        }
    });
    caught
}
