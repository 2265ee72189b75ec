//! All game entity types — pure data, no logic beyond per-kind constants.

use crate::config::GameConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Paused,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    /// Small falling pickup worth one point.
    Item,
    /// Large, slower pickup worth ten points.
    Giant,
    /// Ends the run on contact.
    Obstacle,
}

impl EntityKind {
    pub fn radius(self) -> f32 {
        match self {
            EntityKind::Item => 10.0,
            EntityKind::Giant => 15.0,
            EntityKind::Obstacle => 20.0,
        }
    }

    /// Downward distance travelled per frame.
    pub fn speed(self) -> f32 {
        match self {
            EntityKind::Item => 4.0,
            EntityKind::Giant => 3.0,
            EntityKind::Obstacle => 5.0,
        }
    }

    /// Score awarded when the player catches one.
    pub fn points(self) -> u32 {
        match self {
            EntityKind::Item => 1,
            EntityKind::Giant => 10,
            EntityKind::Obstacle => 0,
        }
    }

    /// Spawn x is drawn from `[0, width - spawn_margin)`.
    pub fn spawn_margin(self) -> f32 {
        match self {
            EntityKind::Item => 20.0,
            EntityKind::Giant | EntityKind::Obstacle => 30.0,
        }
    }
}

/// Side effects produced by a single tick.  The host decides how to
/// present them (sound cue, log line, nothing).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Clap { score: u32 },
    ThemeChanged { index: usize },
    ItemCaught,
    GiantCaught,
    ObstacleHit,
}

// ── Player & falling entities ─────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

impl Player {
    /// Right-most x the player may occupy inside a playfield of `field_width`.
    pub fn max_x(&self, field_width: f32) -> f32 {
        field_width - self.width
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FallingEntity {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub speed: f32,
    pub kind: EntityKind,
}

impl FallingEntity {
    pub fn new(kind: EntityKind, x: f32, y: f32) -> Self {
        FallingEntity {
            x,
            y,
            radius: kind.radius(),
            speed: kind.speed(),
            kind,
        }
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Owned by the host loop and mutated only through
/// the functions in `compute`.
#[derive(Clone, Debug)]
pub struct GameState {
    pub config: GameConfig,
    pub player: Player,
    /// Entity lists, in spawn order.
    pub items: Vec<FallingEntity>,
    pub giants: Vec<FallingEntity>,
    pub obstacles: Vec<FallingEntity>,
    pub score: u32,
    /// Highest score seen this session; survives restarts.
    pub high_score: u32,
    /// Score at which the last clap fired.
    pub last_clap: u32,
    /// Score at which the theme last advanced.
    pub last_theme: u32,
    pub theme_index: usize,
    /// Frames since the last spawn.
    pub spawn_timer: u32,
    pub status: GameStatus,
}

impl GameState {
    pub fn width(&self) -> f32 {
        self.config.width
    }

    pub fn height(&self) -> f32 {
        self.config.height
    }
}
