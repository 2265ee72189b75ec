//! Game configuration
//!
//! Defaults reproduce the reference build: a 600×800 playfield, a 50×50
//! paddle and two color themes.  A JSON file may override any subset of
//! fields.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::entities::EntityKind;
use crate::error::ConfigError;

/// 24-bit RGB color, serialized as `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb(r, g, b)
    }

    /// Composite `self` over `base` with the given alpha (0 = base, 255 = self).
    pub fn over(self, base: Rgb, alpha: u8) -> Rgb {
        let mix = |top: u8, bottom: u8| -> u8 {
            let a = alpha as u16;
            ((top as u16 * a + bottom as u16 * (255 - a)) / 255) as u8
        };
        Rgb(mix(self.0, base.0), mix(self.1, base.1), mix(self.2, base.2))
    }
}

/// One color palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub background: Rgb,
    pub player: Rgb,
    pub item: Rgb,
    pub giant: Rgb,
    pub obstacle: Rgb,
    pub text: Rgb,
}

impl Theme {
    pub fn dark() -> Self {
        Theme {
            background: Rgb::new(0x1e, 0x1e, 0x1e),
            player: Rgb::new(0xc8, 0xc8, 0x32),
            item: Rgb::new(0x32, 0xc8, 0xc8),
            giant: Rgb::new(0xff, 0x00, 0x00),
            obstacle: Rgb::new(0x80, 0x00, 0x80),
            text: Rgb::new(0xff, 0xff, 0xff),
        }
    }

    pub fn light() -> Self {
        Theme {
            background: Rgb::new(0xff, 0xff, 0xff),
            player: Rgb::new(0x00, 0x64, 0xc8),
            item: Rgb::new(0x32, 0xc8, 0xc8),
            giant: Rgb::new(0xff, 0x00, 0x00),
            obstacle: Rgb::new(0x80, 0x00, 0x80),
            text: Rgb::new(0x00, 0x00, 0x00),
        }
    }
}

/// Paddle geometry and movement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub width: f32,
    pub height: f32,
    /// Horizontal distance per frame while a direction key is held.
    pub speed: f32,
    /// Distance from the bottom edge to the paddle's top.
    pub bottom_offset: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            width: 50.0,
            height: 50.0,
            speed: 5.0,
            bottom_offset: 60.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Playfield size in logical units.
    pub width: f32,
    pub height: f32,
    pub player: PlayerConfig,
    /// Spawning happens on the frame the spawn timer exceeds this value.
    pub spawn_interval: u32,
    /// Probability that a spawn cycle also drops an obstacle.
    pub obstacle_chance: f64,
    /// Score gain between clap cues.
    pub clap_every: u32,
    /// Score gain between theme changes.
    pub theme_every: u32,
    pub themes: Vec<Theme>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 800.0,
            player: PlayerConfig::default(),
            spawn_interval: 30,
            obstacle_chance: 0.1,
            clap_every: 100,
            theme_every: 150,
            themes: vec![Theme::dark(), Theme::light()],
        }
    }
}

impl GameConfig {
    /// Parse a JSON document; absent fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Config file named on the command line (`--config <path>`), else by
    /// `env`.  `--config` without a value is an error.
    pub fn path_from_args<I>(args: I, env: Option<OsString>) -> Result<Option<PathBuf>, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            if arg == "--config" {
                return match args.next() {
                    Some(path) => Ok(Some(PathBuf::from(path))),
                    None => Err(ConfigError::MissingValue("--config")),
                };
            }
        }
        Ok(env.map(PathBuf::from))
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.themes.is_empty() {
            return Err(ConfigError::EmptyThemes);
        }

        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("player.width", self.player.width),
            ("player.height", self.player.height),
            ("player.bottom_offset", self.player.bottom_offset),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if !(self.player.speed.is_finite() && self.player.speed >= 0.0) {
            return Err(ConfigError::NonPositive {
                field: "player.speed",
                value: self.player.speed,
            });
        }

        if self.player.width > self.width
            || self.player.height > self.height
            || self.player.bottom_offset > self.height
        {
            return Err(ConfigError::PlayerTooLarge);
        }

        let margin = [EntityKind::Item, EntityKind::Giant, EntityKind::Obstacle]
            .into_iter()
            .map(EntityKind::spawn_margin)
            .fold(0.0, f32::max);
        if self.width <= margin {
            return Err(ConfigError::PlayfieldTooNarrow {
                width: self.width,
                margin,
            });
        }

        if !(0.0..=1.0).contains(&self.obstacle_chance) {
            return Err(ConfigError::InvalidChance(self.obstacle_chance));
        }

        for (field, value) in [
            ("spawn_interval", self.spawn_interval),
            ("clap_every", self.clap_every),
            ("theme_every", self.theme_every),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroInterval(field));
            }
        }

        Ok(())
    }
}
