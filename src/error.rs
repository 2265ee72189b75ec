use std::fmt;

/// Errors raised while loading or validating a `GameConfig`.
#[derive(Debug)]
pub enum ConfigError {
    /// At least one theme is required.
    EmptyThemes,

    /// A dimension or speed that must be positive (or finite) is not.
    NonPositive { field: &'static str, value: f32 },

    /// The paddle does not fit inside the playfield.
    PlayerTooLarge,

    /// Spawned entities would have no room along the x axis.
    PlayfieldTooNarrow { width: f32, margin: f32 },

    /// Obstacle probability outside [0, 1].
    InvalidChance(f64),

    /// A frame or score interval is zero.
    ZeroInterval(&'static str),

    /// A command-line flag was given without its value.
    MissingValue(&'static str),

    Io(std::io::Error),

    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::EmptyThemes => {
                write!(f, "Theme list is empty")
            }
            ConfigError::NonPositive { field, value } => {
                write!(f, "{} must be positive (got {})", field, value)
            }
            ConfigError::PlayerTooLarge => {
                write!(f, "Player does not fit inside the playfield")
            }
            ConfigError::PlayfieldTooNarrow { width, margin } => {
                write!(f, "Playfield width {} must exceed spawn margin {}", width, margin)
            }
            ConfigError::InvalidChance(chance) => {
                write!(f, "obstacle_chance must be within [0, 1] (got {})", chance)
            }
            ConfigError::ZeroInterval(field) => {
                write!(f, "{} must be greater than zero", field)
            }
            ConfigError::MissingValue(flag) => {
                write!(f, "{} requires a value", flag)
            }
            ConfigError::Io(e) => write!(f, "Failed to read config: {}", e),
            ConfigError::Parse(e) => write!(f, "Failed to parse config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(error: std::io::Error) -> Self {
        ConfigError::Io(error)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        ConfigError::Parse(error)
    }
}
