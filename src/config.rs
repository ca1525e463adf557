/// Tunable game constants.
///
/// Every field has a default, so a RON override file only needs to name the
/// values it changes, e.g. `(wave_cap: 8, speed_step: 2)`.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

/// Environment variable naming an optional RON config file.
pub const CONFIG_ENV: &str = "SHOOTER_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // Field
    pub width: i32,
    pub height: i32,
    pub fps: u32,

    // Ship
    pub ship_width: i32,
    pub ship_height: i32,
    pub ship_start_y: i32,
    pub ship_speed: i32,
    pub lives: i32,

    // Bullets
    pub bullet_width: i32,
    pub bullet_height: i32,
    pub bullet_speed: i32,
    pub max_bullets: usize,

    // Enemies and waves
    pub enemy_width: i32,
    pub enemy_height: i32,
    pub enemy_speed: i32,
    pub enemy_drop: i32,
    pub wave_step: u32,
    pub wave_cap: u32,
    pub speed_step: i32,
    pub layout_left: i32,
    pub layout_top: i32,
    pub layout_spacing: i32,
    pub layout_row_spacing: i32,

    // Presentation
    pub sound: bool,
    pub stars: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: 400,
            height: 600,
            fps: 60,

            ship_width: 40,
            ship_height: 40,
            ship_start_y: 500,
            ship_speed: 6,
            lives: 5,

            bullet_width: 4,
            bullet_height: 10,
            bullet_speed: 6,
            max_bullets: 3,

            enemy_width: 33,
            enemy_height: 24,
            enemy_speed: 3,
            enemy_drop: 30,
            wave_step: 2,
            wave_cap: 12,
            speed_step: 1,
            layout_left: 5,
            layout_top: 40,
            layout_spacing: 40,
            layout_row_spacing: 30,

            sound: true,
            stars: 40,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) RON document and validate it.
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_ron_str(&text)
    }

    /// Load from the file named by `SHOOTER_CONFIG`, or fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    /// Top edge of the ship's movement zone (the horizontal border line).
    pub fn border_y(&self) -> i32 {
        self.height / 3 - 3
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_micros(1_000_000 / u64::from(self.fps))
    }

    /// How many enemies fit side by side in one layout row.
    pub fn layout_columns(&self) -> i32 {
        ((self.width - self.layout_left - self.enemy_width) / self.layout_spacing + 1).max(1)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("ship_width", self.ship_width),
            ("ship_height", self.ship_height),
            ("ship_speed", self.ship_speed),
            ("bullet_width", self.bullet_width),
            ("bullet_height", self.bullet_height),
            ("bullet_speed", self.bullet_speed),
            ("enemy_width", self.enemy_width),
            ("enemy_height", self.enemy_height),
            ("enemy_speed", self.enemy_speed),
            ("layout_spacing", self.layout_spacing),
        ];
        for (name, value) in positive {
            if value <= 0 {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }
        if self.fps == 0 {
            return Err(ConfigError::Invalid("fps must be positive".into()));
        }
        if self.max_bullets == 0 {
            return Err(ConfigError::Invalid("max_bullets must be at least 1".into()));
        }
        if self.wave_step == 0 || self.wave_cap < self.wave_step {
            return Err(ConfigError::Invalid(format!(
                "wave_cap ({}) must be at least wave_step ({}) and wave_step non-zero",
                self.wave_cap, self.wave_step
            )));
        }
        if self.ship_width > self.width || self.enemy_width + self.layout_left > self.width {
            return Err(ConfigError::Invalid("entities wider than the field".into()));
        }
        let border = self.border_y();
        if self.ship_start_y < border || self.ship_start_y > self.height - self.ship_height {
            return Err(ConfigError::Invalid(format!(
                "ship_start_y must lie within {}..={}",
                border,
                self.height - self.ship_height
            )));
        }
        if self.layout_left < 0 || self.layout_top < 0 || self.enemy_drop < 0 {
            return Err(ConfigError::Invalid("layout offsets must be non-negative".into()));
        }
        Ok(())
    }
}
