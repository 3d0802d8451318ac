//! Настройки контроллера игрока (inspector-style поля + RON на диске)
//!
//! Формат файла — RON, все поля опциональны (`#[serde(default)]`):
//! ```ron
//! (
//!     move_speed: 2.0,
//!     look_speed: 60.0,
//!     jump_power: 8.0,
//!     gravity: 9.81,
//!     jump_time_leniency: 0.1,
//! )
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::logger;

/// Ошибки загрузки/валидации настроек
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse controller settings: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("failed to serialize controller settings: {0}")]
    Serialize(#[from] ron::Error),
    #[error("invalid controller settings: {0}")]
    Invalid(&'static str),
}

/// Параметры движения игрока
///
/// Gravity хранится положительной (m/s² вниз), вычитается из velocity.y.
#[derive(Component, Resource, Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
#[serde(default)]
pub struct PlayerControllerSettings {
    /// Скорость движения (m/s)
    pub move_speed: f32,
    /// Скорость поворота (градусы/сек при полном отклонении look axis)
    pub look_speed: f32,
    /// Начальная вертикальная скорость прыжка (m/s)
    pub jump_power: f32,
    /// Сила гравитации (m/s²)
    pub gravity: f32,
    /// Окно после схода с земли, в котором прыжок ещё считается наземным (сек)
    pub jump_time_leniency: f32,
}

impl Default for PlayerControllerSettings {
    fn default() -> Self {
        Self {
            move_speed: 2.0,
            look_speed: 60.0,
            jump_power: 8.0,
            gravity: 9.81,
            jump_time_leniency: 0.1,
        }
    }
}

impl PlayerControllerSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            self.move_speed,
            self.look_speed,
            self.jump_power,
            self.gravity,
            self.jump_time_leniency,
        ];
        if fields.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::Invalid("all values must be finite"));
        }
        if fields.iter().any(|v| *v < 0.0) {
            return Err(ConfigError::Invalid("values must not be negative"));
        }
        if self.jump_power == 0.0 {
            return Err(ConfigError::Invalid("jump_power must be positive"));
        }
        Ok(())
    }

    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        let settings: Self = ron::from_str(source)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        let pretty = ron::ser::PrettyConfig::default();
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&source)
    }

    /// Загрузка с fallback на defaults (отсутствующий/битый файл не фатален)
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => {
                logger::log_info(&format!("Controller settings loaded from {}", path.display()));
                settings
            }
            Err(err) => {
                logger::log_warning(&format!("{}; using default controller settings", err));
                Self::default()
            }
        }
    }
}
