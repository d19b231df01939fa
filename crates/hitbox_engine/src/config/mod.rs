//! Configuration system
//!
//! Configuration structs are plain serde types. Anything implementing [`Config`]
//! can be loaded from or saved to TOML or RON, picked by file extension.

pub use serde::{Serialize, Deserialize};

/// Smooth parameter steps fire on this period unless configured otherwise
pub const DEFAULT_SMOOTH_STEP_PERIOD_MS: u32 = 100;

/// Steps fired per second by an interval of `period_ms` (a zero period counts as 1 ms)
#[allow(clippy::cast_possible_truncation)]
pub fn steps_per_second(period_ms: u32) -> f32 {
    (1000.0 / f64::from(period_ms.max(1))) as f32
}

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Load configuration from file, falling back to defaults if the file does not exist
    fn load_or_default(path: &str) -> Result<Self, ConfigError> {
        if std::path::Path::new(path).exists() {
            Self::load_from_file(path)
        } else {
            log::debug!("No config at {path}, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Values that parsed but make no sense
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// # Hitbox Layer Configuration
///
/// Settings shared by a hitbox session: logging filter and the cadence of
/// smooth parameter animation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HitboxConfig {
    /// `env_logger` filter string
    pub log_level: String,
    /// Period between smooth parameter steps, in milliseconds
    pub smooth_step_period_ms: u32,
}

impl HitboxConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            smooth_step_period_ms: DEFAULT_SMOOTH_STEP_PERIOD_MS,
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set the smooth step period
    pub fn with_smooth_step_period_ms(mut self, period_ms: u32) -> Self {
        self.smooth_step_period_ms = period_ms;
        self
    }

    /// Number of smooth steps per second at the configured period
    pub fn smooth_steps_per_second(&self) -> f32 {
        steps_per_second(self.smooth_step_period_ms)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.smooth_step_period_ms == 0 {
            return Err(ConfigError::Invalid(
                "smooth_step_period_ms must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for HitboxConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for HitboxConfig {}
