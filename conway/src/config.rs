// config.rs - Construction-time settings for the field, grid and host loop

use crate::error::ConfigError;

pub const FIELD_WIDTH: u32 = 800;       // Field size in pixels
pub const FIELD_HEIGHT: u32 = 600;
pub const CELL_SIZE: u32 = 10;          // Edge of one cell in pixels
pub const RANDOM_LIFE: f64 = 0.1;       // Chance of a cell being born on randomize
pub const TICK_RATE: u32 = 60;          // Host ticks per second

pub const ENV_CELL_SIZE: &str = "CONWAY_CELL_SIZE";
pub const ENV_RANDOM_LIFE: &str = "CONWAY_RANDOM_LIFE";
pub const ENV_SEED: &str = "CONWAY_SEED";

/// Settings supplied once at startup. Nothing here changes while running.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub field_width: u32,
    pub field_height: u32,
    pub cell_size: u32,
    pub random_life: f64,
    pub tick_rate: u32,
    /// Fixed RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            cell_size: CELL_SIZE,
            random_life: RANDOM_LIFE,
            tick_rate: TICK_RATE,
            seed: None,
        }
    }
}

impl Config {
    /// Defaults overridden by `CONWAY_*` environment variables, validated.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup(ENV_CELL_SIZE) {
            config.cell_size = parse(ENV_CELL_SIZE, &value)?;
        }
        if let Some(value) = lookup(ENV_RANDOM_LIFE) {
            config.random_life = parse(ENV_RANDOM_LIFE, &value)?;
        }
        if let Some(value) = lookup(ENV_SEED) {
            config.seed = Some(parse(ENV_SEED, &value)?);
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.cols() == 0 || self.rows() == 0 {
            return Err(ConfigError::EmptyField {
                width: self.field_width,
                height: self.field_height,
                cell_size: self.cell_size,
            });
        }
        if !(0.0..=1.0).contains(&self.random_life) {
            return Err(ConfigError::Probability(self.random_life));
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::TickRate);
        }
        Ok(())
    }

    pub fn cols(&self) -> usize {
        self.field_width.checked_div(self.cell_size).unwrap_or(0) as usize
    }

    pub fn rows(&self) -> usize {
        self.field_height.checked_div(self.cell_size).unwrap_or(0) as usize
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Parse {
        key,
        value: value.to_string(),
    })
}
