use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {name}: {value:?}")]
    InvalidNumber { name: &'static str, value: String },
    #[error("board dimensions must be at least 1")]
    ZeroDimension,
    #[error("mine density must lie in [0, 1), got {0}")]
    DensityOutOfRange(f64),
}

/// Parameters for a batch of automated games.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub width: usize,
    pub height: usize,
    pub density: f64,
    pub games: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            density: 0.2,
            games: 100,
        }
    }
}

impl BatchConfig {
    /// Parses `[width height density [games]]`, falling back to the default
    /// for anything not supplied.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        let mut config = Self::default();

        if let Some(raw) = args.first() {
            config.width = parse(raw, "width")?;
        }
        if let Some(raw) = args.get(1) {
            config.height = parse(raw, "height")?;
        }
        if let Some(raw) = args.get(2) {
            config.density = parse(raw, "density")?;
        }
        if let Some(raw) = args.get(3) {
            config.games = parse(raw, "games")?;
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimension);
        }
        if !(0.0..1.0).contains(&self.density) {
            return Err(ConfigError::DensityOutOfRange(self.density));
        }
        Ok(())
    }
}

fn parse<T: FromStr>(value: &str, name: &'static str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidNumber {
        name,
        value: value.to_string(),
    })
}
