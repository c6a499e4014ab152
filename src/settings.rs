use config::{Config, ConfigError, Environment, File, FileFormat};
use scatter_map::{MapError, MapRenderer, OutOfRange};
use scatter_sampling::{DEFAULT_MAX_ATTEMPTS, PointSampler, Region, SamplingError};
use serde::Deserialize;
use tracing::{error, info};

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
/// Environment variable naming an alternative config file.
pub const CONFIG_PATH_ENV: &str = "CHEST_SCATTER_CONFIG";
/// Prefix for per-field environment overrides, e.g. `CHEST_SCATTER_MIN_DISTANCE`.
const ENV_PREFIX: &str = "CHEST_SCATTER";

/// Run parameters. Fields missing from every source keep the reference values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub count: usize,
    pub x_min: i64,
    pub x_max: i64,
    pub z_min: i64,
    pub z_max: i64,
    /// Points must be strictly farther apart than this.
    pub min_distance: u64,
    pub max_attempts: usize,
    pub grid_width: usize,
    pub grid_height: usize,
    pub offset_x: i64,
    pub offset_z: i64,
    pub out_of_range: OutOfRange,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            count: 23,
            x_min: -10_000,
            x_max: 10_000,
            z_min: -10_000,
            z_max: 10_000,
            min_distance: 2500,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            grid_width: 25,
            grid_height: 25,
            offset_x: 10_000,
            offset_z: 10_000,
            out_of_range: OutOfRange::Clamp,
        }
    }
}

impl Settings {
    pub fn sampler(&self) -> Result<PointSampler, SamplingError> {
        let region = Region::new(self.x_min, self.x_max, self.z_min, self.z_max)?;
        Ok(PointSampler::new(region, self.min_distance).with_max_attempts(self.max_attempts))
    }

    pub fn renderer(&self) -> Result<MapRenderer, MapError> {
        Ok(
            MapRenderer::new(self.grid_width, self.grid_height, self.offset_x, self.offset_z)?
                .with_policy(self.out_of_range),
        )
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).try_parsing(true)
}

/// Loads settings from the config file (optional) and `CHEST_SCATTER_*` variables.
pub fn load_settings() -> Result<Settings, ConfigError> {
    let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    info!("Attempting to load configuration from {}", path);

    let settings = Config::builder()
        .add_source(File::new(&path, FileFormat::Toml).required(false))
        .add_source(environment())
        .build()
        .and_then(|c| c.try_deserialize::<Settings>());

    match settings {
        Ok(settings) => {
            info!("Successfully loaded configuration: {:?}", settings);
            Ok(settings)
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            Err(e)
        }
    }
}
