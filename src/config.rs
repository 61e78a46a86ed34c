use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::logic::grid::DEFAULT_CELL_SIZE;

pub const DATA_DIR_VAR: &str = "GARDENGUIDE_DATA_DIR";
pub const GEOLOCATION_TIMEOUT_VAR: &str = "GARDENGUIDE_GEOLOCATION_TIMEOUT_SECS";
pub const CELL_SIZE_VAR: &str = "GARDENGUIDE_CELL_SIZE";

pub const DEFAULT_DATA_DIR: &str = "./gardenguide-data";
pub const DEFAULT_GEOLOCATION_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory of the file-backed store.
    pub data_dir: PathBuf,
    /// How long to wait for a position before giving up.
    pub geolocation_timeout: Duration,
    /// Pixel size of one grid cell.
    pub cell_size: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            geolocation_timeout: DEFAULT_GEOLOCATION_TIMEOUT,
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

impl Config {
    /// Reads the process environment, after loading `.env` if there is one.
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            log::debug!("loaded environment from {}", path.display());
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from any variable source. Bad values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let data_dir = lookup(DATA_DIR_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);
        let geolocation_timeout = parse_var::<u64>(&lookup, GEOLOCATION_TIMEOUT_VAR)
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(defaults.geolocation_timeout);
        let cell_size = parse_var::<f64>(&lookup, CELL_SIZE_VAR)
            .filter(|size| size.is_finite() && *size > 0.0)
            .unwrap_or(defaults.cell_size);
        Self {
            data_dir,
            geolocation_timeout,
            cell_size,
        }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<T> {
    let raw = lookup(name)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("ignoring {name}={raw}: not a valid value");
            None
        }
    }
}
