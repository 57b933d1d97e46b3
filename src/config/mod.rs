use crate::core::store::DEFAULT_HOURLY_RATE;
use crate::errors::{AppError, AppResult};
use crate::models::currency::{self, DEFAULT_SYMBOL};
use crate::models::locale::Locale;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// User preferences seeding a new session. Session data itself is never saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_rate: f64,
    pub default_currency: String,
    pub currencies: Vec<String>,
    pub locale: Locale,
    pub use_colors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_rate: DEFAULT_HOURLY_RATE,
            default_currency: DEFAULT_SYMBOL.to_string(),
            currencies: currency::suggested(),
            locale: Locale::default(),
            use_colors: true,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rslotpay")
        } else {
            let home = env::var("HOME")
                .map(PathBuf::from)
                .ok()
                .or_else(dirs::home_dir)
                .unwrap_or_else(|| PathBuf::from("."));
            home.join(".rslotpay")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rslotpay.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        debug!(path = %path.display(), ?cfg, "configuration loaded");
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the default configuration file, creating its directory.
    /// An existing file is left alone unless `force` is set.
    pub fn init(force: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let path = Self::config_file();
        if path.exists() && !force {
            debug!(path = %path.display(), "configuration file already present");
            return Ok(path);
        }

        let yaml = Self::default().to_yaml()?;
        let mut file = fs::File::create(&path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;

        Ok(path)
    }
}
