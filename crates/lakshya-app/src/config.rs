use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Current config version. Bump this when changing the shape.
const CURRENT_VERSION: u32 = 1;

const APP_DIR: &str = "com.lakshya.app";
const CONFIG_FILE: &str = "config.json";

/// Overrides [`AppConfig::data_dir`] when set.
pub const DATA_DIR_ENV: &str = "LAKSHYA_DATA_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Directory holding the diary, meals, and profile documents.
    pub data_dir: PathBuf,
    pub created_at: jiff::Timestamp,
}

impl AppConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_version: CURRENT_VERSION,
            data_dir: data_dir.into(),
            created_at: jiff::Timestamp::now(),
        }
    }

    /// The data directory after applying the `LAKSHYA_DATA_DIR` override.
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir_with_override(std::env::var_os(DATA_DIR_ENV))
    }

    /// `override_dir` wins unless it is absent or empty.
    pub fn data_dir_with_override(&self, override_dir: Option<OsString>) -> PathBuf {
        override_dir
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| self.data_dir.clone())
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join(APP_DIR))
}

fn default_data_dir() -> eyre::Result<PathBuf> {
    let base = dirs::data_dir().ok_or_else(|| eyre::eyre!("no data directory found"))?;
    Ok(base.join(APP_DIR))
}

pub fn load_config() -> eyre::Result<AppConfig> {
    load_config_from(&config_dir()?)
}

pub fn load_config_from(dir: &Path) -> eyre::Result<AppConfig> {
    let path = dir.join(CONFIG_FILE);
    let contents = std::fs::read_to_string(&path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    let config: AppConfig = serde_json::from_str(&contents)?;
    if config.config_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {} is newer than this build supports ({CURRENT_VERSION}). \
             Please update Lakshya.",
            config.config_version
        ));
    }
    Ok(config)
}

pub fn save_config(config: &AppConfig) -> eyre::Result<()> {
    save_config_to(&config_dir()?, config)
}

pub fn save_config_to(dir: &Path, config: &AppConfig) -> eyre::Result<()> {
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let path = dir.join(CONFIG_FILE);
    let json = serde_json::to_string_pretty(&stamped)?;

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

/// Load the config, writing a fresh one on first launch.
pub fn load_or_init() -> eyre::Result<AppConfig> {
    load_or_init_in(&config_dir()?, default_data_dir()?)
}

pub fn load_or_init_in(dir: &Path, default_data_dir: PathBuf) -> eyre::Result<AppConfig> {
    if dir.join(CONFIG_FILE).exists() {
        return load_config_from(dir);
    }
    let config = AppConfig::new(default_data_dir);
    save_config_to(dir, &config)?;
    tracing::info!(data_dir = %config.data_dir.display(), "created default config");
    Ok(config)
}
