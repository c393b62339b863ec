use crate::error::ConfigError;
use directories::UserDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;

/// Target used when neither the CLI, env, nor config names a device.
pub const DEFAULT_UDID: &str = "booted";

const VALID_BACKENDS: &[&str] = &["simctl", "dry-run", "none", ""];

// ── Top-level config ──────────────────────────────────────────────

/// Read-only settings from `~/.idbctl/config.toml`. Nothing here is ever
/// written back; a missing file means defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,
    pub default_udid: Option<String>,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub client: ClientConfig,
}

// ── Device control client ─────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// "simctl" | "dry-run"
    #[serde(default = "default_backend")]
    pub backend: String,
    #[serde(default = "default_xcrun_path")]
    pub xcrun_path: String,
    /// Upper bound for each spawned simctl process
    #[serde(default = "default_command_timeout_secs")]
    pub command_timeout_secs: u64,
}

fn default_log_level() -> String {
    "warn".into()
}

fn default_backend() -> String {
    "simctl".into()
}

fn default_xcrun_path() -> String {
    "xcrun".into()
}

fn default_command_timeout_secs() -> u64 {
    60
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            xcrun_path: default_xcrun_path(),
            command_timeout_secs: default_command_timeout_secs(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let home =
            UserDirs::new().map_or_else(|| PathBuf::from("."), |u| u.home_dir().to_path_buf());
        Self {
            config_path: home.join(".idbctl").join("config.toml"),
            default_udid: None,
            log_level: default_log_level(),
            client: ClientConfig::default(),
        }
    }
}

impl Config {
    /// Load `~/.idbctl/config.toml`, apply env overrides, validate.
    pub fn load() -> Result<Self, ConfigError> {
        let home = UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .ok_or_else(|| ConfigError::Load("could not find home directory".into()))?;
        let mut config = Self::load_from(&home.join(".idbctl").join("config.toml"))?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parse the file at `path`, or fall back to defaults when it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self {
                config_path: path.to_path_buf(),
                ..Self::default()
            });
        }
        let contents = fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&contents)
            .map_err(|e| ConfigError::Load(format!("{}: {e}", path.display())))?;
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Apply environment variable overrides to config
    pub fn apply_env_overrides(&mut self) {
        // Target device: IDBCTL_UDID
        if let Ok(udid) = std::env::var("IDBCTL_UDID")
            && !udid.is_empty()
        {
            self.default_udid = Some(udid);
        }

        // Client backend: IDBCTL_BACKEND
        if let Ok(backend) = std::env::var("IDBCTL_BACKEND")
            && !backend.is_empty()
        {
            self.client.backend = backend;
        }

        // xcrun binary: IDBCTL_XCRUN
        if let Ok(xcrun) = std::env::var("IDBCTL_XCRUN")
            && !xcrun.is_empty()
        {
            self.client.xcrun_path = xcrun;
        }

        // Per-process timeout: IDBCTL_TIMEOUT_SECS
        if let Ok(raw) = std::env::var("IDBCTL_TIMEOUT_SECS")
            && let Ok(secs) = raw.parse::<u64>()
        {
            self.client.command_timeout_secs = secs;
        }

        // Log level: IDBCTL_LOG_LEVEL
        if let Ok(level) = std::env::var("IDBCTL_LOG_LEVEL")
            && level.parse::<Level>().is_ok()
        {
            self.log_level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.client.command_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "client.command_timeout_secs must be greater than 0".into(),
            ));
        }
        if self.client.xcrun_path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "client.xcrun_path must not be empty".into(),
            ));
        }
        if !VALID_BACKENDS.contains(&self.client.backend.as_str()) {
            return Err(ConfigError::UnknownBackend(self.client.backend.clone()));
        }
        if self.log_level.parse::<Level>().is_err() {
            return Err(ConfigError::Validation(format!(
                "unknown log_level \"{}\"",
                self.log_level
            )));
        }
        Ok(())
    }

    pub fn tracing_level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::WARN)
    }

    /// Pick the target: explicit flag, then configured default, then `booted`.
    pub fn resolve_udid(&self, flag: Option<&str>) -> String {
        flag.filter(|u| !u.is_empty())
            .or(self.default_udid.as_deref())
            .unwrap_or(DEFAULT_UDID)
            .to_string()
    }
}
