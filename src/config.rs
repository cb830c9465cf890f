use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub timing: TimingConfig,
    pub input: InputConfig,
    pub keymap: KeymapConfig,
    pub content: ContentConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TimingConfig {
    pub settle_delay_ms: u64,
    pub loading_tick_ms: u64,
    pub idle_step_ms: u64,
    pub animation_tick_ms: u64,
    pub input_poll_timeout_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: 600,
            loading_tick_ms: 40,
            idle_step_ms: 100,
            animation_tick_ms: 33,
            input_poll_timeout_ms: 16,
        }
    }
}

impl TimingConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn loading_tick(&self) -> Duration {
        Duration::from_millis(self.loading_tick_ms)
    }

    pub fn idle_step(&self) -> Duration {
        Duration::from_millis(self.idle_step_ms)
    }

    pub fn animation_tick(&self) -> Duration {
        Duration::from_millis(self.animation_tick_ms)
    }

    pub fn input_poll_timeout(&self) -> Duration {
        Duration::from_millis(self.input_poll_timeout_ms)
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct InputConfig {
    /// Horizontal drag distance, in terminal columns, that turns a page.
    pub drag_threshold: u32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { drag_threshold: 10 }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeymapConfig {
    pub preset: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            preset: "default".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ContentConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    pub path: Option<PathBuf>,
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: None,
            filter: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> AppResult<Self> {
        let Some(path) = default_config_path() else {
            return Ok(Self::default());
        };
        Self::load_from_path(path)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        if !path.is_file() {
            return Err(AppError::invalid_argument(format!(
                "config path is not a regular file: {}",
                path.display()
            )));
        }

        let raw = fs::read_to_string(path).map_err(|source| {
            AppError::io_with_context(source, format!("failed to read config: {}", path.display()))
        })?;
        let parsed = toml::from_str::<Self>(&raw).map_err(|source| {
            AppError::invalid_argument(format!(
                "failed to parse config {}: {source}",
                path.display()
            ))
        })?;
        Ok(parsed.sanitized())
    }

    fn sanitized(mut self) -> Self {
        self.timing.settle_delay_ms = self.timing.settle_delay_ms.max(1);
        self.timing.loading_tick_ms = self.timing.loading_tick_ms.max(1);
        self.timing.idle_step_ms = self.timing.idle_step_ms.max(1);
        self.timing.animation_tick_ms = self.timing.animation_tick_ms.max(1);
        self.timing.input_poll_timeout_ms = self.timing.input_poll_timeout_ms.max(1);
        self.input.drag_threshold = self.input.drag_threshold.max(1);
        if self.log.filter.trim().is_empty() {
            self.log.filter = LogConfig::default().filter;
        }
        self
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os("SCRAPBOOK_CONFIG_PATH")
        && !explicit.is_empty()
    {
        return Some(PathBuf::from(explicit));
    }

    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Some(PathBuf::from(xdg).join("scrapbook").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME")
        && !home.is_empty()
    {
        return Some(
            PathBuf::from(home)
                .join(".config")
                .join("scrapbook")
                .join("config.toml"),
        );
    }
    if let Some(appdata) = std::env::var_os("APPDATA")
        && !appdata.is_empty()
    {
        return Some(PathBuf::from(appdata).join("scrapbook").join("config.toml"));
    }
    None
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::process;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use super::Config;

    fn unique_temp_path(suffix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("scrapbook_config_{suffix}_{}_{}", process::id(), nanos));
        path
    }

    #[test]
    fn load_from_path_returns_defaults_for_missing_file() {
        let missing = unique_temp_path("missing.toml");
        let config = Config::load_from_path(&missing).expect("missing config should fallback");
        assert_eq!(config, Config::default());
        assert_eq!(config.timing.settle_delay(), Duration::from_millis(600));
        assert_eq!(config.timing.loading_tick(), Duration::from_millis(40));
    }

    #[test]
    fn load_from_path_applies_partial_overrides_and_sanitizes() {
        let path = unique_temp_path("custom.toml");
        fs::write(
            &path,
            r#"
            [timing]
            settle_delay_ms = 0
            loading_tick_ms = 5
            animation_tick_ms = 0

            [input]
            drag_threshold = 0

            [keymap]
            preset = "vim"

            [log]
            filter = "  "
            "#,
        )
        .expect("config file should be written");

        let config = Config::load_from_path(&path).expect("config should parse");
        assert_eq!(config.timing.settle_delay_ms, 1);
        assert_eq!(config.timing.loading_tick_ms, 5);
        assert_eq!(config.timing.idle_step_ms, 100);
        assert_eq!(config.timing.animation_tick_ms, 1);
        assert_eq!(config.input.drag_threshold, 1);
        assert_eq!(config.keymap.preset, "vim");
        assert_eq!(config.log.filter, "info");
        assert_eq!(config.content.path, None);

        fs::remove_file(&path).expect("config file should be removed");
    }

    #[test]
    fn load_from_path_rejects_directories_and_bad_toml() {
        assert!(Config::load_from_path(std::env::temp_dir()).is_err());

        let path = unique_temp_path("broken.toml");
        fs::write(&path, "[timing\nsettle_delay_ms = ").expect("config file should be written");
        assert!(Config::load_from_path(&path).is_err());
        fs::remove_file(&path).expect("config file should be removed");
    }
}
