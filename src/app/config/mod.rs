use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

pub mod user;

pub use user::{AiConfig, PlaybackConfig, UserConfig};

pub struct AppConfig;

impl AppConfig {
    pub fn get_config_dir() -> PathBuf {
        let base = dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .unwrap_or_else(|| PathBuf::from("."));
        let dir = base.join("moodwave");

        // Ensure it exists
        if !dir.exists() {
            let _ = fs::create_dir_all(&dir);
        }

        dir
    }

    pub fn get_config_path() -> PathBuf {
        Self::get_config_dir().join("config.toml")
    }

    pub fn load() -> UserConfig {
        Self::load_from(&Self::get_config_path())
    }

    /// Read `path`, writing defaults there first if it does not exist.
    /// Unreadable or invalid files fall back to defaults.
    pub fn load_from(path: &Path) -> UserConfig {
        if !path.exists() {
            let config = UserConfig::default();
            if let Ok(content) = toml::to_string_pretty(&config) {
                let _ = fs::write(path, content);
            }
            return config;
        }

        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "invalid config, using defaults");
                UserConfig::default()
            }),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unreadable config, using defaults");
                UserConfig::default()
            }
        }
    }

    pub fn default_toml() -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(&UserConfig::default())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = AppConfig::load_from(&path);
        assert_eq!(config, UserConfig::default());
        assert!(path.exists());
        assert_eq!(AppConfig::load_from(&path), config);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[ai]\nmodel = \"gemini-2.0-flash\"\n\n[playback]\ntick_interval_ms = 250\n").unwrap();

        let config = AppConfig::load_from(&path);
        assert_eq!(config.ai.model, "gemini-2.0-flash");
        assert_eq!(config.ai.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.playback.tick_interval_ms, 250);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_invalid_config_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "this is = = not toml").unwrap();
        assert_eq!(AppConfig::load_from(&path), UserConfig::default());
    }

    #[test]
    fn test_default_toml_round_trips() {
        let text = AppConfig::default_toml().unwrap();
        let parsed: UserConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, UserConfig::default());
    }
}
