use serde::{Deserialize, Serialize};

use crate::mood::gemini::{DEFAULT_ENDPOINT, DEFAULT_MODEL};

/// User-editable configuration (ReadOnly by App after load)
/// stored in `config.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default)]
    pub keys: crate::app::keys::KeyConfig,
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub playback: PlaybackConfig,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            keys: crate::app::keys::KeyConfig::default(),
            ai: AiConfig::default(),
            playback: PlaybackConfig::default(),
            log_level: default_log_level(),
        }
    }
}

/// Mood DJ backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub endpoint: String,
    pub model: String,
    /// Environment variable holding the key
    pub api_key_env: String,
    /// Inline key; takes precedence over the environment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
        }
    }
}

impl AiConfig {
    /// Inline key, then `api_key_env`, then the generic `API_KEY`.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    fn resolve_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| lookup(&self.api_key_env))
            .or_else(|| lookup("API_KEY"))
            .filter(|k| !k.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Progress clock period
    pub tick_interval_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
        }
    }
}

impl PlaybackConfig {
    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_interval_ms.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_key_wins() {
        let ai = AiConfig {
            api_key: Some("inline".to_string()),
            ..AiConfig::default()
        };
        assert_eq!(ai.resolve_with(|_| Some("env".to_string())).as_deref(), Some("inline"));
    }

    #[test]
    fn test_named_env_then_generic() {
        let ai = AiConfig::default();
        let named = ai.resolve_with(|name| match name {
            "GEMINI_API_KEY" => Some("gemini".to_string()),
            "API_KEY" => Some("generic".to_string()),
            _ => None,
        });
        assert_eq!(named.as_deref(), Some("gemini"));

        let generic = ai.resolve_with(|name| (name == "API_KEY").then(|| "generic".to_string()));
        assert_eq!(generic.as_deref(), Some("generic"));
    }

    #[test]
    fn test_blank_key_is_none() {
        let ai = AiConfig {
            api_key: Some("  ".to_string()),
            ..AiConfig::default()
        };
        assert!(ai.resolve_with(|_| None).is_none());
    }

    #[test]
    fn test_tick_interval_never_zero() {
        let playback = PlaybackConfig { tick_interval_ms: 0 };
        assert_eq!(playback.tick_interval().as_millis(), 1);
    }
}
