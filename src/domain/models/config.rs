use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "https://us.api.battle.net";
pub const DEFAULT_LOCALE: &str = "en_US";
pub const DEFAULT_UPDATE_TIMEOUT_SECS: u64 = 30;

/// Contents of `config/config.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Game installation directory
    pub wow_install: String,
    pub api_key: String,
    /// Request timeout for armory calls, in seconds
    pub update_timeout: u64,
    pub api_base_url: String,
    pub locale: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wow_install: String::new(),
            api_key: String::new(),
            update_timeout: DEFAULT_UPDATE_TIMEOUT_SECS,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults_for_missing_fields() {
        let config: Config =
            serde_json::from_str(r#"{"wowInstall":"C:/Games/WoW","apiKey":"k"}"#).expect("parse");

        assert_eq!(config.wow_install, "C:/Games/WoW");
        assert_eq!(config.api_key, "k");
        assert_eq!(config.update_timeout, DEFAULT_UPDATE_TIMEOUT_SECS);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }
}
