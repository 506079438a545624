use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub list: ListConfig,
    pub notifications: NotificationConfig,
    pub dashboard: DashboardConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Empty means "same origin as the page".
    pub base_url: String,
    pub prefix: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ListConfig {
    pub page_size: u32,
    pub page_size_options: Vec<u32>,
    pub search_debounce_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct NotificationConfig {
    pub dismiss_after_ms: u32,
    pub max_visible: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    /// Length of the daily transaction series, in days.
    pub daily_days: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            list: ListConfig::default(),
            notifications: NotificationConfig::default(),
            dashboard: DashboardConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            prefix: "/api".to_string(),
        }
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            page_size_options: vec![10, 20, 50, 100],
            search_debounce_ms: 500,
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            dismiss_after_ms: 4000,
            max_visible: 5,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self { daily_days: 7 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn log_level(&self) -> log::Level {
        self.level.parse().unwrap_or(log::Level::Debug)
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
prefix = "/api"

[list]
page_size = 10
page_size_options = [10, 20, 50, 100]
search_debounce_ms = 500

[notifications]
dismiss_after_ms = 4000
max_visible = 5

[dashboard]
daily_days = 7

[logging]
level = "debug"
"#;

static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    match parse_config(DEFAULT_CONFIG, option_env!("MOBCASH_API_URL")) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Embedded configuration is invalid, using defaults: {}", e);
            AppConfig::default()
        }
    }
});

pub fn config() -> &'static AppConfig {
    &CONFIG
}

/// Parses a TOML configuration; a non-empty `api_url_override` (set at build
/// time through `MOBCASH_API_URL`) replaces `api.base_url`.
pub fn parse_config(raw: &str, api_url_override: Option<&str>) -> Result<AppConfig, toml::de::Error> {
    let mut config: AppConfig = toml::from_str(raw)?;
    if let Some(url) = api_url_override.map(str::trim).filter(|u| !u.is_empty()) {
        config.api.base_url = url.trim_end_matches('/').to_string();
    }
    if config.list.page_size == 0 {
        config.list.page_size = ListConfig::default().page_size;
    }
    if config.dashboard.daily_days == 0 {
        config.dashboard.daily_days = DashboardConfig::default().daily_days;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG, None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.list.search_debounce_ms, 500);
    }

    #[test]
    fn test_api_url_override() {
        let config = parse_config(DEFAULT_CONFIG, Some("https://api.mobcash.io/")).unwrap();
        assert_eq!(config.api.base_url, "https://api.mobcash.io");

        let config = parse_config(DEFAULT_CONFIG, Some("  ")).unwrap();
        assert_eq!(config.api.base_url, "");
    }

    #[test]
    fn test_partial_config_and_zero_page_size() {
        let config = parse_config("[list]\npage_size = 0\n[dashboard]\ndaily_days = 0\n", None).unwrap();
        assert_eq!(config.list.page_size, 10);
        assert_eq!(config.dashboard.daily_days, 7);
        assert_eq!(config.api.prefix, "/api");
    }

    #[test]
    fn test_log_level() {
        let mut logging = LoggingConfig::default();
        assert_eq!(logging.log_level(), log::Level::Debug);
        logging.level = "warn".into();
        assert_eq!(logging.log_level(), log::Level::Warn);
        logging.level = "chatty".into();
        assert_eq!(logging.log_level(), log::Level::Debug);
    }
}
