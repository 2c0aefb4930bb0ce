//! Конфигурация клиента: встроенный TOML по умолчанию + `GET /config.toml`

use leptos::prelude::*;
use serde::Deserialize;
use std::cell::RefCell;

pub const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
port = 3000
prefix = "/api"

[ui]
page_size = 10
page_size_options = [10, 25, 50]

[cash]
tolerance = 0.01
currency = "S/"
"#;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiSection {
    /// Пусто - тот же хост, что и у страницы, порт `port`
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UiSection {
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CashSection {
    pub tolerance: f64,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    pub api: ApiSection,
    pub ui: UiSection,
    pub cash: CashSection,
}

fn default_port() -> u16 {
    3000
}

fn default_prefix() -> String {
    "/api".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        // Встроенный конфиг покрыт тестом и всегда разбирается
        Self::parse(DEFAULT_CONFIG).unwrap_or_else(|_| Self {
            api: ApiSection {
                base_url: String::new(),
                port: default_port(),
                prefix: default_prefix(),
            },
            ui: UiSection {
                page_size: 10,
                page_size_options: vec![10, 25, 50],
            },
            cash: CashSection {
                tolerance: 0.01,
                currency: "S/".to_string(),
            },
        })
    }
}

impl AppConfig {
    pub fn parse(text: &str) -> Result<Self, String> {
        let mut cfg: AppConfig = toml::from_str(text).map_err(|e| e.to_string())?;
        if cfg.ui.page_size == 0 {
            cfg.ui.page_size = 1;
        }
        if cfg.ui.page_size_options.is_empty() {
            cfg.ui.page_size_options = vec![cfg.ui.page_size];
        }
        if cfg.cash.tolerance < 0.0 {
            return Err("cash.tolerance must be >= 0".to_string());
        }
        Ok(cfg)
    }

    /// База API: `{origin}{prefix}` без завершающего `/`
    pub fn api_root(&self, page_protocol: &str, page_host: &str) -> String {
        let origin = if self.api.base_url.trim().is_empty() {
            format!("{}//{}:{}", page_protocol, page_host, self.api.port)
        } else {
            self.api.base_url.trim().trim_end_matches('/').to_string()
        };
        format!("{}{}", origin, self.api.prefix.trim_end_matches('/'))
    }
}

thread_local! {
    static CURRENT: RefCell<AppConfig> = RefCell::new(AppConfig::default());
}

/// Текущий конфиг для кода вне компонентов (HTTP pipeline)
pub fn current() -> AppConfig {
    CURRENT.with(|c| c.borrow().clone())
}

fn install(cfg: AppConfig) {
    CURRENT.with(|c| *c.borrow_mut() = cfg);
}

/// Загружает `/config.toml`; при любой ошибке остаётся конфиг по умолчанию
pub async fn load_config() -> AppConfig {
    let loaded = match gloo_net::http::Request::get("/config.toml").send().await {
        Ok(resp) if resp.ok() => match resp.text().await {
            Ok(text) => AppConfig::parse(&text).map_err(|e| format!("invalid config.toml: {e}")),
            Err(e) => Err(format!("config.toml read failed: {e}")),
        },
        Ok(resp) => Err(format!("config.toml not served (HTTP {})", resp.status())),
        Err(e) => Err(format!("config.toml request failed: {e}")),
    };
    let cfg = match loaded {
        Ok(cfg) => {
            log::info!("config.toml loaded");
            cfg
        }
        Err(e) => {
            log::warn!("{e}; using built-in defaults");
            AppConfig::default()
        }
    };
    install(cfg.clone());
    cfg
}

pub fn provide_config(cfg: AppConfig) {
    provide_context(StoredValue::new(cfg));
}

pub fn use_config() -> AppConfig {
    use_context::<StoredValue<AppConfig>>()
        .expect("AppConfig not found")
        .get_value()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let cfg = AppConfig::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(cfg.api.port, 3000);
        assert_eq!(cfg.api.prefix, "/api");
        assert_eq!(cfg.ui.page_size, 10);
        assert_eq!(cfg.ui.page_size_options, vec![10, 25, 50]);
        assert_eq!(cfg.cash.tolerance, 0.01);
        assert_eq!(cfg.cash.currency, "S/");
        assert_eq!(AppConfig::default(), cfg);
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        let text = DEFAULT_CONFIG.replace("page_size = 10", "page_size = 0");
        assert_eq!(AppConfig::parse(&text).unwrap().ui.page_size, 1);
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(AppConfig::parse("[api]\nport = \"x\"").is_err());
        let negative = DEFAULT_CONFIG.replace("tolerance = 0.01", "tolerance = -1.0");
        assert!(AppConfig::parse(&negative).is_err());
    }

    #[test]
    fn test_api_root() {
        let mut cfg = AppConfig::default();
        assert_eq!(cfg.api_root("http:", "localhost"), "http://localhost:3000/api");
        cfg.api.base_url = "https://pos.example.com/".to_string();
        assert_eq!(cfg.api_root("http:", "localhost"), "https://pos.example.com/api");
    }
}
