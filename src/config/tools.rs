use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

/// File-level tool sections. Each tool can be switched off individually;
/// credentials always come from the environment, never from the file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ToolsConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub weather: WeatherSection,
    #[serde(default)]
    pub news: NewsSection,
    #[serde(default)]
    pub stock: StockSection,
    #[serde(default)]
    pub messaging: MessagingSection,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            weather: WeatherSection::default(),
            news: NewsSection::default(),
            stock: StockSection::default(),
            messaging: MessagingSection::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WeatherSection {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub units: Option<String>,
}

impl Default for WeatherSection {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            units: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewsSection {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub page_size: Option<u32>,
}

impl Default for NewsSection {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            page_size: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StockSection {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl Default for StockSection {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MessagingSection {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl Default for MessagingSection {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
        }
    }
}

// Resolved per-provider settings, built once at startup. A provider whose
// credential is missing never gets one of these, so its tool is simply not
// registered.

#[derive(Debug, Clone)]
pub struct WeatherConfig {
    pub api_key: String,
    pub units: String,
}

#[derive(Debug, Clone)]
pub struct NewsConfig {
    pub api_key: String,
    pub page_size: u32,
}

#[derive(Debug, Clone)]
pub struct MessagingConfig {
    pub webhook_url: String,
}
