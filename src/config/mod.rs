mod api;
mod tools;

use crate::cli::Args;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub use api::ApiConfig;
pub use tools::{
    MessagingConfig, MessagingSection, NewsConfig, NewsSection, StockSection, ToolsConfig,
    WeatherConfig, WeatherSection,
};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub verbose: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ModelConfig {
    #[serde(default)]
    pub default_model: Option<String>,
    #[serde(default)]
    pub system_prompt: Option<String>,
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub max_tokens: Option<u32>,
}

pub struct Config {
    pub api_key: String,
    pub api_endpoint: String,
    pub model: String,
    pub system_prompt: Option<String>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub request_timeout: u64,
    pub verbose: bool,
    pub tools_enabled: bool,
    pub weather: Option<WeatherConfig>,
    pub news: Option<NewsConfig>,
    pub stock_enabled: bool,
    pub messaging: Option<MessagingConfig>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FileConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub tools: ToolsConfig,
}

impl Config {
    pub fn from_env_and_args(args: &Args) -> Result<Self, String> {
        let file_config = FileConfig::load().unwrap_or_default();

        // The model credential is required from the environment; without it
        // there is nothing this program can do.
        let api_key = env::var("OPENROUTER_API_KEY")
            .map_err(|_| "OPENROUTER_API_KEY environment variable not set")?;

        // Endpoint: CLI args > env var > config file > default.
        let api_endpoint = args
            .api_endpoint
            .clone()
            .or_else(|| env::var("AI_API_ENDPOINT").ok())
            .or(file_config.api.endpoint.clone())
            .map(|endpoint| normalize_endpoint(&endpoint))
            .unwrap_or_else(|| "https://openrouter.ai/api/v1/chat/completions".to_string());

        let model = args
            .model
            .clone()
            .or_else(|| env::var("AI_MODEL").ok())
            .or(file_config.model.default_model.clone())
            .unwrap_or_else(|| "openai/gpt-4-turbo-preview".to_string());

        let system_prompt = env::var("AI_SYSTEM_PROMPT")
            .ok()
            .or(file_config.model.system_prompt.clone());

        let temperature = file_config.model.temperature.unwrap_or(0.7);
        let max_tokens = file_config.model.max_tokens.unwrap_or(1500);

        let request_timeout = env::var("AI_REQUEST_TIMEOUT")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .or(file_config.api.request_timeout)
            .unwrap_or(60);

        let verbose = args.verbose
            || env::var("AI_VERBOSE")
                .ok()
                .map(|v| v == "true")
                .or(file_config.session.verbose)
                .unwrap_or(false);

        let tools_enabled = if args.no_tools {
            false
        } else {
            match env::var("AI_TOOLS_ENABLED").ok() {
                Some(v) => matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"),
                None => file_config.tools.enabled,
            }
        };

        // Per-tool credentials. A missing credential disables that tool at
        // startup; it is never checked again per call.
        let weather = if file_config.tools.weather.enabled {
            env::var("OPENWEATHER_API_KEY").ok().map(|api_key| WeatherConfig {
                api_key,
                units: file_config
                    .tools
                    .weather
                    .units
                    .clone()
                    .unwrap_or_else(|| "metric".to_string()),
            })
        } else {
            None
        };

        let news = if file_config.tools.news.enabled {
            env::var("NEWS_API_KEY").ok().map(|api_key| NewsConfig {
                api_key,
                page_size: file_config.tools.news.page_size.unwrap_or(5),
            })
        } else {
            None
        };

        let stock_enabled = file_config.tools.stock.enabled;

        let messaging = if file_config.tools.messaging.enabled {
            env::var("MESSAGE_WEBHOOK_URL")
                .ok()
                .map(|webhook_url| MessagingConfig { webhook_url })
        } else {
            None
        };

        Ok(Config {
            api_key,
            api_endpoint,
            model,
            system_prompt,
            temperature,
            max_tokens,
            request_timeout,
            verbose,
            tools_enabled,
            weather,
            news,
            stock_enabled,
            messaging,
        })
    }

    pub fn current_date() -> String {
        chrono::Local::now().format("%A, %B %d, %Y").to_string()
    }
}

/// Accept a bare base URL, a `/v1` base, or a full chat-completions URL and
/// return the full chat-completions URL.
pub fn normalize_endpoint(endpoint: &str) -> String {
    if endpoint.ends_with("/chat/completions") {
        endpoint.to_string()
    } else if endpoint.ends_with("/v1") {
        format!("{}/chat/completions", endpoint)
    } else if endpoint.ends_with("/v1/") {
        format!("{}chat/completions", endpoint)
    } else {
        format!("{}/v1/chat/completions", endpoint.trim_end_matches('/'))
    }
}

impl FileConfig {
    pub fn load() -> Result<Self> {
        for path in Self::config_paths() {
            if path.exists() {
                return Self::parse(&path);
            }
        }
        Ok(FileConfig::default())
    }

    pub fn parse(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let extension = path.extension().and_then(|s| s.to_str());
        let config: FileConfig = if extension == Some("yaml") || extension == Some("yml") {
            serde_yaml::from_str(&contents)
                .with_context(|| format!("Failed to parse YAML config file: {}", path.display()))?
        } else {
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse JSON config file: {}", path.display()))?
        };

        Ok(config)
    }

    pub fn config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // Local override first, then the user's config directory.
        paths.push(PathBuf::from(".deskmate.yaml"));
        paths.push(PathBuf::from(".deskmate.yml"));
        paths.push(PathBuf::from(".deskmate.json"));

        if let Some(home_dir) = dirs::home_dir() {
            let config_dir = home_dir.join(".config").join("deskmate");
            paths.push(config_dir.join("deskmate.yaml"));
            paths.push(config_dir.join("deskmate.yml"));
            paths.push(config_dir.join("deskmate.json"));
        }

        paths
    }
}
