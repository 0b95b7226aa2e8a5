use crate::config::Config;
use colored::Colorize;
use jsonschema::{Draft, JSONSchema};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

use super::{messaging, news, stock, weather};

/// Why a dispatch never reached the tool: the two protocol-level failures
/// the model can cause. Execution-time failures are the tool's own business
/// and come back inside its result payload.
#[derive(Debug)]
pub enum DispatchError {
    UnknownTool(String),
    InvalidArguments(String),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::UnknownTool(name) => write!(f, "unknown tool '{}'", name),
            DispatchError::InvalidArguments(msg) => write!(f, "invalid arguments: {}", msg),
        }
    }
}

impl std::error::Error for DispatchError {}

pub type ToolHandler =
    Box<dyn Fn(Value) -> Pin<Box<dyn Future<Output = Value> + Send>> + Send + Sync>;

pub struct Tool {
    pub name: String,
    pub description: String,
    pub parameters: Value,
    pub handler: ToolHandler,
}

pub struct ToolRegistry {
    tools: HashMap<String, Tool>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Build the registry from resolved configuration. A tool whose
    /// credential was absent at startup is skipped here and never consulted
    /// again.
    pub fn from_config(config: &Config) -> Self {
        let mut registry = Self::new();

        match &config.weather {
            Some(cfg) => registry.register(weather::tool(cfg.clone())),
            None => eprintln!(
                "{}",
                "[tools] get_weather not registered (OPENWEATHER_API_KEY not set or disabled)"
                    .dimmed()
            ),
        }

        match &config.news {
            Some(cfg) => registry.register(news::tool(cfg.clone())),
            None => eprintln!(
                "{}",
                "[tools] search_news not registered (NEWS_API_KEY not set or disabled)".dimmed()
            ),
        }

        if config.stock_enabled {
            registry.register(stock::tool());
        }

        match &config.messaging {
            Some(cfg) => registry.register(messaging::tool(cfg.clone())),
            None => eprintln!(
                "{}",
                "[tools] send_message not registered (MESSAGE_WEBHOOK_URL not set or disabled)"
                    .dimmed()
            ),
        }

        registry
    }

    pub fn register(&mut self, tool: Tool) {
        self.tools.insert(tool.name.clone(), tool);
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(|n| n.as_str()).collect();
        names.sort();
        names
    }

    /// The `tools` array advertised to the model, built once per request
    /// from the registered schemas.
    pub fn descriptors(&self) -> Vec<Value> {
        self.tools
            .values()
            .map(|tool| {
                json!({
                    "type": "function",
                    "function": {
                        "name": tool.name,
                        "description": tool.description,
                        "parameters": tool.parameters,
                    }
                })
            })
            .collect()
    }

    /// Look up a tool by name and run it against a raw JSON argument string.
    ///
    /// The handler only runs once the arguments have parsed and passed the
    /// tool's schema; whatever it returns (success payload or embedded error
    /// payload) is handed back untouched.
    pub async fn dispatch(
        &self,
        name: &str,
        raw_arguments: &str,
    ) -> Result<Value, DispatchError> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| DispatchError::UnknownTool(name.to_string()))?;

        let arguments: Value = serde_json::from_str(raw_arguments).map_err(|e| {
            DispatchError::InvalidArguments(format!("arguments are not valid JSON: {}", e))
        })?;

        validate_arguments(&tool.parameters, &arguments)?;

        Ok((tool.handler)(arguments).await)
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_arguments(schema_json: &Value, arguments: &Value) -> Result<(), DispatchError> {
    let schema = JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(schema_json)
        .map_err(|e| DispatchError::InvalidArguments(format!("invalid tool schema: {}", e)))?;

    if let Err(errors) = schema.validate(arguments) {
        let messages: Vec<String> = errors
            .map(|e| format!("{}: {}", e.instance_path, e))
            .collect();
        return Err(DispatchError::InvalidArguments(messages.join("; ")));
    }

    Ok(())
}
