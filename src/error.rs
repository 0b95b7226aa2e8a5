use std::fmt;

#[derive(Debug)]
pub enum DeskmateError {
    ApiError {
        status: u16,
        message: String,
    },
    ConfigError(String),
    NetworkError(reqwest::Error),
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    YamlError(serde_yaml::Error),
    Other(String),
}

impl fmt::Display for DeskmateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeskmateError::ApiError { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            DeskmateError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            DeskmateError::NetworkError(e) => write!(f, "Network error: {}", e),
            DeskmateError::IoError(e) => write!(f, "IO error: {}", e),
            DeskmateError::JsonError(e) => write!(f, "JSON error: {}", e),
            DeskmateError::YamlError(e) => write!(f, "YAML error: {}", e),
            DeskmateError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for DeskmateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DeskmateError::NetworkError(e) => Some(e),
            DeskmateError::IoError(e) => Some(e),
            DeskmateError::JsonError(e) => Some(e),
            DeskmateError::YamlError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for DeskmateError {
    fn from(err: reqwest::Error) -> Self {
        DeskmateError::NetworkError(err)
    }
}

impl From<std::io::Error> for DeskmateError {
    fn from(err: std::io::Error) -> Self {
        DeskmateError::IoError(err)
    }
}

impl From<serde_json::Error> for DeskmateError {
    fn from(err: serde_json::Error) -> Self {
        DeskmateError::JsonError(err)
    }
}

impl From<serde_yaml::Error> for DeskmateError {
    fn from(err: serde_yaml::Error) -> Self {
        DeskmateError::YamlError(err)
    }
}

impl From<anyhow::Error> for DeskmateError {
    fn from(err: anyhow::Error) -> Self {
        DeskmateError::Other(err.to_string())
    }
}

impl From<String> for DeskmateError {
    fn from(msg: String) -> Self {
        DeskmateError::Other(msg)
    }
}

impl From<&str> for DeskmateError {
    fn from(msg: &str) -> Self {
        DeskmateError::Other(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DeskmateError>;
