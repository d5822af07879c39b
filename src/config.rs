use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Process configuration, read once from the environment at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub ollama_host: String,
    pub ollama_port: u16,
    pub default_model: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            ollama_host: env_or("OLLAMA_HOST", "ollama"),
            ollama_port: env_parse("OLLAMA_PORT", 11434),
            default_model: env_or("DEFAULT_MODEL", "gemma2:9b"),
            port: env_parse("PORT", 8000),
        }
    }

    pub fn generate_url(&self) -> String {
        format!(
            "http://{}:{}/api/generate",
            self.ollama_host, self.ollama_port
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ollama_host: "ollama".to_string(),
            ollama_port: 11434,
            default_model: "gemma2:9b".to_string(),
            port: 8000,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
