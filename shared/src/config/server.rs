//! Server configuration module

use serde::{Deserialize, Serialize};
use std::env;

/// Port the relay listens on unless `SERVER_PORT` says otherwise
pub const DEFAULT_PORT: u16 = 5002;

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,

    /// Keep-alive timeout in seconds
    #[serde(default = "default_keep_alive")]
    pub keep_alive: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: DEFAULT_PORT,
            workers: 0,  // Use all CPU cores
            keep_alive: default_keep_alive(),
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Apply `SERVER_HOST`, `SERVER_PORT` and `SERVER_WORKERS` overrides.
    /// Unparseable values leave the current setting untouched.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(host) = env::var("SERVER_HOST") {
            self.host = host;
        }
        if let Some(port) = env::var("SERVER_PORT").ok().and_then(|v| v.parse().ok()) {
            self.port = port;
        }
        if let Some(workers) = env::var("SERVER_WORKERS").ok().and_then(|v| v.parse().ok()) {
            self.workers = workers;
        }
        self
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Allowed origins; `*` allows any origin
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Max age for preflight cache in seconds
    #[serde(default = "default_max_age")]
    pub max_age: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![],
            max_age: default_max_age(),
        }
    }
}

impl CorsConfig {
    /// Create a permissive CORS configuration for development
    pub fn development() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
            max_age: default_max_age(),
        }
    }

    /// Apply `ALLOWED_ORIGINS` (comma separated) and `CORS_MAX_AGE` overrides
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(origins) = env::var("ALLOWED_ORIGINS") {
            self.allowed_origins = parse_origins(&origins);
        }
        if let Some(max_age) = env::var("CORS_MAX_AGE").ok().and_then(|v| v.parse().ok()) {
            self.max_age = max_age;
        }
        self
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn default_keep_alive() -> u64 {
    75  // 75 seconds
}

fn default_max_age() -> usize {
    3600
}
