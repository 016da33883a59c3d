//! Deployment environment and the logging defaults tied to it

use serde::{Deserialize, Serialize};
use std::env;

/// Variables consulted, in order, to pick the environment
const ENVIRONMENT_VARS: [&str; 3] = ["ENVIRONMENT", "ENV", "RUST_ENV"];

/// Where the relay is running
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    /// Read the first set variable of `ENVIRONMENT`, `ENV`, `RUST_ENV`.
    /// Unset or unrecognised values mean development.
    pub fn from_env() -> Self {
        ENVIRONMENT_VARS
            .iter()
            .find_map(|key| env::var(key).ok())
            .and_then(|name| Self::from_name(&name))
            .unwrap_or_default()
    }

    /// Accepts the full names and their common short forms, any case
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Some(Self::Development),
            "staging" | "stage" | "test" => Some(Self::Staging),
            "production" | "prod" => Some(Self::Production),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }

    /// Dotenv file loaded ahead of the plain `.env`
    pub fn env_file(&self) -> String {
        format!(".env.{}", self.as_str())
    }

    pub fn is_production(&self) -> bool {
        *self == Self::Production
    }
}

/// Logger defaults; `RUST_LOG` still takes precedence at start-up
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default = "default_colored")]
    pub colored: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            colored: default_colored(),
        }
    }
}

impl LoggingConfig {
    /// Verbose, colored output while developing; plain `info` once deployed
    pub fn for_environment(environment: Environment) -> Self {
        let development = environment == Environment::Development;
        Self {
            level: String::from(if development { "debug" } else { "info" }),
            colored: development,
        }
    }
}

fn default_colored() -> bool {
    true
}
