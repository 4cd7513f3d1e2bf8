//! Application configuration.
//!
//! Loaded from a TOML file (`config.toml` by default, overridable via the
//! `WARDEN_CONFIG` env var). The signing secret can always be overridden with
//! `WARDEN_AUTH_SECRET`, which takes precedence over the file.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use std::{env, fs, path::PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP bind address, e.g. "0.0.0.0:8080"
    #[serde(default = "default_http_bind")]
    pub http_bind: String,

    /// gRPC bind address, e.g. "0.0.0.0:50051"
    #[serde(default = "default_grpc_bind")]
    pub grpc_bind: String,

    /// Path to the local SQLite file backing the user store.
    #[serde(default = "default_sqlite_path")]
    pub sqlite_path: String,
}

fn default_http_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_grpc_bind() -> String {
    "0.0.0.0:50051".to_string()
}

fn default_sqlite_path() -> String {
    "data/warden.sqlite".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_bind: default_http_bind(),
            grpc_bind: default_grpc_bind(),
            sqlite_path: default_sqlite_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Symmetric signing secret. Prefer setting env var `WARDEN_AUTH_SECRET`.
    #[serde(default)]
    pub secret: String,

    /// Credential lifetime as a humantime string, e.g. "24h" or "90m".
    #[serde(default = "default_token_ttl")]
    pub token_ttl: String,
}

fn default_token_ttl() -> String {
    "24h".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            token_ttl: default_token_ttl(),
        }
    }
}

impl AuthConfig {
    /// Resolve the signing secret: env `WARDEN_AUTH_SECRET` wins over the file.
    pub fn resolve_secret(&self) -> anyhow::Result<String> {
        let secret = env::var("WARDEN_AUTH_SECRET").unwrap_or_else(|_| self.secret.clone());
        if secret.trim().is_empty() {
            anyhow::bail!(
                "signing secret is empty (set WARDEN_AUTH_SECRET or config.toml [auth].secret)"
            );
        }
        Ok(secret)
    }

    /// Parse the configured credential lifetime.
    pub fn parse_token_ttl(&self) -> anyhow::Result<Duration> {
        humantime::parse_duration(&self.token_ttl)
            .map_err(|e| anyhow::anyhow!("invalid [auth].token_ttl {:?}: {e}", self.token_ttl))
    }
}

/// Load configuration, falling back to defaults when the file does not exist.
pub fn load_config() -> anyhow::Result<AppConfig> {
    let path = config_path();
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let raw = fs::read_to_string(&path)?;
    let cfg: AppConfig = toml::from_str(&raw)?;
    Ok(cfg)
}

fn config_path() -> PathBuf {
    if let Ok(p) = env::var("WARDEN_CONFIG") {
        return PathBuf::from(p);
    }
    PathBuf::from("config.toml")
}
