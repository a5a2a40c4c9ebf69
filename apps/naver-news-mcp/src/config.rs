//! Server settings read from the environment at startup.

use std::path::PathBuf;

use anyhow::{Context, bail};

/// Transport the MCP server speaks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Transport {
    /// JSON-RPC over stdin/stdout.
    #[default]
    Stdio,
    /// Streamable HTTP under `/mcp`.
    #[value(alias = "sse")]
    Http,
}

impl Transport {
    fn parse(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stdio" => Ok(Self::Stdio),
            "http" | "sse" | "streamable-http" => Ok(Self::Http),
            other => bail!("unknown MCP_TRANSPORT '{other}' (expected stdio or http)"),
        }
    }
}

/// Settings for the server process. Search API credentials are read separately by
/// `naver_news_async::NaverConfig`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub name: String,
    pub host: String,
    pub port: u16,
    pub transport: Transport,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "naver-news-mcp".to_string(),
            host: "127.0.0.1".to_string(),
            port: 8000,
            transport: Transport::Stdio,
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from a variable lookup. Unset or blank variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut cfg = Self::default();

        if let Some(name) = get("MCP_SERVER_NAME") {
            cfg.name = name;
        }
        if let Some(host) = get("MCP_HOST") {
            cfg.host = host;
        }
        if let Some(port) = get("MCP_PORT") {
            cfg.port = port
                .trim()
                .parse()
                .with_context(|| format!("invalid MCP_PORT '{port}'"))?;
        }
        if let Some(transport) = get("MCP_TRANSPORT") {
            cfg.transport = Transport::parse(&transport)?;
        }
        cfg.log_file = get("LOG_FILE").map(PathBuf::from);
        if let Some(level) = get("LOG_LEVEL") {
            cfg.log_level = level.trim().to_ascii_lowercase();
        }
        Ok(cfg)
    }
}
