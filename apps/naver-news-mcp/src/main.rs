//! MCP server exposing Naver news search and article body extraction.
//!
//! Serves `search_news` and `search_news_detail` over stdio (default) or streamable
//! HTTP. Settings come from the environment and can be overridden by flags.

mod config;

use std::collections::HashSet;
use std::fs::OpenOptions;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use naver_news_async::NaverConfig;
use naver_news_async::config::Config;
use news_tools::NewsTools;
use news_tools_mcp::{OutputMode, RegistryServer, ServiceExt, stdio};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{ServerConfig, Transport};

#[derive(Parser, Debug)]
#[command(name = "naver-news-mcp")]
#[command(about = "MCP server for Naver news search with article body extraction", version)]
struct Args {
    /// Transport: stdio | http (default: MCP_TRANSPORT, else stdio)
    #[arg(long, value_enum)]
    transport: Option<Transport>,

    /// Bind host for the http transport (default: MCP_HOST, else 127.0.0.1)
    #[arg(long)]
    host: Option<String>,

    /// Bind port for the http transport (default: MCP_PORT, else 8000)
    #[arg(long)]
    port: Option<u16>,

    /// Comma-separated allowlist. Example: search_news
    #[arg(long, value_name = "NAMES")]
    allow: Option<String>,

    /// List available tools and exit
    #[arg(long)]
    list_tools: bool,

    /// Output mode: text | structured (default: text)
    #[arg(long, value_parser = ["text", "structured"])]
    output: Option<String>,
}

fn parse_allowlist(raw: Option<&str>) -> Option<HashSet<String>> {
    let set: HashSet<String> = raw?
        .split(',')
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect();
    (!set.is_empty()).then_some(set)
}

fn output_mode(raw: Option<&str>) -> OutputMode {
    match raw {
        Some("structured") => OutputMode::Structured,
        _ => OutputMode::Text,
    }
}

fn init_logging(cfg: &ServerConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cfg.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer();

    // stdout belongs to the stdio transport
    if let Some(path) = &cfg.log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open LOG_FILE {}", path.display()))?;
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.with_ansi(false).with_writer(Arc::new(file)))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.with_writer(std::io::stderr))
            .init();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut cfg = ServerConfig::from_env()?;
    if let Some(transport) = args.transport {
        cfg.transport = transport;
    }
    if let Some(host) = args.host {
        cfg.host = host;
    }
    if let Some(port) = args.port {
        cfg.port = port;
    }
    init_logging(&cfg)?;

    // Install the rustls CryptoProvider before any HTTP clients are created.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let naver = NaverConfig::new();
    let registry = news_tools::build_registry(Arc::new(NewsTools::with_config(naver.clone())));

    if args.list_tools {
        let names = registry.list_names();
        eprintln!("Available tools ({}):", names.len());
        for n in names {
            eprintln!("  - {n}");
        }
        return Ok(());
    }

    naver.validate_auth().context(
        "Naver API credentials are required: set X_NAVER_CLIENT_ID and X_NAVER_CLIENT_SECRET",
    )?;

    let mut server = RegistryServer::new(Arc::new(registry))
        .with_info(&cfg.name, env!("CARGO_PKG_VERSION"))
        .with_output_mode(output_mode(args.output.as_deref()));
    if let Some(allow) = parse_allowlist(args.allow.as_deref()) {
        server = server.with_allowlist(allow);
    }

    info!(
        name = %cfg.name,
        transport = ?cfg.transport,
        tools = ?server.effective_tool_names(),
        "starting naver-news-mcp"
    );

    match cfg.transport {
        Transport::Stdio => serve_stdio(server).await,
        Transport::Http => serve_http(server, &cfg.host, cfg.port).await,
    }
}

async fn serve_stdio(server: RegistryServer) -> anyhow::Result<()> {
    let service = server.serve(stdio()).await?;
    service.waiting().await?;
    Ok(())
}

async fn serve_http(server: RegistryServer, host: &str, port: u16) -> anyhow::Result<()> {
    use rmcp::transport::StreamableHttpServerConfig;
    use rmcp::transport::streamable_http_server::{
        session::local::LocalSessionManager, tower::StreamableHttpService,
    };

    let service = StreamableHttpService::new(
        move || Ok(server.clone()),
        LocalSessionManager::default().into(),
        StreamableHttpServerConfig::default(),
    );
    let router = axum::Router::new().nest_service("/mcp", service);

    let listener = tokio::net::TcpListener::bind((host, port))
        .await
        .with_context(|| format!("failed to bind {host}:{port}"))?;
    info!(addr = %listener.local_addr()?, "serving MCP over streamable HTTP at /mcp");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    info!("server stopped");
    Ok(())
}
