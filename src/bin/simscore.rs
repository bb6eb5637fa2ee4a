//! simscore -- standalone MCP similarity-scoring server.
//!
//! Usage: simscore [--max-input-chars <n>]

fn main() -> anyhow::Result<()> {
    // Initialize tracing to stderr so it does not interfere with MCP stdio.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = simscore::server::McpServerConfig::default();

    if let Some(raw) = std::env::args()
        .skip_while(|a| a != "--max-input-chars")
        .nth(1)
    {
        config.max_input_chars = raw
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid --max-input-chars value {raw:?}: {e}"))?;
    }

    simscore::run_mcp_server(config)
}
