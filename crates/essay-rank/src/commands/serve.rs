//! Serve command — run the HTTP API server.

use clap::Args;
use essay_rank_core::Config;
use essay_rank_core::config::{DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT};
use tracing::{debug, instrument};

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind (falls back to the configured host).
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (falls back to the configured port).
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Start the HTTP server and block until it exits.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(args: ServeArgs, config: Config) -> anyhow::Result<()> {
    let host = args
        .host
        .or_else(|| config.server_host.clone())
        .unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string());
    let port = args.port.or(config.server_port).unwrap_or(DEFAULT_SERVER_PORT);
    debug!(host = %host, port, "executing serve command");

    crate::server::serve(&host, port, config).await
}
