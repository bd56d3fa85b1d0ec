//! `vitrina-api` binary entrypoint.
//!
//! Loads configuration from environment variables and starts the HTTP
//! server over the seed catalog.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

use anyhow::Result;

use vitrina_api::config::Config;
use vitrina_api::server::Server;
use vitrina_catalog::observability::{init_logging, LogFormat};
use vitrina_rest::metrics::init_metrics;

fn choose_log_format(config: &Config) -> LogFormat {
    if config.debug {
        LogFormat::Pretty
    } else {
        LogFormat::Json
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    init_logging(choose_log_format(&config));
    init_metrics();

    tracing::info!(port = config.http_port, debug = config.debug, "starting vitrina-api");

    let server = Server::new(config);
    server.serve().await?;
    Ok(())
}
