use anyhow::{Context, Result};
use calculator::{config::Config, service, setup_logging};
use tracing::error;

#[tokio::main]
async fn main() -> Result<()> {
    let args = service::parse_args();

    let config = Config::from_args(&args).context("Invalid configuration")?;

    setup_logging(config.debug)?;

    service::Server::new(config)
        .run()
        .await
        .inspect_err(|e| error!("Fatal: {e}"))
        .context("Calculator service failed")
}
