use anyhow::Context;
use gasawa_forms::configuration::get_configuration;
use gasawa_forms::startup::{build_dispatcher, get_connection_pool, run};
use gasawa_forms::telemetry::{get_subscriber, init_subscriber};
use std::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("gasawa_forms".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let config = get_configuration().context("Failed to read configuration")?;
    let address = format!(
        "{address}:{port}",
        address = config.application.host,
        port = config.application.port
    );
    let listener = TcpListener::bind(&address)
        .with_context(|| format!("Failed to bind {}", address))?;
    let db_connection_pool = get_connection_pool(&config.database);
    let dispatcher = build_dispatcher(&config)?;

    tracing::info!(%address, "Starting form submission service");
    run(listener, db_connection_pool, dispatcher)?.await?;
    Ok(())
}
