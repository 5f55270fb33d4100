use anyhow::Context;
use newsletter_api::app::build;
use newsletter_api::config::get_configuration;
use newsletter_api::telemetry::setup_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing("newsletter_api", "info", std::io::stdout);

    let config = get_configuration().context("Failed to read configuration.")?;
    let server = build(&config).await?;
    tracing::info!(address = %server.local_addr(), "Listening");
    server.await?;
    Ok(())
}
