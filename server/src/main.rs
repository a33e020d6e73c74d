use clap::Parser;
use todo_api::Config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting todo-api");
    todo_api::serve(config).await?;
    Ok(())
}
