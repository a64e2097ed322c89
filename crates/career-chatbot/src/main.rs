mod api;
mod config;
mod error;
mod server;

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use career_core::assembler::Assembler;
use career_core::dataset::DatasetStore;
use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting career chatbot");

    let config = Config::from_env()?;
    info!(
        listen_addr = %config.listen_addr,
        data_dir = %config.data_dir.display(),
        "configuration loaded"
    );

    let store = DatasetStore::load(&config.data_dir)?;
    info!(rows = store.total_rows(), "datasets loaded");

    let app = server::router(Arc::new(Assembler::new(Arc::new(store))));

    let listener = TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %config.listen_addr, "chatbot ready, serving HTTP");
    axum::serve(listener, app).await?;

    info!("chatbot shut down");
    Ok(())
}
