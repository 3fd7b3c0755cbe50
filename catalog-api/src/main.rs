use std::fs::File;

use catalog_api::{AppConfig, Cli, impls::CatalogApp};
use catalog_axum::{router, start_server};
use catalog_sqlite::Db;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Handlers and the store report through `tracing`; without RUST_LOG we
    // still want startup and seeding to be visible.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::import()?;

    let AppConfig {
        server,
        database,
        seed,
    } = AppConfig::load(&cli)?;

    // A store that cannot be opened is fatal.
    let db = Db::open(&database).await?;
    let app = CatalogApp { db };

    // If requested, dump the schema and exit.
    if let Some(path) = cli.schema {
        let schema = router(app, &server).1;
        serde_json::to_writer_pretty(File::create(path)?, &schema)?;
        return Ok(());
    }

    // Seeding never stops the server from starting.
    match seed.run(&app.db).await {
        Ok(report) => info!(
            reviews = report.reviews_inserted,
            dealerships = report.dealerships_inserted,
            "seeded collections"
        ),
        Err(err) => error!(err = err.to_string(), "seeding failed"),
    }

    start_server(server, app).await?;
    Ok(())
}
