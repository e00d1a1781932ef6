//! `mindfoodd`: the mindfood catalog server.
//!
//! Usage:
//!   mindfoodd -c <context-name-or-path> [--listen <addr>]
//!
//! The context name resolves to `/etc/mindfood/<name>.toml`.
//! If a path with `/` or `.` is given, it's used directly.

mod config;
mod routes;

use std::sync::Arc;

use catalog::CatalogModule;
use clap::Parser;
use mindfood_core::Module;
use tracing::info;

use config::ServerConfig;

/// mindfood catalog server.
#[derive(Parser, Debug)]
#[command(name = "mindfoodd", about = "mindfood catalog server")]
struct Cli {
    /// Context name or path to config file.
    #[arg(short = 'c', long = "config", required = true)]
    config: String,

    /// Listen address (overrides the config file).
    #[arg(long = "listen")]
    listen: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    // Load server configuration.
    let config_path = ServerConfig::resolve_path(&cli.config);
    info!("Loading configuration from {}", config_path.display());
    let server_config = ServerConfig::load(&config_path)?;
    server_config.verify()?;

    let core_config = server_config.service_config(cli.listen.as_deref());
    if let Some(data_dir) = &core_config.data_dir {
        std::fs::create_dir_all(data_dir)?;
    }

    // Initialize the catalog database.
    let sqlite_path = core_config.resolve_sqlite_path();
    let sql: Arc<dyn mindfood_sql::SQLStore> = Arc::new(
        mindfood_sql::SqliteStore::open(&sqlite_path)
            .map_err(|e| anyhow::anyhow!("failed to open SQL store: {}", e))?,
    );
    info!("Catalog database at {}", sqlite_path.display());

    let catalog_module = CatalogModule::new(Arc::clone(&sql), server_config.catalog)?;
    info!(
        "Catalog module initialized (default_nb={}, max_nb={})",
        server_config.catalog.default_nb, server_config.catalog.max_nb
    );

    let app = routes::build_router(vec![(catalog_module.name(), catalog_module.routes())]);

    let listener = tokio::net::TcpListener::bind(&core_config.listen).await?;
    info!("mindfoodd listening on {}", core_config.listen);
    axum::serve(listener, app).await?;

    Ok(())
}
