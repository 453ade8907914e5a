//! Garage API server binary.
//!
//! Serves the REST API over PostgreSQL when `DATABASE_URL` is set, otherwise
//! over a non-durable in-memory store.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use garage_api::config::{ApiConfig, DEFAULT_ADMIN_EMAIL};
use garage_core::auth::jwt::resolve_jwt_secret;
use garage_core::store::{GarageStore, MemoryStore, PgStore};
use sqlx::postgres::PgPoolOptions;
use tracing::{info, warn};

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "garage_api_server", about = "Garage API server")]
struct Args {
    /// Host/interface to bind.
    #[arg(long, env = "GARAGE_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on (0 = ephemeral).
    #[arg(long, env = "PORT", default_value_t = 5000)]
    port: u16,

    /// PostgreSQL connection URL. Without it, data lives in memory only.
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Maximum number of database connections in the pool.
    #[arg(long, default_value_t = 5)]
    max_connections: u32,

    /// Email of the account that is created as administrator.
    #[arg(long, env = "GARAGE_ADMIN_EMAIL", default_value = DEFAULT_ADMIN_EMAIL)]
    admin_email: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,garage_api=debug,garage_core=debug".into()),
        )
        .init();

    let args = Args::parse();

    let config = ApiConfig {
        bind_addr: format!("{}:{}", args.host, args.port),
        jwt_secret: resolve_jwt_secret(),
        admin_email: args.admin_email,
    };

    let store: Arc<dyn GarageStore> = match &args.database_url {
        Some(url) => {
            info!(max_connections = args.max_connections, "connecting to PostgreSQL");
            let pool = PgPoolOptions::new()
                .max_connections(args.max_connections)
                .acquire_timeout(Duration::from_secs(30))
                .connect(url)
                .await?;

            info!("running database migrations");
            garage_core::migrate::migrate(&pool).await?;
            Arc::new(PgStore::new(pool))
        }
        None => {
            warn!("DATABASE_URL not set, using in-memory store; data will not persist");
            Arc::new(MemoryStore::new())
        }
    };

    info!(
        store = store.backend_name(),
        admin_email = %config.admin_email,
        "starting garage_api_server"
    );

    let state = garage_api::AppState::new(store, config.clone());
    let app = garage_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "REST API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
