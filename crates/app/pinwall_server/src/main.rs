//! Pinwall API server binary.

use std::sync::Arc;

use clap::Parser;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use pinwall_core::store::Store;
use pinwall_core::store::memory::MemoryStore;
use pinwall_core::store::postgres::PgStore;

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "pinwall_server", about = "Pinwall REST API server")]
struct Args {
    /// Address to bind the HTTP listener.
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:3000")]
    bind_addr: String,

    /// PostgreSQL connection URL.
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "postgres://localhost:5432/pinwall"
    )]
    database_url: String,

    /// Maximum number of database connections in the pool.
    #[arg(long, default_value_t = 5)]
    max_connections: u32,

    /// Run on the in-memory store instead of PostgreSQL. Data is lost on
    /// shutdown; useful for demos and local frontend work.
    #[arg(long, default_value_t = false)]
    memory: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,pinwall_api=debug,pinwall_core=debug".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    info!(version = pinwall_core::version(), "starting pinwall_server");

    let store: Arc<dyn Store> = if args.memory {
        info!("using in-memory store");
        Arc::new(MemoryStore::new())
    } else {
        info!(
            database_url = %args.database_url,
            max_connections = args.max_connections,
            "connecting to PostgreSQL"
        );
        let pool = PgPoolOptions::new()
            .max_connections(args.max_connections)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect(&args.database_url)
            .await?;

        // Run database migrations.
        info!("running database migrations");
        pinwall_api::migrate(&pool).await?;

        Arc::new(PgStore::new(pool))
    };

    let config = pinwall_api::config::ApiConfig {
        bind_addr: args.bind_addr,
        jwt_secret: pinwall_core::auth::token::resolve_jwt_secret(),
    };

    let state = pinwall_api::AppState {
        store,
        config: config.clone(),
    };

    let app = pinwall_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "REST API listening");

    axum::serve(listener, app).await?;

    Ok(())
}
