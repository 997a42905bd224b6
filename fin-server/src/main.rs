use fin_auth::JwtValidator;
use fin_server::{AppState, Config, ServerError, build_router, logger};

use std::error::Error;
use std::sync::Arc;

use log::{error, info, warn};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logger (before any other logging)
    logger::initialize(config.log_level, config.log_file.clone(), config.log_colored)?;

    info!("Starting fin-server v{}", env!("CARGO_PKG_VERSION"));

    // Initialize database pool
    info!("Connecting to database: {}", config.database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(&config.database_path)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .foreign_keys(true)
                .busy_timeout(std::time::Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    sqlx::migrate!("../crates/fin-db/migrations").run(&pool).await?;
    info!("Migrations complete");

    // Create JWT validator when key material is configured
    let jwt_validator: Option<Arc<JwtValidator>> = if let Some(ref secret) = config.jwt_secret {
        info!("JWT: HS256 authentication enabled");
        Some(Arc::new(JwtValidator::with_hs256(secret.as_bytes())))
    } else if let Some(ref key_path) = config.jwt_public_key_path {
        let public_key =
            std::fs::read_to_string(key_path).map_err(|e| ServerError::JwtKeyFile {
                path: key_path.display().to_string(),
                source: e,
            })?;
        info!("JWT: RS256 authentication enabled");
        Some(Arc::new(JwtValidator::with_rs256(&public_key)?))
    } else {
        warn!("Authentication DISABLED - running in development mode");
        None
    };

    // Build router
    let app = build_router(AppState {
        pool,
        jwt_validator,
    });

    // Create TCP listener
    let listener = TcpListener::bind(&config.bind_addr).await?;
    info!("Server listening on {}", listener.local_addr()?);

    // Start server with graceful shutdown on SIGINT
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                }
                Err(e) => {
                    error!("Failed to listen for SIGINT: {}", e);
                }
            }
        })
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}
