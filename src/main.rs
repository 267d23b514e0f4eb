use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing::{error, info};

use gymcore::adapters::http::{router, AppState};
use gymcore::adapters::postgres::{
    PostgresMembershipRepository, PostgresPaymentRepository, PostgresPlanRepository,
};
use gymcore::config::AppConfig;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        error!("gymcore exited with error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gymcore=info,tower_http=info".into()),
        )
        .init();

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .max_lifetime(config.database.max_lifetime())
        .connect(&config.database.url)
        .await?;
    info!("database pool established");

    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("migrations applied");
    }

    let state = AppState {
        plan_repository: Arc::new(PostgresPlanRepository::new(pool.clone())),
        payment_repository: Arc::new(PostgresPaymentRepository::new(pool.clone())),
        membership_repository: Arc::new(PostgresMembershipRepository::new(pool)),
    };

    let app = router(state, &config.server);
    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to install ctrl-c handler: {err}");
        return;
    }
    info!("shutdown signal received");
}
