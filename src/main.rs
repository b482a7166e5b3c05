//! Travel Desk - travel request intake service
//! Mission: Collect travel requests publicly, let authenticated admins review them

use anyhow::{Context, Result};
use clap::Parser;
use dotenv::dotenv;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use travel_desk::{
    auth::{AdminStore, AuthState, JwtHandler},
    db::Database,
    models::Config,
    routes::build_router,
    travel::{TravelRequestStore, TravelState},
};

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; real environment variables win
    dotenv().ok();
    init_tracing();

    let config = Config::parse();

    info!("Travel Desk starting");

    let db = Database::open(&config.database_path)?;

    // Refuses an empty secret: no unsigned or trivially forgeable tokens
    let jwt_handler =
        Arc::new(JwtHandler::new(&config.jwt_secret).context("Invalid JWT_SECRET")?);

    let auth_state = AuthState::new(Arc::new(AdminStore::new(db.clone())), jwt_handler);
    let travel_state = TravelState::new(Arc::new(TravelRequestStore::new(db)));

    let app = build_router(auth_state, travel_state);

    let listener = TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;
    info!("API server listening on {}", config.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Travel Desk stopped");
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "travel_desk=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            // Without a signal handler, run until killed
            warn!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
