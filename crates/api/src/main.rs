use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scoreboard_api::config::{ServerConfig, StoreBackend};
use scoreboard_api::router::build_app_router;
use scoreboard_api::state::AppState;
use scoreboard_core::scoring::memory::{
    InMemoryFailStore, InMemoryPassStore, InMemorySubmissionStore,
};
use scoreboard_core::scoring::ScoreService;
use scoreboard_events::{MessageBroker, MessageProducer, ScoreMessageConsumer, TopicListener};

/// Listener id for the score topic consumer.
const SCORE_LISTENER_ID: &str = "score-listener";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scoreboard_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env().expect("Invalid server configuration");
    tracing::info!(
        host = %config.host,
        port = %config.port,
        store_backend = ?config.store_backend,
        "Loaded server configuration",
    );

    // --- Stores ---
    let score_service = match config.store_backend {
        StoreBackend::Postgres => {
            let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

            let pool = scoreboard_db::create_pool(&database_url)
                .await
                .expect("Failed to connect to database");
            tracing::info!("Database connection pool created");

            scoreboard_db::health_check(&pool)
                .await
                .expect("Database health check failed");
            tracing::info!("Database health check passed");

            scoreboard_db::run_migrations(&pool)
                .await
                .expect("Failed to run database migrations");
            tracing::info!("Database migrations applied");

            let stores = Arc::new(scoreboard_db::PgScoreStores::new(pool));
            ScoreService::new(stores.clone(), stores.clone(), stores)
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory score stores; data is lost on restart");
            ScoreService::new(
                Arc::new(InMemorySubmissionStore::new()),
                Arc::new(InMemoryPassStore::new()),
                Arc::new(InMemoryFailStore::new()),
            )
        }
    };

    // --- Messaging ---
    let broker = Arc::new(MessageBroker::default());
    let listener_cancel = CancellationToken::new();
    let listener = TopicListener::new(
        SCORE_LISTENER_ID,
        config.messaging_topic.clone(),
        Arc::new(ScoreMessageConsumer),
    );
    let listener_handle = tokio::spawn(listener.run(broker.subscribe(), listener_cancel.clone()));
    tracing::info!(topic = %config.messaging_topic, "Score message listener started");

    let producer = Arc::new(MessageProducer::new(Arc::clone(&broker)));

    // --- App state ---
    let state = AppState {
        config: Arc::new(config.clone()),
        score_service: Arc::new(score_service),
        producer,
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, cleaning up");

    listener_cancel.cancel();
    let shutdown_timeout = Duration::from_secs(config.shutdown_timeout_secs);
    if tokio::time::timeout(shutdown_timeout, listener_handle)
        .await
        .is_err()
    {
        tracing::warn!("Score message listener did not stop within the shutdown timeout");
    }
    drop(broker);

    tracing::info!("Graceful shutdown complete");
}

/// Wait for SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
