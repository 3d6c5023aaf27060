// Main entry point for the notes API

use mynotes_api::api::{create_router, AppState};
use mynotes_api::config::Config;
use mynotes_api::store::{postgres, MemoryStore, NoteStore, PgNoteStore, PgUserStore, UserStore};

use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load and validate configuration first (before any logging)
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // 2. Tracing may only be initialized once
    init_tracing(&config);

    info!("Starting notes API");
    info!(
        bind_address = %config.bind_address,
        port = config.port,
        timeout_secs = config.request_timeout_secs,
        "Configuration loaded"
    );

    // 3. Pick the store: Postgres when configured, in-memory otherwise
    let (user_store, note_store) = init_stores(&config).await?;

    // 4. Wire services and routes
    let addr = format!("{}:{}", config.bind_address, config.port);
    let app_state = AppState::new(config, user_store, note_store);
    let router = create_router(&app_state).with_state(app_state);

    info!("Router created");

    // 5. Start HTTP server
    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        error!(error = %e, addr = %addr, "Failed to bind to address");
        e
    })?;

    info!(addr = %addr, "Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!(error = %e, "Server error");
            e
        })?;

    info!("Server shutdown complete");
    Ok(())
}

/// Build the user and note stores for the configured backend
async fn init_stores(config: &Config) -> anyhow::Result<(Arc<dyn UserStore>, Arc<dyn NoteStore>)> {
    let Some(ref database_url) = config.database_url else {
        warn!("DATABASE_URL not set, using in-memory store; data is lost on restart");
        let store = Arc::new(MemoryStore::new());
        let user_store: Arc<dyn UserStore> = store.clone();
        let note_store: Arc<dyn NoteStore> = store;
        return Ok((user_store, note_store));
    };

    let pool = postgres::connect(database_url, config.database_max_connections)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to connect to database");
            e
        })?;

    postgres::ensure_schema(&pool).await.map_err(|e| {
        error!(error = %e, "Failed to prepare database schema");
        e
    })?;

    info!("Database pool initialized");

    let user_store: Arc<dyn UserStore> = Arc::new(PgUserStore::new(pool.clone()));
    let note_store: Arc<dyn NoteStore> = Arc::new(PgNoteStore::new(pool));
    Ok((user_store, note_store))
}

/// Initialize tracing subscriber based on configuration
///
/// `RUST_LOG` wins over `LOG_LEVEL` when set.
fn init_tracing(config: &Config) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.to_lowercase()))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_env_filter(filter);

    if config.log_format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Ctrl+C received, starting graceful shutdown");
        },
        _ = terminate => {
            info!("SIGTERM received, starting graceful shutdown");
        },
    }
}
