//! Serves the todo HTTP API.
//!
//! Usage:
//!
//! ```text
//! todo-server [--storage memory|postgres] [--host <host>] [--port <port>]
//! ```
//!
//! Flags override the matching environment variables described in
//! [`todo_ddd::config`].

use clap::Parser;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use std::sync::Arc;
use todo_ddd::config::{AppConfig, StorageBackend};
use todo_ddd::telemetry::init_tracing;
use todo_ddd::todo::{
    adapters::{
        http::{AppState, create_router},
        memory::InMemoryTodoRepository,
        postgres::PostgresTodoRepository,
    },
    ports::{TodoRepository, TodoUseCase},
    services::TodoService,
    validation::DefaultTodoValidator,
};
use tokio::net::TcpListener;
use tracing::{error, info};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Parser)]
#[command(name = "todo-server", version, about = "Serves the todo HTTP API")]
struct Args {
    /// Persistence backend.
    #[arg(long, value_enum)]
    storage: Option<StorageBackend>,
    /// Bind host.
    #[arg(long)]
    host: Option<String>,
    /// Bind port.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    init_tracing();
    let args = Args::parse();

    let mut config = AppConfig::from_env()?;
    if let Some(storage) = args.storage {
        config.storage = storage;
    }
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let use_case = match config.storage {
        StorageBackend::Memory => build_service(InMemoryTodoRepository::new()),
        StorageBackend::Postgres => {
            let manager = ConnectionManager::<PgConnection>::new(config.database_url());
            let pool = Pool::builder().build(manager)?;
            info!(
                host = %config.database.host,
                database = %config.database.name,
                "connected to postgres"
            );
            build_service(PostgresTodoRepository::new(pool))
        }
    };

    let state = AppState::new(use_case).with_internal_errors(config.expose_internal_errors);
    let app = create_router(state);

    let bind_address = config.server.bind_address();
    let listener = TcpListener::bind(&bind_address).await?;
    info!(address = %bind_address, storage = %config.storage, "todo server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("todo server stopped");
    Ok(())
}

fn build_service<R>(repository: R) -> Arc<dyn TodoUseCase>
where
    R: TodoRepository + 'static,
{
    Arc::new(TodoService::new(
        Arc::new(repository),
        Arc::new(DefaultTodoValidator::new()),
        Arc::new(DefaultClock),
    ))
}

async fn shutdown_signal() {
    wait_for_shutdown(tokio::signal::ctrl_c()).await;
}

/// Resolves once `signal` fires. A signal that cannot be installed never
/// resolves, so the server keeps running instead of stopping at once.
async fn wait_for_shutdown<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(err) = signal.await {
        error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
