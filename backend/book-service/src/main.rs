use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use book_service::config::{Config, LogFormat};
use book_service::db::{ensure_books_table, PgBookRepository};
use book_service::handlers::{self, HealthState};
use book_service::services::BookService;
use db_pool::create_pool;
use grpc_health::{HealthCheck, PostgresHealthCheck};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::task::JoinSet;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,actix_web=info,sqlx=warn".into());
    let registry = tracing_subscriber::registry().with(env_filter);

    match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_line_number(true)
                    .with_target(true),
            )
            .init(),
        LogFormat::Text => registry.with(fmt::layer()).init(),
    }
}

fn build_cors(allowed_origins: &[String]) -> Cors {
    let mut cors = Cors::default();
    for origin in allowed_origins {
        if origin == "*" {
            cors = cors.allow_any_origin();
        } else {
            cors = cors.allowed_origin(origin);
        }
    }
    cors.allow_any_method().allow_any_header().max_age(3600)
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {},
                    _ = terminate.recv() => {},
                }
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

/// Book Service
///
/// Serves book CRUD over HTTP (`/books`) and gRPC
/// (`bookshelf.book_service.v1.BookService`) from one PostgreSQL table.
/// Both servers run until Ctrl-C/SIGTERM or until either of them fails.
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("ERROR: Failed to load configuration: {}", e);
            return Err(anyhow::anyhow!("Configuration loading failed: {}", e));
        }
    };

    init_tracing(config.log.format);

    tracing::info!("Starting book-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    config.database.log_config();
    let db_pool = create_pool(config.database.clone())
        .await
        .context("Failed to create database pool")?;

    ensure_books_table(&db_pool)
        .await
        .context("Failed to ensure books schema")?;

    let books = BookService::new(Arc::new(PgBookRepository::new(db_pool.clone())));
    let postgres_check: Arc<dyn HealthCheck> = Arc::new(PostgresHealthCheck::new(db_pool.clone()));

    let http_bind_address = config.app.http_bind_address();
    let grpc_addr: SocketAddr = config
        .app
        .grpc_bind_address()
        .parse()
        .context("Failed to parse gRPC bind address")?;

    tracing::info!("Starting HTTP server at {}", http_bind_address);

    let books_data = web::Data::new(books.clone());
    let health_state = web::Data::new(HealthState::new(vec![postgres_check.clone()]));
    let allowed_origins = config.cors.allowed_origins.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(books_data.clone())
            .app_data(health_state.clone())
            .wrap(build_cors(&allowed_origins))
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .configure(handlers::configure)
    })
    .bind(&http_bind_address)
    .with_context(|| format!("Failed to bind HTTP server to {}", http_bind_address))?
    .workers(config.app.http_workers)
    .run();

    let server_handle = server.handle();

    let (shutdown_tx, _) = broadcast::channel(1);
    let grpc_shutdown = shutdown_tx.subscribe();

    let mut tasks: JoinSet<io::Result<()>> = JoinSet::new();

    tasks.spawn(async move {
        tracing::info!("HTTP server is running");
        server.await
    });

    let health_interval = Duration::from_secs(config.health.check_interval_secs);
    tasks.spawn(async move {
        tracing::info!("gRPC server is running");
        book_service::grpc::start_grpc_server(
            grpc_addr,
            books,
            postgres_check,
            health_interval,
            grpc_shutdown,
        )
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("{}", e)))
    });

    let mut first_error: Option<io::Error> = None;

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            result = tasks.join_next() => {
                match result {
                    Some(Ok(Ok(_))) => {
                        tracing::info!("Server task completed");
                    }
                    Some(Ok(Err(e))) => {
                        tracing::error!("Server task returned error: {}", e);
                        first_error.get_or_insert(e);
                        let _ = shutdown_tx.send(());
                        server_handle.stop(true).await;
                        tasks.shutdown().await;
                        break;
                    }
                    Some(Err(e)) => {
                        tracing::error!("Task join error: {}", e);
                        first_error.get_or_insert(io::Error::new(io::ErrorKind::Other, e.to_string()));
                        let _ = shutdown_tx.send(());
                        server_handle.stop(true).await;
                        tasks.shutdown().await;
                        break;
                    }
                    None => break,
                }
            }
            _ = &mut shutdown => {
                tracing::info!("Shutdown signal received");
                let _ = shutdown_tx.send(());
                server_handle.stop(true).await;
                tasks.shutdown().await;
                break;
            }
        }
    }

    db_pool.close().await;
    tracing::info!("Book-service shutting down");

    match first_error {
        Some(e) => Err(e).context("Server terminated with an error"),
        None => Ok(()),
    }
}
