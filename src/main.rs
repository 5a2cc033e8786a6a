use rusty_library_catalogue::{
    adapters::{
        UuidGenerator, mock::BookRepository as InMemoryBookRepository,
        postgres::PostgresBookRepository,
    },
    api::{handlers::AppState, router::create_router},
    application::book::ServiceDependencies,
    config::{Config, DEFAULT_LOG_FILTER},
    ports::BookRepository,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // Initialize adapters
    let book_repository = build_book_repository(&config).await?;
    let id_generator = Arc::new(UuidGenerator::new());

    // Create service dependencies
    let service_deps = ServiceDependencies {
        book_repository,
        id_generator,
    };

    // Create application state
    let app_state = Arc::new(AppState { service_deps });

    // Create router
    let app = create_router(app_state);

    // Server configuration
    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    // Start server
    axum::serve(listener, app).await?;

    Ok(())
}

/// DATABASE_URLが設定されていればPostgreSQL、なければインメモリのリポジトリを使う
async fn build_book_repository(config: &Config) -> Result<Arc<dyn BookRepository>, BoxError> {
    match &config.database_url {
        Some(database_url) => {
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(database_url)
                .await?;

            rusty_library_catalogue::adapters::postgres::run_migrations(&pool).await?;
            tracing::info!("Using PostgreSQL book repository");

            Ok(Arc::new(PostgresBookRepository::new(pool)))
        }
        None => {
            tracing::warn!("DATABASE_URL is not set, books are kept in memory only");
            Ok(Arc::new(InMemoryBookRepository::new()))
        }
    }
}
