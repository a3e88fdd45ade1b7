use rusty_book_catalog::{
    adapters::{mock::BookRepository as InMemoryBookRepository, postgres::PostgresBookRepository},
    api::{handlers::AppState, router::create_router},
    application::book::ServiceDependencies,
    config::{AppConfig, StoreBackend},
    ports::BookRepository,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rusty_book_catalog=debug,tower_http=debug,axum=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    // Initialize the book store
    let book_repository: Arc<dyn BookRepository> = match config.store {
        StoreBackend::Postgres => {
            tracing::info!("Database URL: {}", config.database_url);

            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(&config.database_url)
                .await?;

            sqlx::migrate!("./migrations").run(&pool).await?;

            Arc::new(PostgresBookRepository::new(pool))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory book store; data is lost on restart");
            Arc::new(InMemoryBookRepository::new())
        }
    };

    // Create application state
    let app_state = Arc::new(AppState {
        service_deps: ServiceDependencies::new(book_repository),
        locale: config.locale,
    });

    // Create router
    let app = create_router(app_state);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {} (messages: {})", addr, config.locale.as_str());

    // Start server
    axum::serve(listener, app).await?;

    Ok(())
}
