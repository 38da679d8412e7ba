mod adapters;
mod app_state;
mod config;
mod domain;
mod factory;
mod router;
mod routes;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kowalski_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = config::read_config()?;

    let connection_pool = PgPoolOptions::new()
        .max_connections(10)
        .connect_with(settings.database.with_db())
        .await?;

    sqlx::migrate!().run(&connection_pool).await?;

    let app_state = factory::postgres_app_state(connection_pool, &settings.application.base_url);
    let app = router::create(app_state, settings.application.app_url.clone());

    let address = format!("{}:{}", settings.application.host, settings.application.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("listening on {}", address);

    axum::serve(listener, app).await?;

    Ok(())
}
