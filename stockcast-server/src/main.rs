use stockcast_server::{AppState, ServerConfig, ServerError, app, build_stockcast};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "stockcast_server=info,stockcast=info,tower_http=info".into()
            }),
        )
        .init();

    let cfg = ServerConfig::from_env()?;
    let stockcast = build_stockcast(&cfg)?;
    let app = app(AppState::new(stockcast));

    let addr = cfg.addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        "stockcast-server v{} listening on {}",
        env!("CARGO_PKG_VERSION"),
        addr
    );
    axum::serve(listener, app).await?;
    Ok(())
}
