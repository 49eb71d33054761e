use std::sync::Arc;
use tidewatch::api;
use tidewatch::config::{Config, PriceFeed};
use tidewatch::services::{AlertRegistry, AnalysisService, MockSentimentProvider, PriceHistory};
use tidewatch::sources::{CoinGeckoFeed, PriceSimulator};
use tidewatch::AppState;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tidewatch=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();
    info!("Starting Tidewatch server on {}:{}", config.host, config.port);

    // Shared price history fed by the selected producer
    let history = Arc::new(PriceHistory::new(config.max_history));

    match config.price_feed {
        PriceFeed::Simulator => {
            let simulator = PriceSimulator::new(history.clone(), config.tick_interval_secs);
            simulator.seed_backfill();
            tokio::spawn(simulator.run());
        }
        PriceFeed::CoinGecko => {
            info!("Using live CoinGecko price feed");
            let feed = CoinGeckoFeed::new(
                config.coingecko_api_key.clone(),
                history.clone(),
                config.tick_interval_secs,
            );
            tokio::spawn(feed.run());
        }
    }

    // Analysis pipeline and alert registry
    let analysis = Arc::new(AnalysisService::from_config(
        &config,
        history.clone(),
        Box::new(MockSentimentProvider),
    ));
    let alerts = Arc::new(AlertRegistry::new("BTC/USD"));

    // Create application state
    let state = AppState {
        history,
        analysis,
        alerts,
    };

    // Build CORS layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the router
    let app = axum::Router::new()
        .merge(api::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start the server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Tidewatch server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
