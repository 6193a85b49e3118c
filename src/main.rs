use std::env;
use std::path::Path;
use std::sync::Arc;

use ge_market_backend::services::loader;
use ge_market_backend::{AppState, router};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,ge_market_backend=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let prices_csv =
        env::var("GE_PRICES_CSV").unwrap_or_else(|_| "deadman_apocalypse.csv".to_string());
    let items_csv = env::var("GE_ITEMS_CSV").unwrap_or_else(|_| "ItemID.csv".to_string());

    // Load and join the dataset; a broken file aborts startup.
    tracing::info!("Loading market data from {} + {}...", prices_csv, items_csv);
    let dataset = loader::load_dataset(Path::new(&prices_csv), Path::new(&items_csv))
        .expect("Failed to load market dataset");

    let state = AppState {
        dataset: Arc::new(dataset),
    };

    let app = router(state);

    // Start server
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("Failed to bind listen address");

    tracing::info!("Server listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
