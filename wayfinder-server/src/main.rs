use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use wayfinder_server::dataset::load_dataset;
use wayfinder_server::engine::RouteEngine;
use wayfinder_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let dataset_path =
        std::env::var("WAYFINDER_DATASET").unwrap_or_else(|_| "world_map.csv".to_string());
    let dataset = load_dataset(&dataset_path)
        .unwrap_or_else(|e| panic!("Failed to load dataset from {dataset_path}: {e}"));

    let engine = RouteEngine::new(dataset);
    let state = AppState::new(engine);
    tracing::info!(locations = state.directory.len(), "directory ready");

    let app = create_router(state);

    let addr: SocketAddr = std::env::var("WAYFINDER_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
        .parse()
        .expect("WAYFINDER_ADDR must be a socket address");

    println!("Wayfinder listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health                - Health check");
    println!("  GET  /api/locations         - List known locations");
    println!("  GET  /api/locations/search  - Search locations by name");
    println!("  POST /route/plan            - Plan the fastest route");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
