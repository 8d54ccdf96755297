//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use tracing::info;

use crate::engine::{EngineError, RouteOutcome};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/locations", get(list_locations))
        .route("/api/locations/search", get(search_locations))
        .route("/route/plan", post(plan_route))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Minimal index page pointing at the API.
async fn index_page() -> impl IntoResponse {
    Html(
        "<!doctype html>\
         <title>Wayfinder</title>\
         <h1>Wayfinder</h1>\
         <p>POST /route/plan with {\"origin\", \"destination\", \"include_fast_lanes\"}.</p>\
         <p>GET /api/locations lists known locations.</p>",
    )
}

/// List all known locations, sorted by display name.
async fn list_locations(State(state): State<AppState>) -> Json<LocationsResponse> {
    let locations = state
        .directory
        .display_names()
        .map(str::to_string)
        .collect();
    Json(LocationsResponse { locations })
}

/// Search locations by name fragment.
async fn search_locations(
    State(state): State<AppState>,
    Query(req): Query<LocationSearchRequest>,
) -> Json<LocationsResponse> {
    let limit = req.limit.unwrap_or(10).min(50);
    let locations = state
        .directory
        .search(&req.q, limit)
        .into_iter()
        .map(str::to_string)
        .collect();
    Json(LocationsResponse { locations })
}

/// Plan the fastest route between two locations.
async fn plan_route(
    State(state): State<AppState>,
    Json(req): Json<PlanRouteRequest>,
) -> Result<Json<PlanRouteResponse>, AppError> {
    let origin = state
        .directory
        .resolve(&req.origin)
        .ok_or_else(|| AppError::NotFound {
            message: format!("Unknown location: {}", req.origin),
        })?
        .to_string();
    let destination = state
        .directory
        .resolve(&req.destination)
        .ok_or_else(|| AppError::NotFound {
            message: format!("Unknown location: {}", req.destination),
        })?
        .to_string();

    if origin == destination {
        return Err(AppError::BadRequest {
            message: "Origin and destination are the same location".to_string(),
        });
    }

    info!(%origin, %destination, req.include_fast_lanes, "planning route");

    let outcome = state
        .engine
        .find_route(&origin, &destination, req.include_fast_lanes)
        .map_err(AppError::from)?;

    let response = match outcome {
        RouteOutcome::Found(itinerary) => {
            PlanRouteResponse::from_itinerary(&origin, &destination, &itinerary)
        }
        RouteOutcome::NoPath => PlanRouteResponse::no_path(&origin, &destination),
    };
    Ok(Json(response))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<EngineError> for AppError {
    fn from(e: EngineError) -> Self {
        // Names are resolved before the engine sees them, so an unknown
        // location at this level is a lookup inconsistency.
        AppError::NotFound {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        tracing::warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Dataset, RouteGrouping};
    use crate::domain::{Location, Point};
    use crate::engine::RouteEngine;

    fn app_state() -> AppState {
        let location = |name: &str, x: i64, z: i64| {
            Location::new(
                name.to_string(),
                Point::new(x, z),
                String::new(),
                String::new(),
            )
        };
        let dataset = Dataset {
            locations: vec![
                location("Home", 0, 0),
                location("Market", 30, 0),
                location("Dock", 0, 40),
            ],
            routes: vec![RouteGrouping {
                name: "R1".to_string(),
                members: vec![Point::new(0, 0), Point::new(30, 0)],
            }],
        };
        AppState::new(RouteEngine::new(dataset))
    }

    #[tokio::test]
    async fn plan_route_finds_the_fastest_path() {
        let state = app_state();
        let request = PlanRouteRequest {
            origin: "Home".to_string(),
            destination: "Market".to_string(),
            include_fast_lanes: false,
        };

        let Json(response) = plan_route(State(state), Json(request)).await.unwrap();

        assert!(response.found);
        assert_eq!(response.origin, "Home");
        assert_eq!(response.destination, "Market");
        assert_eq!(response.total_time_seconds, 3.75);
        assert_eq!(response.route_names, vec!["R1"]);
    }

    #[tokio::test]
    async fn plan_route_resolves_lenient_names() {
        let state = app_state();
        let request = PlanRouteRequest {
            origin: "home".to_string(),
            destination: "the Market stall".to_string(),
            include_fast_lanes: false,
        };

        let Json(response) = plan_route(State(state), Json(request)).await.unwrap();

        assert_eq!(response.origin, "Home");
        assert_eq!(response.destination, "Market");
    }

    #[tokio::test]
    async fn plan_route_rejects_unknown_locations() {
        let state = app_state();
        let request = PlanRouteRequest {
            origin: "Home".to_string(),
            destination: "Stronghold".to_string(),
            include_fast_lanes: false,
        };

        let err = plan_route(State(state), Json(request)).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn plan_route_rejects_identical_endpoints() {
        let state = app_state();
        let request = PlanRouteRequest {
            origin: "Home".to_string(),
            destination: "home".to_string(),
            include_fast_lanes: false,
        };

        let err = plan_route(State(state), Json(request)).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn locations_are_listed_sorted() {
        let Json(response) = list_locations(State(app_state())).await;
        assert_eq!(response.locations, vec!["Dock", "Home", "Market"]);
    }

    #[tokio::test]
    async fn location_search_is_limited() {
        let request = LocationSearchRequest {
            q: "o".to_string(),
            limit: Some(1),
        };
        let Json(response) = search_locations(State(app_state()), Query(request)).await;
        assert_eq!(response.locations.len(), 1);
    }

    #[tokio::test]
    async fn health_is_ok() {
        assert_eq!(health().await, "ok");
    }
}
