use axum::{http::Method, routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod flights;
pub mod state;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    // CORS Middleware
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    Router::new()
        .route("/v1/flights/search", get(flights::search_flights))
        .route("/v1/flights/filters", get(flights::flight_filters))
        .route("/v1/airports/suggest", get(flights::suggest_airports))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
