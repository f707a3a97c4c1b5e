use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use skyfare_core::query::{Filters, QuerySpec};
use skyfare_offer::{EnrichedFlight, FacetSummary};

use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Flat query-string shape shared by the search and filter endpoints.
#[derive(Debug, Deserialize)]
pub struct FareSearchParams {
    pub source: Option<String>,
    pub destination: Option<String>,
    #[serde(rename = "class")]
    pub flight_class: Option<String>,
    #[serde(rename = "date")]
    pub travel_date: Option<String>,
    pub sort_by: Option<String>,
    pub airline: Option<String>,
    pub stops: Option<String>,
    pub max_price: Option<String>,
    pub departure_time: Option<String>,
    pub arrival_time: Option<String>,
}

impl FareSearchParams {
    fn into_query(self) -> QuerySpec {
        QuerySpec {
            source: self.source,
            destination: self.destination,
            flight_class: self.flight_class,
            travel_date: self.travel_date,
            sort_by: self.sort_by,
            filters: Filters {
                airline: self.airline,
                stops: self.stops,
                max_price: self.max_price,
                departure_time: self.departure_time,
                arrival_time: self.arrival_time,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AirportSuggestion {
    pub label: String,
}

#[derive(Debug, Deserialize)]
pub struct SuggestParams {
    #[serde(default)]
    pub q: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /v1/flights/search
/// Priced, sorted, filtered flight cards for a route/class/date query.
pub async fn search_flights(
    State(state): State<AppState>,
    Query(params): Query<FareSearchParams>,
) -> Result<Json<Vec<EnrichedFlight>>, AppError> {
    let flights = state.fares.lookup(&params.into_query())?;
    Ok(Json(flights))
}

/// GET /v1/flights/filters
/// Filter options (airlines, price range, stops, time slots) for a query.
pub async fn flight_filters(
    State(state): State<AppState>,
    Query(params): Query<FareSearchParams>,
) -> Result<Json<FacetSummary>, AppError> {
    let facets = state.fares.facets(&params.into_query())?;
    Ok(Json(facets))
}

const AIRPORTS: &[&str] = &[
    "Bangalore (BLR)",
    "Chennai (MAA)",
    "Delhi (DEL)",
    "Hyderabad (HYD)",
    "Kolkata (CCU)",
    "Mumbai (BOM)",
];

/// GET /v1/airports/suggest
/// Case-insensitive substring autocomplete over the airport table.
pub async fn suggest_airports(Query(params): Query<SuggestParams>) -> Json<Vec<AirportSuggestion>> {
    let needle = params.q.to_lowercase();
    let suggestions = AIRPORTS
        .iter()
        .filter(|airport| airport.to_lowercase().contains(&needle))
        .map(|airport| AirportSuggestion {
            label: airport.to_string(),
        })
        .collect();
    Json(suggestions)
}
