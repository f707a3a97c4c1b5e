use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{Duration, Utc};
use tower::ServiceExt;

use skyfare_api::{app, AppState};
use skyfare_core::flight::FlightRecord;
use skyfare_core::predictor::{FareFeatures, FarePredictor, PredictError};
use skyfare_offer::{DisplayEnricher, FareService};
use skyfare_store::{Dataset, HolidayMap};

struct Fixed(f64);

impl FarePredictor for Fixed {
    fn predict(&self, rows: &[FareFeatures]) -> Result<Vec<f64>, PredictError> {
        Ok(vec![self.0; rows.len()])
    }
}

fn fixture_state(holidays: HolidayMap) -> AppState {
    let dataset = Dataset::from_records(vec![
        FlightRecord {
            airline: "Indigo".to_string(),
            source_city: "Delhi".to_string(),
            destination_city: "Mumbai".to_string(),
            departure_time: "06:10".to_string(),
            arrival_time: "08:20".to_string(),
            stops: 0,
            class: "Economy".to_string(),
            days_left: 5,
            price: 4250.0,
        },
        FlightRecord {
            airline: "Air India".to_string(),
            source_city: "Delhi".to_string(),
            destination_city: "Mumbai".to_string(),
            departure_time: "18:30".to_string(),
            arrival_time: "20:45".to_string(),
            stops: 1,
            class: "Economy".to_string(),
            days_left: 5,
            price: 3980.0,
        },
    ]);

    let fares = FareService::new(
        Arc::new(dataset),
        Arc::new(Fixed(4000.0)),
        Arc::new(Fixed(5000.0)),
        holidays,
        DisplayEnricher::new(Some(7)),
    );
    AppState {
        fares: Arc::new(fares),
    }
}

fn travel_date_in_5_days() -> String {
    (Utc::now().date_naive() + Duration::days(5))
        .format("%Y-%m-%d")
        .to_string()
}

async fn get_json(state: AppState, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app(state)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn test_search_returns_priced_flights() {
    let uri = format!(
        "/v1/flights/search?source=Delhi&destination=Mumbai&class=Economy&date={}",
        travel_date_in_5_days()
    );
    let (status, body) = get_json(fixture_state(HolidayMap::default()), &uri).await;

    assert_eq!(status, StatusCode::OK);
    let flights = body.as_array().expect("search should return an array");
    assert_eq!(flights.len(), 2);
    for flight in flights {
        assert_eq!(flight["predicted_price"], 4000.0);
        assert_eq!(flight["holiday"], "Standard Pricing");
    }
}

#[tokio::test]
async fn test_search_applies_holiday_blend() {
    let date = travel_date_in_5_days();
    let holidays = HolidayMap::from_entries([(date.clone(), "Diwali".to_string())]);
    let uri = format!(
        "/v1/flights/search?source=Delhi&destination=Mumbai&class=Economy&date={date}&airline=Indigo"
    );
    let (status, body) = get_json(fixture_state(holidays), &uri).await;

    assert_eq!(status, StatusCode::OK);
    let flights = body.as_array().unwrap();
    assert_eq!(flights.len(), 1);
    assert_eq!(flights[0]["predicted_price"], 4750.0);
    assert_eq!(flights[0]["holiday"], "Diwali");
}

#[tokio::test]
async fn test_missing_fields_degrade_to_empty() {
    let (status, body) = get_json(
        fixture_state(HolidayMap::default()),
        "/v1/flights/search?source=Delhi",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(0));

    let (status, body) = get_json(fixture_state(HolidayMap::default()), "/v1/flights/filters").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["airlines"].as_array().map(Vec::len), Some(0));
    assert_eq!(body["min_price"], 0.0);
    assert_eq!(body["max_price"], 0.0);
}

#[tokio::test]
async fn test_filters_endpoint_summarizes_matches() {
    let uri = format!(
        "/v1/flights/filters?source=Delhi&destination=Mumbai&class=Economy&date={}",
        travel_date_in_5_days()
    );
    let (status, body) = get_json(fixture_state(HolidayMap::default()), &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["airlines"],
        serde_json::json!(["Air India", "Indigo"])
    );
    assert_eq!(body["stops"][0]["label"], "Direct");
    assert_eq!(body["stops"][1]["label"], "1 Stop");
}

#[tokio::test]
async fn test_airport_suggestions() {
    let (status, body) = get_json(
        fixture_state(HolidayMap::default()),
        "/v1/airports/suggest?q=del",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([{ "label": "Delhi (DEL)" }]));
}
