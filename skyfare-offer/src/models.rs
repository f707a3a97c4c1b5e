use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

/// A priced flight card: the matched record plus the predicted fare and the
/// presentational fields the result page shows. Built fresh per request,
/// never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedFlight {
    pub id: Uuid,
    pub airline: String,
    pub airline_logo: String,
    pub flight_number: String,
    pub aircraft: String,
    pub source_city: String,
    pub source_code: String,
    pub destination_city: String,
    pub destination_code: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub duration: String,
    pub stops: u32,
    pub class: String,
    pub days_left: u32,
    pub travel_date: NaiveDate,
    /// Monday = 0.
    pub day_of_week: u32,
    /// Rounded to 2 decimal places.
    pub predicted_price: f64,
    pub is_holiday: bool,
    /// Holiday name, or "Standard Pricing" on ordinary dates.
    pub holiday: String,
    pub baggage: String,
    pub meals: String,
    pub beverages: String,
    pub usb: String,
    pub depart_terminal: String,
    pub arrival_terminal: String,
}

/// Distinct filterable values present in a result set, with price bounds.
/// Drives the filter sidebar; computed over the unfiltered matches.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct FacetSummary {
    pub airlines: Vec<String>,
    pub min_price: f64,
    pub max_price: f64,
    pub stops: Vec<StopFacet>,
    pub departure_times: Vec<SlotFacet>,
    pub arrival_times: Vec<SlotFacet>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StopFacet {
    pub label: String,
    pub value: String,
    /// Cheapest predicted price among records with this stop count.
    pub min_price: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SlotFacet {
    pub label: String,
    pub value: String,
}
