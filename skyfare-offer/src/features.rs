use chrono::{Datelike, NaiveDate};
use skyfare_core::flight::FlightRecord;
use skyfare_core::predictor::FareFeatures;
use skyfare_store::HolidayMap;

/// Request-level travel-date facts, derived once per request: every matched
/// record shares the same travel date, so weekday and holiday status are
/// computed here rather than per record.
#[derive(Debug, Clone)]
pub struct TravelContext {
    pub travel_date: NaiveDate,
    /// Monday = 0.
    pub day_of_week: u32,
    pub is_holiday: bool,
    pub holiday_name: Option<String>,
}

impl TravelContext {
    pub fn derive(travel_date: NaiveDate, holidays: &HolidayMap) -> Self {
        Self {
            travel_date,
            day_of_week: travel_date.weekday().num_days_from_monday(),
            is_holiday: holidays.is_holiday(travel_date),
            holiday_name: holidays.name_for(travel_date).map(str::to_string),
        }
    }
}

/// Assemble the full feature vector for one matched record.
pub fn fare_features(record: &FlightRecord, ctx: &TravelContext) -> FareFeatures {
    FareFeatures {
        source_city: record.source_city.clone(),
        destination_city: record.destination_city.clone(),
        airline: record.airline.clone(),
        departure_time: record.departure_time.clone(),
        arrival_time: record.arrival_time.clone(),
        stops: record.stops,
        class: record.class.clone(),
        days_left: record.days_left,
        day_of_week: ctx.day_of_week,
        is_holiday: ctx.is_holiday,
    }
}
