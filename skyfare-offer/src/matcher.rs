use chrono::NaiveDate;
use skyfare_core::flight::FlightRecord;
use skyfare_core::query::ValidatedQuery;
use skyfare_store::Dataset;

/// Integer day difference between the travel date and "today". Calendar-date
/// subtraction only; no timezone arithmetic.
pub fn days_until(travel_date: NaiveDate, today: NaiveDate) -> i64 {
    (travel_date - today).num_days()
}

/// Narrow the dataset to rows for one (source, destination, class, lead-time)
/// tuple. String comparisons are case-insensitive; an empty result is a
/// normal outcome, meaning no historical fares exist at this lead time.
pub fn match_flights<'a>(
    dataset: &'a Dataset,
    query: &ValidatedQuery,
    today: NaiveDate,
) -> Vec<&'a FlightRecord> {
    let days_left = days_until(query.travel_date, today);
    let source = query.source_city.to_lowercase();
    let destination = query.destination_city.to_lowercase();
    let class = query.cabin_class.to_lowercase();

    dataset
        .records()
        .iter()
        .filter(|record| {
            record.source_city.to_lowercase() == source
                && record.destination_city.to_lowercase() == destination
                && record.class.to_lowercase() == class
                && i64::from(record.days_left) == days_left
        })
        .collect()
}
