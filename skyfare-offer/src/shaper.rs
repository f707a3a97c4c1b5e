use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::num::ParseFloatError;

use skyfare_core::query::{Filters, SortMode};
use skyfare_core::timeslot::TimeSlot;

use crate::models::{EnrichedFlight, FacetSummary, SlotFacet, StopFacet};

/// Result-page cap, matching the card count the original lookup served.
pub const MAX_RESULTS: usize = 40;

/// Bound the final result count. Applied last, after sorting and filtering,
/// so the cap keeps the best-ranked cards.
pub fn bound_results(flights: &mut Vec<EnrichedFlight>) {
    flights.truncate(MAX_RESULTS);
}

/// Sort a priced result set in place.
pub fn sort_flights(flights: &mut [EnrichedFlight], mode: SortMode) {
    match mode {
        SortMode::Best => flights.sort_by(|a, b| {
            a.stops
                .cmp(&b.stops)
                .then_with(|| a.departure_time.cmp(&b.departure_time))
                .then_with(|| cmp_price(a.predicted_price, b.predicted_price))
        }),
        SortMode::Cheapest => flights.sort_by(|a, b| {
            cmp_price(a.predicted_price, b.predicted_price)
                .then_with(|| a.days_left.cmp(&b.days_left))
        }),
    }
}

fn cmp_price(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Apply the post-filters, ANDed across whichever are present. Order of
/// application does not matter; each filter only ever removes records.
pub fn apply_filters(flights: Vec<EnrichedFlight>, filters: &Filters) -> Vec<EnrichedFlight> {
    let airlines = parse_list(&filters.airline);
    let stops = parse_list(&filters.stops);
    let departure_slots = parse_list(&filters.departure_time);
    let arrival_slots = parse_list(&filters.arrival_time);
    let max_price = match parse_max_price(&filters.max_price) {
        Ok(max) => max,
        Err(err) => {
            // Fail-soft: a bad bound disables the filter, not the request.
            tracing::debug!(%err, "ignoring unparseable max_price filter");
            None
        }
    };

    flights
        .into_iter()
        .filter(|flight| {
            if let Some(allow) = &airlines {
                if !allow.iter().any(|a| a == &flight.airline) {
                    return false;
                }
            }
            if let Some(allow) = &stops {
                let stops_value = flight.stops.to_string();
                if !allow.iter().any(|s| s == &stops_value) {
                    return false;
                }
            }
            if let Some(allow) = &departure_slots {
                let slot = TimeSlot::from_hhmm(&flight.departure_time).key();
                if !allow.iter().any(|s| s == slot) {
                    return false;
                }
            }
            if let Some(allow) = &arrival_slots {
                let slot = TimeSlot::from_hhmm(&flight.arrival_time).key();
                if !allow.iter().any(|s| s == slot) {
                    return false;
                }
            }
            if let Some(max) = max_price {
                if flight.predicted_price > max {
                    return false;
                }
            }
            true
        })
        .collect()
}

fn parse_list(raw: &Option<String>) -> Option<Vec<String>> {
    let raw = raw.as_deref()?.trim();
    if raw.is_empty() {
        return None;
    }
    Some(raw.split(',').map(|part| part.trim().to_string()).collect())
}

fn parse_max_price(raw: &Option<String>) -> Result<Option<f64>, ParseFloatError> {
    match raw.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(Some(v.parse()?)),
        _ => Ok(None),
    }
}

/// Facet summary over the unfiltered matched-and-priced set: distinct
/// airlines, the price range, per-stop-count minimum prices, and the
/// departure/arrival slots present (excluding unknown), sorted by slot key.
pub fn compute_facets(flights: &[EnrichedFlight]) -> FacetSummary {
    if flights.is_empty() {
        return FacetSummary::default();
    }

    let airlines: BTreeSet<&str> = flights.iter().map(|f| f.airline.as_str()).collect();

    let mut min_price = f64::MAX;
    let mut max_price = f64::MIN;
    let mut stop_prices: BTreeMap<u32, f64> = BTreeMap::new();
    let mut departure_slots: BTreeMap<&'static str, &'static str> = BTreeMap::new();
    let mut arrival_slots: BTreeMap<&'static str, &'static str> = BTreeMap::new();

    for flight in flights {
        min_price = min_price.min(flight.predicted_price);
        max_price = max_price.max(flight.predicted_price);

        stop_prices
            .entry(flight.stops)
            .and_modify(|p| *p = p.min(flight.predicted_price))
            .or_insert(flight.predicted_price);

        let departure = TimeSlot::from_hhmm(&flight.departure_time);
        if departure != TimeSlot::Unknown {
            departure_slots.insert(departure.key(), departure.label());
        }
        let arrival = TimeSlot::from_hhmm(&flight.arrival_time);
        if arrival != TimeSlot::Unknown {
            arrival_slots.insert(arrival.key(), arrival.label());
        }
    }

    let slot_facets = |slots: BTreeMap<&'static str, &'static str>| {
        slots
            .into_iter()
            .map(|(value, label)| SlotFacet {
                label: label.to_string(),
                value: value.to_string(),
            })
            .collect()
    };

    FacetSummary {
        airlines: airlines.into_iter().map(str::to_string).collect(),
        min_price,
        max_price,
        stops: stop_prices
            .into_iter()
            .map(|(stops, min_price)| StopFacet {
                label: stop_label(stops),
                value: stops.to_string(),
                min_price,
            })
            .collect(),
        departure_times: slot_facets(departure_slots),
        arrival_times: slot_facets(arrival_slots),
    }
}

fn stop_label(stops: u32) -> String {
    if stops == 0 {
        "Direct".to_string()
    } else {
        format!("{stops} Stop")
    }
}
