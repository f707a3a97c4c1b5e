use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use skyfare_core::flight::FlightRecord;
use skyfare_core::query::ValidatedQuery;

use crate::features::TravelContext;
use crate::models::EnrichedFlight;

const AIRLINE_LOGOS: &[(&str, &str)] = &[
    ("Air India", "/static/logos/air-india.png"),
    ("Indigo", "/static/logos/indigo.png"),
    ("SpiceJet", "/static/logos/spicejet.png"),
    ("Vistara", "/static/logos/vistara.png"),
    ("GO FIRST", "/static/logos/goair.png"),
    ("AirAsia", "/static/logos/airasia.png"),
    ("Trujet", "/static/logos/truejet.png"),
];

const DEFAULT_LOGO: &str = "/static/logos/default.png";

const AIRCRAFT: &[&str] = &["A320", "A321", "B737"];
const TERMINALS: &[&str] = &["T1", "T2"];

// Carriers with complimentary catering / seat-back USB on this network.
const FULL_SERVICE: &[&str] = &["Air India", "Vistara"];
const USB_EQUIPPED: &[&str] = &["Indigo", "Air India", "Vistara"];

const STANDARD_PRICING_LABEL: &str = "Standard Pricing";

/// Attaches the presentational fields of a flight card: logo, amenities,
/// terminals, aircraft, flight number, duration. Aircraft, terminals, and
/// flight numbers are placeholder data assigned from an injected RNG; seed it
/// for reproducible output. Nothing here feeds back into pricing.
pub struct DisplayEnricher {
    rng: Mutex<StdRng>,
}

impl DisplayEnricher {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    pub fn enrich(
        &self,
        record: &FlightRecord,
        query: &ValidatedQuery,
        ctx: &TravelContext,
        predicted_price: f64,
    ) -> EnrichedFlight {
        let mut rng = self.rng.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let pick = |rng: &mut StdRng, options: &[&str]| -> String {
            options.choose(rng).copied().unwrap_or_default().to_string()
        };

        let economy = record.class.eq_ignore_ascii_case("economy");
        let full_service = FULL_SERVICE.contains(&record.airline.as_str());

        EnrichedFlight {
            id: Uuid::new_v4(),
            airline: record.airline.clone(),
            airline_logo: logo_for(&record.airline),
            flight_number: flight_number(&record.airline, &mut rng),
            aircraft: pick(&mut rng, AIRCRAFT),
            source_city: record.source_city.clone(),
            source_code: query.source_code.clone().unwrap_or_default(),
            destination_city: record.destination_city.clone(),
            destination_code: query.destination_code.clone().unwrap_or_default(),
            departure_time: record.departure_time.clone(),
            arrival_time: record.arrival_time.clone(),
            duration: duration_between(&record.departure_time, &record.arrival_time)
                .unwrap_or_default(),
            stops: record.stops,
            class: record.class.clone(),
            days_left: record.days_left,
            travel_date: ctx.travel_date,
            day_of_week: ctx.day_of_week,
            predicted_price,
            is_holiday: ctx.is_holiday,
            holiday: ctx
                .holiday_name
                .clone()
                .unwrap_or_else(|| STANDARD_PRICING_LABEL.to_string()),
            baggage: if economy {
                "20kg Check-in + 7kg Cabin".to_string()
            } else {
                "30kg Check-in + 10kg Cabin".to_string()
            },
            meals: if full_service {
                "Complimentary Meals".to_string()
            } else {
                "Buy Meals".to_string()
            },
            beverages: if full_service {
                "Complimentary Beverages".to_string()
            } else {
                "Buy Beverages".to_string()
            },
            usb: if USB_EQUIPPED.contains(&record.airline.as_str()) {
                "Yes".to_string()
            } else {
                "No".to_string()
            },
            depart_terminal: pick(&mut rng, TERMINALS),
            arrival_terminal: pick(&mut rng, TERMINALS),
        }
    }
}

fn logo_for(airline: &str) -> String {
    AIRLINE_LOGOS
        .iter()
        .find(|(name, _)| *name == airline)
        .map(|(_, logo)| *logo)
        .unwrap_or(DEFAULT_LOGO)
        .to_string()
}

fn flight_number(airline: &str, rng: &mut StdRng) -> String {
    let prefix: String = airline.chars().take(2).collect::<String>().to_uppercase();
    format!("{}-{}", prefix, rng.gen_range(100..1000))
}

/// Scheduled duration from the HH:MM pair, wrapping past midnight. `None`
/// when either time is unparseable.
fn duration_between(departure: &str, arrival: &str) -> Option<String> {
    let dep = minutes(departure)?;
    let arr = minutes(arrival)?;
    let total = (arr + 24 * 60 - dep) % (24 * 60);
    Some(format!("{}h {}m", total / 60, total % 60))
}

fn minutes(time: &str) -> Option<u32> {
    let (hours, mins) = time.split_once(':')?;
    let hours: u32 = hours.trim().parse().ok()?;
    let mins: u32 = mins.trim().parse().ok()?;
    if hours > 23 || mins > 59 {
        return None;
    }
    Some(hours * 60 + mins)
}
