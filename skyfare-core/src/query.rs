use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::flight::capitalize;

/// Raw per-request lookup parameters, exactly as the serving layer received
/// them. Everything is optional here; `validate` decides what is usable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuerySpec {
    pub source: Option<String>,
    pub destination: Option<String>,
    pub flight_class: Option<String>,
    /// ISO calendar date, "YYYY-MM-DD".
    pub travel_date: Option<String>,
    pub sort_by: Option<String>,
    #[serde(default)]
    pub filters: Filters,
}

/// Post-filters, each an optional comma-separated allow-list (or a single
/// numeric bound for `max_price`). Combined with logical AND.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Filters {
    pub airline: Option<String>,
    pub stops: Option<String>,
    pub max_price: Option<String>,
    pub departure_time: Option<String>,
    pub arrival_time: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Fewer stops first, then earlier departure, then cheaper.
    Best,
    /// Cheapest first, ties broken by lead time.
    Cheapest,
}

impl SortMode {
    /// Anything other than "best" falls back to cheapest-first.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("best") => SortMode::Best,
            _ => SortMode::Cheapest,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("invalid travel date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// A query that passed validation: cities split from their airport codes,
/// cabin class capitalized, travel date parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedQuery {
    pub source_city: String,
    pub source_code: Option<String>,
    pub destination_city: String,
    pub destination_code: Option<String>,
    pub cabin_class: String,
    pub travel_date: NaiveDate,
    pub sort_by: SortMode,
}

impl QuerySpec {
    /// Check the four required fields and parse the travel date. Callers
    /// degrade the error to an empty result set; nothing here raises.
    pub fn validate(&self) -> Result<ValidatedQuery, ValidationError> {
        let source = required(&self.source, "source")?;
        let destination = required(&self.destination, "destination")?;
        let class = required(&self.flight_class, "class")?;
        let date_raw = required(&self.travel_date, "date")?;

        let travel_date = NaiveDate::parse_from_str(date_raw, "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidDate(date_raw.to_string()))?;

        let (source_city, source_code) = split_city_code(source);
        let (destination_city, destination_code) = split_city_code(destination);

        Ok(ValidatedQuery {
            source_city,
            source_code,
            destination_city,
            destination_code,
            cabin_class: capitalize(class),
            travel_date,
            sort_by: SortMode::parse(self.sort_by.as_deref()),
        })
    }
}

fn required<'a>(
    value: &'a Option<String>,
    field: &'static str,
) -> Result<&'a str, ValidationError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() && v != "null" => Ok(v),
        _ => Err(ValidationError::MissingField(field)),
    }
}

/// Split a display city like "Chennai (MAA)" into the bare city name and the
/// parenthesized airport code. Pure string work, independent of matching.
pub fn split_city_code(raw: &str) -> (String, Option<String>) {
    let trimmed = raw.trim();
    if let Some(open) = trimmed.find('(') {
        if let Some(inner) = trimmed[open + 1..].strip_suffix(')') {
            let city = trimmed[..open].trim();
            let code = inner.trim();
            if !city.is_empty() && !code.is_empty() {
                return (city.to_string(), Some(code.to_string()));
            }
        }
    }
    (trimmed.to_string(), None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_query() -> QuerySpec {
        QuerySpec {
            source: Some("Delhi (DEL)".to_string()),
            destination: Some("Mumbai (BOM)".to_string()),
            flight_class: Some("economy".to_string()),
            travel_date: Some("2026-08-15".to_string()),
            sort_by: Some("best".to_string()),
            filters: Filters::default(),
        }
    }

    #[test]
    fn test_valid_query() {
        let validated = full_query().validate().expect("query should validate");
        assert_eq!(validated.source_city, "Delhi");
        assert_eq!(validated.source_code.as_deref(), Some("DEL"));
        assert_eq!(validated.destination_city, "Mumbai");
        assert_eq!(validated.cabin_class, "Economy");
        assert_eq!(
            validated.travel_date,
            NaiveDate::from_ymd_opt(2026, 8, 15).unwrap()
        );
        assert_eq!(validated.sort_by, SortMode::Best);
    }

    #[test]
    fn test_missing_fields_rejected() {
        for field in ["source", "destination", "class", "date"] {
            let mut query = full_query();
            match field {
                "source" => query.source = None,
                "destination" => query.destination = Some("  ".to_string()),
                "class" => query.flight_class = Some(String::new()),
                _ => query.travel_date = Some("null".to_string()),
            }
            assert_eq!(
                query.validate(),
                Err(ValidationError::MissingField(field)),
                "field {field} should be required"
            );
        }
    }

    #[test]
    fn test_bad_date_rejected() {
        let mut query = full_query();
        query.travel_date = Some("15-08-2026".to_string());
        assert_eq!(
            query.validate(),
            Err(ValidationError::InvalidDate("15-08-2026".to_string()))
        );
    }

    #[test]
    fn test_sort_mode_defaults_to_cheapest() {
        assert_eq!(SortMode::parse(Some("best")), SortMode::Best);
        assert_eq!(SortMode::parse(Some("cheap")), SortMode::Cheapest);
        assert_eq!(SortMode::parse(Some("price")), SortMode::Cheapest);
        assert_eq!(SortMode::parse(None), SortMode::Cheapest);
    }

    #[test]
    fn test_split_city_code() {
        assert_eq!(
            split_city_code("Chennai (MAA)"),
            ("Chennai".to_string(), Some("MAA".to_string()))
        );
        assert_eq!(split_city_code("Delhi"), ("Delhi".to_string(), None));
        assert_eq!(split_city_code(" Delhi  "), ("Delhi".to_string(), None));
        assert_eq!(split_city_code("(DEL)"), ("(DEL)".to_string(), None));
    }

    #[test]
    fn test_query_deserialization() {
        let json = r#"
            {
                "source": "Delhi",
                "destination": "Mumbai",
                "flight_class": "Economy",
                "travel_date": "2026-08-15",
                "sort_by": "cheap",
                "filters": { "airline": "Indigo,Vistara" }
            }
        "#;
        let query: QuerySpec = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(query.filters.airline.as_deref(), Some("Indigo,Vistara"));
        assert!(query.validate().is_ok());
    }
}
