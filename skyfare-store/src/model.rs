use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use skyfare_core::predictor::{FareFeatures, FarePredictor, PredictError};
use skyfare_core::timeslot::TimeSlot;

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("failed to read model file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed model file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A trained fare regressor in serialized additive form: an intercept,
/// per-category weight tables, and numeric coefficients. Unknown category
/// values contribute zero weight, matching the training-side encoder which
/// ignores categories it never saw. Departure/arrival times enter the model
/// through their time-slot bucket.
#[derive(Debug, Clone, Deserialize)]
pub struct LinearFareModel {
    pub intercept: f64,
    #[serde(default)]
    pub airline: HashMap<String, f64>,
    #[serde(default)]
    pub source_city: HashMap<String, f64>,
    #[serde(default)]
    pub destination_city: HashMap<String, f64>,
    #[serde(default)]
    pub class: HashMap<String, f64>,
    #[serde(default)]
    pub departure_slot: HashMap<String, f64>,
    #[serde(default)]
    pub arrival_slot: HashMap<String, f64>,
    /// Additive weight per weekday, Monday first. Missing entries are zero.
    #[serde(default)]
    pub day_of_week: Vec<f64>,
    #[serde(default)]
    pub stops_weight: f64,
    #[serde(default)]
    pub days_left_weight: f64,
    #[serde(default)]
    pub holiday_weight: f64,
}

impl LinearFareModel {
    /// Load a model file. A missing or malformed file is a fatal
    /// configuration error surfaced at startup.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let model: Self = serde_json::from_str(&raw).map_err(|source| ModelError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        tracing::info!(path = %path.display(), "fare model loaded");
        Ok(model)
    }

    fn score(&self, row: &FareFeatures) -> f64 {
        let category = |table: &HashMap<String, f64>, key: &str| {
            table.get(key).copied().unwrap_or(0.0)
        };

        let mut price = self.intercept;
        price += category(&self.airline, &row.airline);
        price += category(&self.source_city, &row.source_city);
        price += category(&self.destination_city, &row.destination_city);
        price += category(&self.class, &row.class);
        price += category(
            &self.departure_slot,
            TimeSlot::from_hhmm(&row.departure_time).key(),
        );
        price += category(
            &self.arrival_slot,
            TimeSlot::from_hhmm(&row.arrival_time).key(),
        );
        price += self
            .day_of_week
            .get(row.day_of_week as usize)
            .copied()
            .unwrap_or(0.0);
        price += self.stops_weight * f64::from(row.stops);
        price += self.days_left_weight * f64::from(row.days_left);
        if row.is_holiday {
            price += self.holiday_weight;
        }
        price
    }
}

impl FarePredictor for LinearFareModel {
    fn predict(&self, rows: &[FareFeatures]) -> Result<Vec<f64>, PredictError> {
        Ok(rows.iter().map(|row| self.score(row)).collect())
    }
}
