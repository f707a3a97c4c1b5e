use serde::Serialize;

/// Feature vector handed to the trained regressors, one per matched record.
/// `day_of_week` (Monday = 0) and `is_holiday` are request-level: every
/// record in a batch shares the travel date.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FareFeatures {
    pub source_city: String,
    pub destination_city: String,
    pub airline: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub stops: u32,
    pub class: String,
    pub days_left: u32,
    pub day_of_week: u32,
    pub is_holiday: bool,
}

/// Predictor failures signal a startup/configuration defect (wrong model
/// file, schema drift), not a per-record recoverable condition.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    #[error("model is not compatible with the feature schema: {0}")]
    SchemaMismatch(String),
}

/// A trained regression model: features in, one price per row out. The
/// training procedure is someone else's problem; implementations are loaded
/// once at startup and shared read-only across requests.
pub trait FarePredictor: Send + Sync {
    fn predict(&self, rows: &[FareFeatures]) -> Result<Vec<f64>, PredictError>;
}
