pub mod flight;
pub mod predictor;
pub mod query;
pub mod timeslot;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(#[from] query::ValidationError),
    #[error("Prediction failed: {0}")]
    Prediction(#[from] predictor::PredictError),
    #[error("Internal service error: {0}")]
    Internal(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
