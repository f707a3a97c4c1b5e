pub mod app_config;
pub mod dataset;
pub mod holiday;
pub mod model;

pub use dataset::{Dataset, DatasetError};
pub use holiday::HolidayMap;
pub use model::{LinearFareModel, ModelError};
