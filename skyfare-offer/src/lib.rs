pub mod display;
pub mod estimator;
pub mod features;
pub mod matcher;
pub mod models;
pub mod service;
pub mod shaper;

pub use display::DisplayEnricher;
pub use estimator::FareEstimator;
pub use models::{EnrichedFlight, FacetSummary, SlotFacet, StopFacet};
pub use service::FareService;
