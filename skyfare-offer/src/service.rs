use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use skyfare_core::predictor::FarePredictor;
use skyfare_core::query::{QuerySpec, ValidatedQuery};
use skyfare_core::CoreResult;
use skyfare_store::{Dataset, HolidayMap};

use crate::display::DisplayEnricher;
use crate::estimator::FareEstimator;
use crate::features::TravelContext;
use crate::matcher::match_flights;
use crate::models::{EnrichedFlight, FacetSummary};
use crate::shaper::{apply_filters, bound_results, compute_facets, sort_flights};

/// The request pipeline behind the lookup and facet operations: dataset,
/// models, holiday calendar, and display tables, all loaded once at startup
/// and shared read-only. Each request builds its own working set and discards
/// it; nothing here mutates between requests.
pub struct FareService {
    dataset: Arc<Dataset>,
    estimator: FareEstimator,
    holidays: HolidayMap,
    display: DisplayEnricher,
}

impl FareService {
    pub fn new(
        dataset: Arc<Dataset>,
        base_model: Arc<dyn FarePredictor>,
        holiday_model: Arc<dyn FarePredictor>,
        holidays: HolidayMap,
        display: DisplayEnricher,
    ) -> Self {
        Self {
            dataset,
            estimator: FareEstimator::new(base_model, holiday_model),
            holidays,
            display,
        }
    }

    /// Match, price, enrich, sort, filter. A malformed query degrades to the
    /// empty list; only predictor faults surface as errors.
    pub fn lookup(&self, query: &QuerySpec) -> CoreResult<Vec<EnrichedFlight>> {
        self.lookup_as_of(query, Utc::now().date_naive())
    }

    /// `lookup` with an injected "today" for deterministic lead times.
    pub fn lookup_as_of(
        &self,
        query: &QuerySpec,
        today: NaiveDate,
    ) -> CoreResult<Vec<EnrichedFlight>> {
        let validated = match query.validate() {
            Ok(validated) => validated,
            Err(err) => {
                tracing::debug!(%err, "degrading fare lookup to empty result");
                return Ok(Vec::new());
            }
        };

        let mut flights = self.priced_flights(&validated, today)?;
        sort_flights(&mut flights, validated.sort_by);
        let mut flights = apply_filters(flights, &query.filters);
        bound_results(&mut flights);
        Ok(flights)
    }

    /// Filter options for a query, computed over the unfiltered matches.
    pub fn facets(&self, query: &QuerySpec) -> CoreResult<FacetSummary> {
        self.facets_as_of(query, Utc::now().date_naive())
    }

    pub fn facets_as_of(&self, query: &QuerySpec, today: NaiveDate) -> CoreResult<FacetSummary> {
        let validated = match query.validate() {
            Ok(validated) => validated,
            Err(err) => {
                tracing::debug!(%err, "degrading facet computation to zero summary");
                return Ok(FacetSummary::default());
            }
        };

        let flights = self.priced_flights(&validated, today)?;
        Ok(compute_facets(&flights))
    }

    fn priced_flights(
        &self,
        query: &ValidatedQuery,
        today: NaiveDate,
    ) -> CoreResult<Vec<EnrichedFlight>> {
        let matches = match_flights(&self.dataset, query, today);
        if matches.is_empty() {
            return Ok(Vec::new());
        }

        let ctx = TravelContext::derive(query.travel_date, &self.holidays);
        let prices = self.estimator.estimate(&matches, &ctx)?;

        Ok(matches
            .iter()
            .zip(prices)
            .map(|(record, price)| self.display.enrich(record, query, &ctx, price))
            .collect())
    }
}
