use std::sync::Arc;

use skyfare_core::flight::FlightRecord;
use skyfare_core::predictor::{FareFeatures, FarePredictor, PredictError};

use crate::features::{fare_features, TravelContext};

/// Weight of the holiday-specialized prediction when the travel date is a
/// holiday. A partial blend, not a substitution: the final price moves 75%
/// of the way from the base prediction toward the holiday prediction.
pub const HOLIDAY_BLEND_WEIGHT: f64 = 0.75;

/// Two-stage price model: a base regressor for every request, plus a
/// holiday-specialized regressor blended in when the travel date is a
/// holiday. Both models are injected at startup and shared read-only.
pub struct FareEstimator {
    base: Arc<dyn FarePredictor>,
    holiday: Arc<dyn FarePredictor>,
}

impl FareEstimator {
    pub fn new(base: Arc<dyn FarePredictor>, holiday: Arc<dyn FarePredictor>) -> Self {
        Self { base, holiday }
    }

    /// Predicted price per record, in input order, rounded to 2 decimals.
    /// Predictor failures propagate: they signal a configuration defect, not
    /// a bad request.
    pub fn estimate(
        &self,
        records: &[&FlightRecord],
        ctx: &TravelContext,
    ) -> Result<Vec<f64>, PredictError> {
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let rows: Vec<FareFeatures> = records
            .iter()
            .map(|record| fare_features(record, ctx))
            .collect();

        let base_prices = self.run(self.base.as_ref(), "base", &rows)?;

        // The holiday blend is a request-level decision: all records in a
        // batch share the travel date.
        let prices = if ctx.is_holiday {
            let holiday_prices = self.run(self.holiday.as_ref(), "holiday", &rows)?;
            base_prices
                .into_iter()
                .zip(holiday_prices)
                .map(|(base, holiday)| base + (holiday - base) * HOLIDAY_BLEND_WEIGHT)
                .collect()
        } else {
            base_prices
        };

        Ok(prices.into_iter().map(round2).collect())
    }

    fn run(
        &self,
        model: &dyn FarePredictor,
        which: &str,
        rows: &[FareFeatures],
    ) -> Result<Vec<f64>, PredictError> {
        let prices = model.predict(rows)?;
        if prices.len() != rows.len() {
            return Err(PredictError::SchemaMismatch(format!(
                "{which} model returned {} prices for {} rows",
                prices.len(),
                rows.len()
            )));
        }
        Ok(prices)
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use skyfare_store::HolidayMap;

    /// Constant-output regressor for exercising the blend arithmetic.
    struct Fixed(f64);

    impl FarePredictor for Fixed {
        fn predict(&self, rows: &[FareFeatures]) -> Result<Vec<f64>, PredictError> {
            Ok(vec![self.0; rows.len()])
        }
    }

    /// Misbehaving regressor that drops rows.
    struct Truncating;

    impl FarePredictor for Truncating {
        fn predict(&self, _rows: &[FareFeatures]) -> Result<Vec<f64>, PredictError> {
            Ok(Vec::new())
        }
    }

    fn record() -> FlightRecord {
        FlightRecord {
            airline: "Indigo".to_string(),
            source_city: "Delhi".to_string(),
            destination_city: "Mumbai".to_string(),
            departure_time: "06:10".to_string(),
            arrival_time: "08:20".to_string(),
            stops: 0,
            class: "Economy".to_string(),
            days_left: 5,
            price: 4250.0,
        }
    }

    fn context(is_holiday: bool) -> TravelContext {
        let holidays = if is_holiday {
            HolidayMap::from_entries([("2026-08-15".to_string(), "Independence Day".to_string())])
        } else {
            HolidayMap::default()
        };
        TravelContext::derive(NaiveDate::from_ymd_opt(2026, 8, 15).unwrap(), &holidays)
    }

    #[test]
    fn test_non_holiday_price_is_base_output() {
        let estimator = FareEstimator::new(Arc::new(Fixed(4000.0)), Arc::new(Fixed(5000.0)));
        let record = record();
        let prices = estimator.estimate(&[&record], &context(false)).unwrap();
        assert_eq!(prices, vec![4000.0]);
    }

    #[test]
    fn test_holiday_blend_is_three_quarters_toward_holiday() {
        let estimator = FareEstimator::new(Arc::new(Fixed(4000.0)), Arc::new(Fixed(5000.0)));
        let record = record();
        let prices = estimator.estimate(&[&record], &context(true)).unwrap();
        // 4000 + (5000 - 4000) * 0.75
        assert_eq!(prices, vec![4750.0]);
    }

    #[test]
    fn test_prices_rounded_to_two_decimals() {
        let estimator = FareEstimator::new(Arc::new(Fixed(4000.123_9)), Arc::new(Fixed(0.0)));
        let record = record();
        let prices = estimator.estimate(&[&record], &context(false)).unwrap();
        assert_eq!(prices, vec![4000.12]);
    }

    #[test]
    fn test_empty_batch_skips_models() {
        let estimator = FareEstimator::new(Arc::new(Truncating), Arc::new(Truncating));
        assert_eq!(estimator.estimate(&[], &context(false)).unwrap(), Vec::<f64>::new());
    }

    #[test]
    fn test_row_count_mismatch_is_schema_error() {
        let estimator = FareEstimator::new(Arc::new(Truncating), Arc::new(Fixed(0.0)));
        let record = record();
        let result = estimator.estimate(&[&record], &context(false));
        assert!(matches!(result, Err(PredictError::SchemaMismatch(_))));
    }
}
