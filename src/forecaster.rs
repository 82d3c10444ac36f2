//! Resource initialization and the prediction gate.
//!
//! `Forecaster::initialize` is the explicit load-once step: it attempts both
//! resource loads and produces an immutable handle holding their states. There
//! is no reload and no global cache.

use crate::config::AppConfig;
use crate::error::ForecastError;
use crate::features::FeatureAssembler;
use crate::models::inference::InferenceEngine;
use crate::stores::StoreTable;
use crate::types::forecast::Forecast;
use crate::types::request::PredictionRequest;
use crate::types::store::{StoreAttributes, StoreCategory};
use std::time::Instant;
use tracing::{debug, warn};

/// Immutable handle over the loaded model and store table
pub struct Forecaster {
    model: Option<InferenceEngine>,
    stores: Option<StoreTable>,
    assembler: FeatureAssembler,
    fallback: StoreAttributes,
}

impl Forecaster {
    /// Attempt both resource loads once.
    ///
    /// Load failures are recovered here: logged as warnings and represented as
    /// unavailable states, never propagated as faults.
    pub fn initialize(config: &AppConfig) -> Self {
        let model =
            match InferenceEngine::load(&config.resources.model_path, config.resources.onnx_threads)
            {
                Ok(engine) => Some(engine),
                Err(e) => {
                    warn!(
                        path = %config.resources.model_path,
                        error = %e,
                        "Sales model unavailable"
                    );
                    None
                }
            };

        let stores = match StoreTable::load(&config.resources.stores_path) {
            Ok(table) => Some(table),
            Err(e) => {
                warn!(
                    path = %config.resources.stores_path,
                    error = %e,
                    "Store reference table unavailable"
                );
                None
            }
        };

        let fallback = StoreAttributes {
            size: config.fallback.size,
            category: StoreCategory::from_label(&config.fallback.category),
        };

        Self {
            model,
            stores,
            assembler: FeatureAssembler::new(),
            fallback,
        }
    }

    pub fn model_available(&self) -> bool {
        self.model.is_some()
    }

    pub fn stores_available(&self) -> bool {
        self.stores.is_some()
    }

    /// Known store numbers for closed-set selection, when the table loaded.
    pub fn store_numbers(&self) -> Option<Vec<u32>> {
        self.stores.as_ref().map(|table| table.store_numbers())
    }

    /// Resolve the size and category for a store.
    ///
    /// Falls back to the configured defaults when the table is unavailable or
    /// the store is not present in it.
    pub fn store_attributes(&self, store: u32) -> StoreAttributes {
        match self.stores.as_ref().and_then(|table| table.get(store)) {
            Some(record) => StoreAttributes {
                size: record.size,
                category: record.category,
            },
            None => self.fallback,
        }
    }

    /// Assemble the feature vector and run inference.
    ///
    /// Precondition: both resources must have loaded. If either is
    /// unavailable the typed error is returned and no vector is assembled.
    pub fn predict(&self, request: &PredictionRequest) -> Result<Forecast, ForecastError> {
        if self.stores.is_none() {
            return Err(ForecastError::StoresUnavailable);
        }
        let model = self.model.as_ref().ok_or(ForecastError::ModelUnavailable)?;

        let attrs = self.store_attributes(request.store);
        let features = self.assembler.assemble(request, &attrs);

        let start = Instant::now();
        let weekly_sales = model.predict(&features)?;
        debug!(
            store = request.store,
            dept = request.dept,
            weekly_sales,
            latency_us = start.elapsed().as_micros() as u64,
            "Prediction complete"
        );

        Ok(Forecast::new(weekly_sales, features))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn config_with_missing_resources() -> AppConfig {
        let mut config = AppConfig::default();
        config.resources.model_path = "data/missing_model.onnx".to_string();
        config.resources.stores_path = "data/missing_stores.csv".to_string();
        config
    }

    fn config_with_table_but_no_model() -> AppConfig {
        let mut config = AppConfig::default();
        config.resources.model_path = "data/missing_model.onnx".to_string();
        config.resources.stores_path = "tests/data/stores.csv".to_string();
        config
    }

    fn request() -> PredictionRequest {
        let date = NaiveDate::from_ymd_opt(2022, 12, 2).unwrap();
        PredictionRequest::new(1, 1, date)
    }

    #[test]
    fn test_missing_resources_are_unavailable_not_fatal() {
        let forecaster = Forecaster::initialize(&config_with_missing_resources());
        assert!(!forecaster.model_available());
        assert!(!forecaster.stores_available());
        assert!(forecaster.store_numbers().is_none());
    }

    #[test]
    fn test_missing_table_reports_stores_unavailable() {
        let forecaster = Forecaster::initialize(&config_with_missing_resources());

        match forecaster.predict(&request()) {
            Err(ForecastError::StoresUnavailable) => {}
            other => panic!(
                "expected StoresUnavailable, got {:?}",
                other.map(|f| f.weekly_sales)
            ),
        }
    }

    #[test]
    fn test_missing_model_with_table_present() {
        let forecaster = Forecaster::initialize(&config_with_table_but_no_model());
        assert!(forecaster.stores_available());
        assert!(!forecaster.model_available());

        // The table still serves lookups and the closed set of store numbers
        assert_eq!(forecaster.store_numbers(), Some(vec![1, 2, 3, 4, 5]));
        let attrs = forecaster.store_attributes(1);
        assert_eq!(attrs.size, 151315.0);
        assert_eq!(attrs.category, Some(StoreCategory::A));

        // But the prediction trigger reports the missing model and stops
        match forecaster.predict(&request()) {
            Err(ForecastError::ModelUnavailable) => {}
            other => panic!(
                "expected ModelUnavailable, got {:?}",
                other.map(|f| f.weekly_sales)
            ),
        }
    }

    #[test]
    fn test_fallback_attributes_without_table() {
        let forecaster = Forecaster::initialize(&config_with_missing_resources());
        let attrs = forecaster.store_attributes(1);
        assert_eq!(attrs.size, 150000.0);
        assert_eq!(attrs.category, Some(StoreCategory::A));
    }
}
