//! Retail Sales Forecaster Library
//!
//! Collects retail-store attributes and economic indicators, assembles them
//! into a fixed-schema feature vector, and scores the vector with a
//! pre-trained ONNX regression model.

pub mod config;
pub mod error;
pub mod features;
pub mod forecaster;
pub mod metrics;
pub mod models;
pub mod stores;
pub mod types;

pub use config::AppConfig;
pub use error::ForecastError;
pub use features::FeatureAssembler;
pub use forecaster::Forecaster;
pub use models::inference::InferenceEngine;
pub use stores::StoreTable;
pub use types::{forecast::Forecast, request::PredictionRequest};
