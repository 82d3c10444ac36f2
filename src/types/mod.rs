//! Type definitions for the sales forecaster

pub mod forecast;
pub mod request;
pub mod store;

pub use forecast::Forecast;
pub use request::PredictionRequest;
pub use store::{StoreAttributes, StoreCategory, StoreRecord};
