//! Prediction request data structures

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Raw user inputs for one weekly-sales prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// Store number (1-45)
    pub store: u32,

    /// Department number (1-99)
    pub dept: u32,

    /// Week being forecast; month and year are extracted from this date
    pub date: NaiveDate,

    /// Whether the week contains a holiday
    pub is_holiday: bool,

    /// Temperature in degrees Fahrenheit
    pub temperature: f64,

    /// Fuel price in dollars
    pub fuel_price: f64,

    /// Consumer price index
    pub cpi: f64,

    /// Unemployment rate in percent
    pub unemployment: f64,

    /// Five promotional markdown amounts in dollars
    pub markdowns: [f64; 5],
}

impl PredictionRequest {
    /// Create a request with the economic inputs at their documented defaults
    /// and all markdowns at zero.
    pub fn new(store: u32, dept: u32, date: NaiveDate) -> Self {
        Self {
            store,
            dept,
            date,
            is_holiday: false,
            temperature: 65.0,
            fuel_price: 3.50,
            cpi: 195.0,
            unemployment: 7.5,
            markdowns: [0.0; 5],
        }
    }
}
