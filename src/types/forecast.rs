//! Forecast result data structures

use crate::features;
use serde::{Deserialize, Serialize};

/// Result of one prediction: the scalar plus the vector that produced it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Forecast {
    /// Predicted weekly sales in dollars; not guaranteed non-negative
    pub weekly_sales: f64,

    /// The positional feature vector sent to the model, for inspection
    pub features: Vec<f32>,
}

impl Forecast {
    pub fn new(weekly_sales: f64, features: Vec<f32>) -> Self {
        Self {
            weekly_sales,
            features,
        }
    }

    /// Currency-formatted prediction, e.g. `$24,924.50`.
    pub fn formatted_sales(&self) -> String {
        format_currency(self.weekly_sales)
    }

    /// Feature values paired with their schema names, in vector order.
    pub fn named_features(&self) -> impl Iterator<Item = (&'static str, f32)> + '_ {
        features::feature_names()
            .into_iter()
            .zip(self.features.iter().copied())
    }
}

/// Format a dollar amount with thousands separators and two decimals.
pub fn format_currency(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, frac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(24924.5), "$24,924.50");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(999.999), "$1,000.00");
        assert_eq!(format_currency(-123.45), "-$123.45");
    }

    #[test]
    fn test_named_features_pairs_in_order() {
        let features: Vec<f32> = (0..features::FEATURE_COUNT).map(|i| i as f32).collect();
        let forecast = Forecast::new(100.0, features);

        let named: Vec<(&str, f32)> = forecast.named_features().collect();
        assert_eq!(named.len(), features::FEATURE_COUNT);
        assert_eq!(named[0], ("Store", 0.0));
        assert_eq!(named[17], ("Type_C", 17.0));
    }
}
