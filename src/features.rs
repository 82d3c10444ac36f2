//! Feature assembly for weekly-sales model inference.
//!
//! This module maps user-supplied and looked-up values into the fixed-order
//! numeric vector the regression model was trained on.

use crate::types::request::PredictionRequest;
use crate::types::store::{StoreAttributes, StoreCategory};
use chrono::Datelike;

/// Number of fields in the model's input schema.
pub const FEATURE_COUNT: usize = 18;

/// Schema field names in vector order.
///
/// The model consumes the vector positionally, so this order must match the
/// column order used during training exactly.
pub fn feature_names() -> [&'static str; FEATURE_COUNT] {
    [
        "Store",
        "Dept",
        "IsHoliday",
        "Size",
        "Temperature",
        "Fuel_Price",
        "MarkDown1",
        "MarkDown2",
        "MarkDown3",
        "MarkDown4",
        "MarkDown5",
        "CPI",
        "Unemployment",
        "Month",
        "Year",
        "Type_A",
        "Type_B",
        "Type_C",
    ]
}

/// Assembler that transforms a prediction request into model input features.
///
/// Features are emitted in the exact order expected by the ONNX model.
pub struct FeatureAssembler;

impl FeatureAssembler {
    /// Create a new feature assembler.
    pub fn new() -> Self {
        Self
    }

    /// Assemble the positional feature vector from a request and the resolved
    /// store attributes.
    ///
    /// Holiday true/false maps to 1/0; month and year come from the request
    /// date; exactly one category indicator is set when the category is known,
    /// none when it is not.
    pub fn assemble(&self, request: &PredictionRequest, attrs: &StoreAttributes) -> Vec<f32> {
        let mut features = Vec::with_capacity(FEATURE_COUNT);

        features.push(request.store as f32);
        features.push(request.dept as f32);
        features.push(if request.is_holiday { 1.0 } else { 0.0 });
        features.push(attrs.size as f32);
        features.push(request.temperature as f32);
        features.push(request.fuel_price as f32);

        for markdown in request.markdowns {
            features.push(markdown as f32);
        }

        features.push(request.cpi as f32);
        features.push(request.unemployment as f32);
        features.push(request.date.month() as f32);
        features.push(request.date.year() as f32);

        // Category one-hot; an unknown category leaves all three at zero
        features.push(if attrs.category == Some(StoreCategory::A) { 1.0 } else { 0.0 });
        features.push(if attrs.category == Some(StoreCategory::B) { 1.0 } else { 0.0 });
        features.push(if attrs.category == Some(StoreCategory::C) { 1.0 } else { 0.0 });

        features
    }

    /// Get the number of features produced.
    pub fn feature_count(&self) -> usize {
        FEATURE_COUNT
    }
}

impl Default for FeatureAssembler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn attrs(size: f64, category: Option<StoreCategory>) -> StoreAttributes {
        StoreAttributes { size, category }
    }

    #[test]
    fn test_vector_matches_schema_for_store_one() {
        // Store 1 per the reference table: category A, size 151315
        let assembler = FeatureAssembler::new();
        let date = NaiveDate::from_ymd_opt(2022, 12, 2).unwrap();
        let request = PredictionRequest::new(1, 1, date);

        let features = assembler.assemble(&request, &attrs(151315.0, Some(StoreCategory::A)));

        assert_eq!(features.len(), FEATURE_COUNT);
        assert_eq!(features[0], 1.0); // Store
        assert_eq!(features[1], 1.0); // Dept
        assert_eq!(features[2], 0.0); // IsHoliday
        assert_eq!(features[3], 151315.0); // Size
        assert_eq!(features[4], 65.0); // Temperature
        assert_eq!(features[5], 3.50); // Fuel_Price
        assert_eq!(&features[6..11], &[0.0; 5]); // MarkDown1-5
        assert_eq!(features[11], 195.0); // CPI
        assert_eq!(features[12], 7.5); // Unemployment
        assert_eq!(features[13], 12.0); // Month
        assert_eq!(features[14], 2022.0); // Year
        assert_eq!(&features[15..18], &[1.0, 0.0, 0.0]); // Type_A, Type_B, Type_C
    }

    #[test]
    fn test_holiday_encoding() {
        let assembler = FeatureAssembler::new();
        let date = NaiveDate::from_ymd_opt(2022, 11, 25).unwrap();
        let mut request = PredictionRequest::new(1, 1, date);

        request.is_holiday = true;
        let features = assembler.assemble(&request, &attrs(100000.0, Some(StoreCategory::A)));
        assert_eq!(features[2], 1.0);

        request.is_holiday = false;
        let features = assembler.assemble(&request, &attrs(100000.0, Some(StoreCategory::A)));
        assert_eq!(features[2], 0.0);
    }

    #[test]
    fn test_one_hot_is_exclusive() {
        let assembler = FeatureAssembler::new();
        let date = NaiveDate::from_ymd_opt(2022, 6, 17).unwrap();
        let request = PredictionRequest::new(5, 10, date);

        for category in [StoreCategory::A, StoreCategory::B, StoreCategory::C] {
            let features = assembler.assemble(&request, &attrs(50000.0, Some(category)));
            let set: f32 = features[15..18].iter().sum();
            assert_eq!(set, 1.0, "exactly one indicator for {}", category);
        }
    }

    #[test]
    fn test_unknown_category_encodes_all_zero() {
        let assembler = FeatureAssembler::new();
        let date = NaiveDate::from_ymd_opt(2022, 6, 17).unwrap();
        let request = PredictionRequest::new(5, 10, date);

        let features = assembler.assemble(&request, &attrs(50000.0, None));
        assert_eq!(&features[15..18], &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_month_year_follow_date() {
        let assembler = FeatureAssembler::new();
        let date = NaiveDate::from_ymd_opt(2010, 2, 5).unwrap();
        let request = PredictionRequest::new(20, 55, date);

        let features = assembler.assemble(&request, &attrs(200000.0, Some(StoreCategory::B)));
        assert_eq!(features[13], 2.0);
        assert_eq!(features[14], 2010.0);
    }

    #[test]
    fn test_markdowns_in_order() {
        let assembler = FeatureAssembler::new();
        let date = NaiveDate::from_ymd_opt(2022, 12, 2).unwrap();
        let mut request = PredictionRequest::new(1, 1, date);
        request.markdowns = [100.0, 200.0, 300.0, 400.0, 500.0];

        let features = assembler.assemble(&request, &attrs(151315.0, Some(StoreCategory::A)));
        assert_eq!(&features[6..11], &[100.0, 200.0, 300.0, 400.0, 500.0]);
    }

    #[test]
    fn test_feature_count() {
        let assembler = FeatureAssembler::new();
        assert_eq!(assembler.feature_count(), FEATURE_COUNT);
        assert_eq!(feature_names().len(), FEATURE_COUNT);
    }
}
