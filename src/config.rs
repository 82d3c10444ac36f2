//! Configuration management for the sales forecaster

use anyhow::{Context, Result};
use chrono::NaiveDate;
use config::{Config, File};
use serde::Deserialize;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub resources: ResourcesConfig,
    pub form: FormConfig,
    pub fallback: FallbackConfig,
    pub logging: LoggingConfig,
}

/// Filesystem resources loaded once at startup
#[derive(Debug, Clone, Deserialize)]
pub struct ResourcesConfig {
    /// Path to the serialized ONNX regression model
    pub model_path: String,
    /// Path to the store reference table CSV
    pub stores_path: String,
    /// Number of threads for ONNX inference (default: 1)
    #[serde(default = "default_onnx_threads")]
    pub onnx_threads: usize,
}

fn default_onnx_threads() -> usize {
    1
}

/// Input form ranges and defaults
#[derive(Debug, Clone, Deserialize)]
pub struct FormConfig {
    /// Store number range used when the reference table is unavailable
    pub store_min: u32,
    pub store_max: u32,
    /// Department number range
    pub dept_min: u32,
    pub dept_max: u32,
    /// Default forecast date
    pub default_date: NaiveDate,
    pub temperature: SliderConfig,
    pub fuel_price: SliderConfig,
    pub cpi: SliderConfig,
    pub unemployment: SliderConfig,
}

/// Bounded numeric input with a default value and step
#[derive(Debug, Clone, Deserialize)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
}

/// Store attributes substituted when the reference table is unavailable
#[derive(Debug, Clone, Deserialize)]
pub struct FallbackConfig {
    pub size: f64,
    pub category: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log format (json, pretty)
    pub format: String,
}

impl AppConfig {
    /// Load configuration from file
    pub fn load() -> Result<Self> {
        Self::load_from_path("config/config.toml")
    }

    /// Load configuration from a specific path
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            resources: ResourcesConfig {
                model_path: "data/sales_forecast.onnx".to_string(),
                stores_path: "data/stores.csv".to_string(),
                onnx_threads: 1,
            },
            form: FormConfig {
                store_min: 1,
                store_max: 45,
                dept_min: 1,
                dept_max: 99,
                default_date: NaiveDate::from_ymd_opt(2022, 12, 2).unwrap_or_default(),
                temperature: SliderConfig {
                    min: -10.0,
                    max: 110.0,
                    default: 65.0,
                    step: 0.5,
                },
                fuel_price: SliderConfig {
                    min: 2.00,
                    max: 5.00,
                    default: 3.50,
                    step: 0.01,
                },
                cpi: SliderConfig {
                    min: 120.0,
                    max: 230.0,
                    default: 195.0,
                    step: 0.1,
                },
                unemployment: SliderConfig {
                    min: 3.0,
                    max: 15.0,
                    default: 7.5,
                    step: 0.1,
                },
            },
            fallback: FallbackConfig {
                size: 150000.0,
                category: "A".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.resources.model_path, "data/sales_forecast.onnx");
        assert_eq!(config.resources.onnx_threads, 1);
        assert_eq!(config.form.store_max, 45);
        assert_eq!(config.form.dept_max, 99);
        assert_eq!(config.fallback.size, 150000.0);
        assert_eq!(config.fallback.category, "A");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_default_sliders() {
        let form = AppConfig::default().form;
        assert_eq!(form.temperature.default, 65.0);
        assert_eq!(form.fuel_price.default, 3.50);
        assert_eq!(form.cpi.default, 195.0);
        assert_eq!(form.unemployment.default, 7.5);
        assert!(form.temperature.min < form.temperature.max);
    }

    #[test]
    fn test_default_date() {
        let form = AppConfig::default().form;
        assert_eq!(
            form.default_date,
            NaiveDate::from_ymd_opt(2022, 12, 2).unwrap()
        );
    }
}
