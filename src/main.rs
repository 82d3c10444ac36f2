//! Retail Sales Forecaster - Main Entry Point
//!
//! Interactive terminal form: collects store attributes and economic
//! indicators, runs the regression model, and displays the predicted
//! weekly sales.

use anyhow::Result;
use chrono::NaiveDate;
use retail_sales_forecaster::{
    config::{AppConfig, SliderConfig},
    features::FEATURE_COUNT,
    forecaster::Forecaster,
    metrics::SessionStats,
    types::request::PredictionRequest,
};
use std::io::{self, BufRead, Write};
use std::time::Instant;
use tracing::{info, warn};

fn main() -> Result<()> {
    // Load configuration; a missing config file falls back to defaults
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Using default configuration ({})", e);
            AppConfig::default()
        }
    };

    // Initialize logging in the configured format
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(format!("retail_sales_forecaster={}", config.logging.level).parse()?);
    if config.logging.format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    info!("Starting Retail Sales Forecaster");

    // One-time resource load; failures become visible warnings
    let forecaster = Forecaster::initialize(&config);
    if !forecaster.model_available() {
        warn!(path = %config.resources.model_path, "Model artifact missing; predictions are disabled");
        println!(
            "WARNING: model artifact '{}' not found. Predictions are disabled.",
            config.resources.model_path
        );
    }
    if !forecaster.stores_available() {
        warn!(path = %config.resources.stores_path, "Store table missing; predictions are disabled");
        println!(
            "WARNING: store table '{}' not found. Predictions are disabled.",
            config.resources.stores_path
        );
    }

    println!("=== Retail Sales Forecaster ===");
    println!("Predicts weekly sales from store attributes and economic factors.");
    println!("Press Enter at any prompt to accept the shown default.\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stats = SessionStats::new();

    loop {
        let Some(request) = collect_request(&mut lines, &forecaster, &config)? else {
            break;
        };

        let start = Instant::now();
        match forecaster.predict(&request) {
            Ok(forecast) => {
                stats.record_prediction(start.elapsed());
                println!("\nPredicted Weekly Sales: {}", forecast.formatted_sales());
                println!("Data sent to the model ({} fields):", FEATURE_COUNT);
                for (name, value) in forecast.named_features() {
                    println!("  {:>12} = {}", name, value);
                }
            }
            Err(e) => {
                stats.record_failure();
                println!("\nCannot predict: {}", e);
            }
        }

        match read_line(&mut lines, "\nPress Enter for another forecast, or q to quit")? {
            Some(answer) if answer.eq_ignore_ascii_case("q") => break,
            Some(_) => println!(),
            None => break,
        }
    }

    stats.print_summary();
    Ok(())
}

/// Collect one full prediction request from the form.
///
/// Returns `None` when input ends mid-form.
fn collect_request<B: BufRead>(
    lines: &mut io::Lines<B>,
    forecaster: &Forecaster,
    config: &AppConfig,
) -> Result<Option<PredictionRequest>> {
    let form = &config.form;

    let Some(store) = prompt_store(lines, forecaster, config)? else {
        return Ok(None);
    };

    // Mirror the looked-up attributes back to the user
    let attrs = forecaster.store_attributes(store);
    match attrs.category {
        Some(category) => println!(
            "  Store details: Type {}, Size {:.0} sq ft",
            category, attrs.size
        ),
        None => println!("  Store details: unknown type, Size {:.0} sq ft", attrs.size),
    }

    let Some(dept) = prompt_u32(
        lines,
        "Department number",
        form.dept_min,
        form.dept_max,
        form.dept_min,
    )?
    else {
        return Ok(None);
    };
    let Some(date) = prompt_date(lines, "Date (YYYY-MM-DD)", form.default_date)? else {
        return Ok(None);
    };
    let Some(is_holiday) = prompt_bool(lines, "Holiday week? (y/n)", true)? else {
        return Ok(None);
    };

    let Some(temperature) = prompt_slider(lines, "Temperature (F)", &form.temperature)? else {
        return Ok(None);
    };
    let Some(fuel_price) = prompt_slider(lines, "Fuel price ($)", &form.fuel_price)? else {
        return Ok(None);
    };
    let Some(cpi) = prompt_slider(lines, "Consumer price index", &form.cpi)? else {
        return Ok(None);
    };
    let Some(unemployment) = prompt_slider(lines, "Unemployment rate (%)", &form.unemployment)?
    else {
        return Ok(None);
    };

    let mut markdowns = [0.0; 5];
    for (i, markdown) in markdowns.iter_mut().enumerate() {
        let Some(amount) = prompt_amount(lines, &format!("Markdown {} ($)", i + 1))? else {
            return Ok(None);
        };
        *markdown = amount;
    }

    Ok(Some(PredictionRequest {
        store,
        dept,
        date,
        is_holiday,
        temperature,
        fuel_price,
        cpi,
        unemployment,
        markdowns,
    }))
}

/// Prompt for a store number.
///
/// When the reference table loaded, the selection is restricted to its store
/// numbers; otherwise any number in the configured range is accepted.
fn prompt_store<B: BufRead>(
    lines: &mut io::Lines<B>,
    forecaster: &Forecaster,
    config: &AppConfig,
) -> Result<Option<u32>> {
    match forecaster.store_numbers() {
        Some(numbers) => {
            let first = numbers[0];
            let last = numbers[numbers.len() - 1];
            let label = format!("Store number [{}-{}, default {}]", first, last, first);
            loop {
                let Some(raw) = read_line(lines, &label)? else {
                    return Ok(None);
                };
                if raw.is_empty() {
                    return Ok(Some(first));
                }
                match raw.parse::<u32>() {
                    Ok(store) if numbers.contains(&store) => return Ok(Some(store)),
                    _ => println!("  Not a known store number."),
                }
            }
        }
        None => prompt_u32(
            lines,
            "Store number",
            config.form.store_min,
            config.form.store_max,
            config.form.store_min,
        ),
    }
}

fn read_line<B: BufRead>(lines: &mut io::Lines<B>, label: &str) -> Result<Option<String>> {
    print!("{}: ", label);
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

fn prompt_u32<B: BufRead>(
    lines: &mut io::Lines<B>,
    label: &str,
    min: u32,
    max: u32,
    default: u32,
) -> Result<Option<u32>> {
    let label = format!("{} [{}-{}, default {}]", label, min, max, default);
    loop {
        let Some(raw) = read_line(lines, &label)? else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(Some(default));
        }
        match raw.parse::<u32>() {
            Ok(value) if (min..=max).contains(&value) => return Ok(Some(value)),
            _ => println!("  Enter a whole number between {} and {}.", min, max),
        }
    }
}

fn prompt_slider<B: BufRead>(
    lines: &mut io::Lines<B>,
    label: &str,
    slider: &SliderConfig,
) -> Result<Option<f64>> {
    let label = format!(
        "{} [{}..{}, default {}]",
        label, slider.min, slider.max, slider.default
    );
    loop {
        let Some(raw) = read_line(lines, &label)? else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(Some(slider.default));
        }
        match raw.parse::<f64>() {
            Ok(value) if value >= slider.min && value <= slider.max => return Ok(Some(value)),
            _ => println!("  Enter a number between {} and {}.", slider.min, slider.max),
        }
    }
}

fn prompt_amount<B: BufRead>(lines: &mut io::Lines<B>, label: &str) -> Result<Option<f64>> {
    let label = format!("{} [default 0]", label);
    loop {
        let Some(raw) = read_line(lines, &label)? else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(Some(0.0));
        }
        match raw.parse::<f64>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("  Enter a dollar amount."),
        }
    }
}

fn prompt_bool<B: BufRead>(
    lines: &mut io::Lines<B>,
    label: &str,
    default: bool,
) -> Result<Option<bool>> {
    let shown = if default { "y" } else { "n" };
    let label = format!("{} [default {}]", label, shown);
    loop {
        let Some(raw) = read_line(lines, &label)? else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(Some(default));
        }
        match raw.to_ascii_lowercase().as_str() {
            "y" | "yes" | "true" => return Ok(Some(true)),
            "n" | "no" | "false" => return Ok(Some(false)),
            _ => println!("  Enter y or n."),
        }
    }
}

fn prompt_date<B: BufRead>(
    lines: &mut io::Lines<B>,
    label: &str,
    default: NaiveDate,
) -> Result<Option<NaiveDate>> {
    let label = format!("{} [default {}]", label, default);
    loop {
        let Some(raw) = read_line(lines, &label)? else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(Some(default));
        }
        match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
            Ok(date) => return Ok(Some(date)),
            Err(_) => println!("  Enter a date as YYYY-MM-DD."),
        }
    }
}
