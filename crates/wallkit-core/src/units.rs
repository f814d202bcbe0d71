//! Unit conversion utilities
//!
//! Model space is always millimeters. Handles display formatting for metric,
//! imperial and meter read-outs, and parsing of user-typed lengths including
//! fractional inches.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MM_PER_INCH: f64 = 25.4;

/// Measurement system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Metric system (mm)
    #[default]
    Metric,
    /// Imperial system (inches)
    Imperial,
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "Metric"),
            Self::Imperial => write!(f, "Imperial"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "mm" => Ok(Self::Metric),
            "imperial" | "inch" | "in" => Ok(Self::Imperial),
            _ => Err(format!("Unknown measurement system: {}", s)),
        }
    }
}

/// Format length value for display
///
/// * `value_mm` - Value in millimeters
/// * `system` - Target measurement system
pub fn format_length(value_mm: f64, system: MeasurementSystem) -> String {
    match system {
        MeasurementSystem::Metric => format!("{:.3}", value_mm),
        MeasurementSystem::Imperial => format!("{:.3}", value_mm / MM_PER_INCH),
    }
}

/// Format a millimeter length as meters, with precision that shrinks as the
/// value grows (wall labels on the canvas).
pub fn format_meters(value_mm: f64) -> String {
    let meters = value_mm / 1000.0;
    let magnitude = meters.abs();
    if magnitude >= 100.0 {
        format!("{} m", meters.round())
    } else if magnitude >= 10.0 {
        format!("{:.1} m", meters)
    } else if magnitude >= 0.1 {
        format!("{:.2} m", meters)
    } else {
        format!("{:.3} m", meters)
    }
}

/// Parse length string to millimeters
///
/// * `input` - String to parse
/// * `system` - Assumed measurement system
pub fn parse_length(input: &str, system: MeasurementSystem) -> Result<f64, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(0.0);
    }

    match system {
        MeasurementSystem::Metric => input.parse::<f64>().map_err(|e| e.to_string()),
        MeasurementSystem::Imperial => {
            if !input.contains('/') {
                let inches = input.parse::<f64>().map_err(|e| e.to_string())?;
                return Ok(inches * MM_PER_INCH);
            }

            // Whole part and fraction, e.g. "5 1/8"
            let mut total_inches = 0.0;
            let mut negative = false;
            for part in input.split_whitespace() {
                let part = match part.strip_prefix('-') {
                    Some(rest) => {
                        negative = true;
                        rest
                    }
                    None => part,
                };
                if let Some((num, den)) = part.split_once('/') {
                    let num = num.parse::<f64>().map_err(|_| "Invalid numerator")?;
                    let den = den.parse::<f64>().map_err(|_| "Invalid denominator")?;
                    if den == 0.0 {
                        return Err("Division by zero".to_string());
                    }
                    total_inches += num / den;
                } else {
                    total_inches += part.parse::<f64>().map_err(|_| "Invalid number part")?;
                }
            }
            let sign = if negative { -1.0 } else { 1.0 };
            Ok(sign * total_inches * MM_PER_INCH)
        }
    }
}

/// Parse a user-typed property value that must be a positive length.
///
/// `field` names the property in the returned error.
pub fn parse_positive_length(
    field: &str,
    input: &str,
    system: MeasurementSystem,
) -> Result<f64, ValidationError> {
    let value = parse_length(input, system).map_err(|_| ValidationError::NotANumber {
        field: field.to_string(),
        input: input.trim().to_string(),
    })?;
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::NotPositive {
            field: field.to_string(),
            value,
        });
    }
    Ok(value)
}

/// Get the unit label for the given system ("mm" or "in")
pub fn get_unit_label(system: MeasurementSystem) -> &'static str {
    match system {
        MeasurementSystem::Metric => "mm",
        MeasurementSystem::Imperial => "in",
    }
}
