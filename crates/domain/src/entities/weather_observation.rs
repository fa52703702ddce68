//! Weather observation
//!
//! One snapshot of current conditions for a city, plus the readout used to
//! display it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Current weather conditions for a city, in metric units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// City name as reported by the provider
    pub city: String,
    /// ISO 3166 country code
    pub country: String,
    /// Temperature in Celsius
    pub temperature_c: f64,
    /// Apparent temperature in Celsius
    pub feels_like_c: f64,
    /// Atmospheric pressure in hPa
    pub pressure_hpa: i64,
    /// Relative humidity percentage
    pub humidity_pct: i64,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Condition group, e.g. "Clear"
    pub condition_main: String,
    /// Condition detail, e.g. "clear sky"
    pub condition_description: String,
}

/// One labelled value of the readout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadoutMetric {
    pub label: &'static str,
    pub value: String,
}

impl WeatherObservation {
    /// Readout heading, e.g. "Tokyo, JP"
    #[must_use]
    pub fn heading(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }

    /// Condition line, e.g. "Clear - clear sky"
    #[must_use]
    pub fn condition_line(&self) -> String {
        format!("{} - {}", self.condition_main, self.condition_description)
    }

    /// Labelled metrics for display
    #[must_use]
    pub fn metrics(&self) -> [ReadoutMetric; 5] {
        [
            ReadoutMetric {
                label: "Temperature",
                value: format_celsius(self.temperature_c),
            },
            ReadoutMetric {
                label: "Feels Like",
                value: format_celsius(self.feels_like_c),
            },
            ReadoutMetric {
                label: "Humidity",
                value: format!("{}%", self.humidity_pct),
            },
            ReadoutMetric {
                label: "Wind",
                value: format_wind(self.wind_speed),
            },
            ReadoutMetric {
                label: "Pressure",
                value: format!("{} hPa", self.pressure_hpa),
            },
        ]
    }
}

impl fmt::Display for WeatherObservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading())?;
        write!(f, "Condition: {}", self.condition_line())?;
        for metric in self.metrics() {
            write!(f, "\n{}: {}", metric.label, metric.value)?;
        }
        Ok(())
    }
}

/// Format a Celsius value, always keeping at least one decimal
///
/// ```
/// use domain::entities::format_celsius;
///
/// assert_eq!(format_celsius(15.0), "15.0°C");
/// assert_eq!(format_celsius(-3.25), "-3.25°C");
/// ```
#[must_use]
pub fn format_celsius(value: f64) -> String {
    format!("{}°C", format_decimal(value))
}

/// Format a wind speed in m/s, always keeping at least one decimal
#[must_use]
pub fn format_wind(value: f64) -> String {
    format!("{} m/s", format_decimal(value))
}

#[allow(clippy::float_cmp)]
fn format_decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
