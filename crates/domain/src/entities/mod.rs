//! Domain entities

mod weather_observation;

pub use weather_observation::{ReadoutMetric, WeatherObservation, format_celsius, format_wind};
