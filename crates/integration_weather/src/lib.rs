//! Weather and location integration
//!
//! Client for the OpenWeatherMap current weather API
//! (<https://openweathermap.org/current>) and for ipinfo-compatible IP
//! geolocation (<https://ipinfo.io>), used to detect the user's city.

pub mod client;
pub mod geolocation;
mod models;

pub use client::{OpenWeatherMapClient, WeatherClient, WeatherConfig, WeatherError};
pub use geolocation::{GeolocationClient, GeolocationConfig, GeolocationError, IpInfoClient};
