//! OpenWeatherMap and ipinfo response models

use domain::WeatherObservation;
use serde::Deserialize;

/// Current weather response from `/weather`
///
/// Only the fields the assistant uses are modelled; every one of them is
/// required.
#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    pub name: String,
    pub sys: ApiSys,
    pub main: ApiMain,
    pub weather: Vec<ApiCondition>,
    pub wind: ApiWind,
}

#[derive(Debug, Deserialize)]
pub struct ApiSys {
    pub country: String,
}

#[derive(Debug, Deserialize)]
pub struct ApiMain {
    pub temp: f64,
    pub feels_like: f64,
    pub pressure: i64,
    pub humidity: i64,
}

#[derive(Debug, Deserialize)]
pub struct ApiCondition {
    pub main: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ApiWind {
    pub speed: f64,
}

/// Error body returned with non-2xx responses, e.g. `{"cod":"404","message":"city not found"}`
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}

impl ApiResponse {
    /// Convert into a domain observation
    ///
    /// Returns `None` when the condition list is empty.
    pub fn into_observation(self) -> Option<WeatherObservation> {
        let condition = self.weather.into_iter().next()?;
        Some(WeatherObservation {
            city: self.name,
            country: self.sys.country,
            temperature_c: self.main.temp,
            feels_like_c: self.main.feels_like,
            pressure_hpa: self.main.pressure,
            humidity_pct: self.main.humidity,
            wind_speed: self.wind.speed,
            condition_main: condition.main,
            condition_description: condition.description,
        })
    }
}

/// ipinfo `/json` response
#[derive(Debug, Deserialize)]
pub struct IpInfoResponse {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}
