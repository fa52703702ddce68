//! City query and resolution value objects
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::{CityQuery, ResolvedCity};
//!
//! let query = CityQuery::explicit("Tokyo").expect("non-empty city");
//! assert!(query.is_explicit());
//!
//! assert_eq!(ResolvedCity::from_model_answer("  Paris \n"), ResolvedCity::city("Paris"));
//! assert!(ResolvedCity::from_model_answer("no_valid_city").is_no_valid_city());
//! assert!(ResolvedCity::from_model_answer("").is_no_valid_city());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Literal token the language model returns when no city can be identified
pub const NO_VALID_CITY: &str = "no_valid_city";

/// Where the city for a request cycle comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CityQuery {
    /// A city that is already known, e.g. from location detection
    ExplicitCity(String),
    /// Free-form user text that may mention a city
    FreeText(String),
}

impl CityQuery {
    /// Create an explicit city query
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCity` if the name is empty after trimming.
    pub fn explicit(city: impl Into<String>) -> Result<Self, DomainError> {
        let city = city.into();
        let trimmed = city.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidCity(city));
        }
        Ok(Self::ExplicitCity(trimmed.to_string()))
    }

    /// Create a free-text query
    ///
    /// Returns `None` when the text is blank, which is the "no input" case
    /// rather than an error.
    #[must_use]
    pub fn free_text(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            None
        } else {
            Some(Self::FreeText(text))
        }
    }

    /// Whether this query carries an already-known city
    #[must_use]
    pub const fn is_explicit(&self) -> bool {
        matches!(self, Self::ExplicitCity(_))
    }

    /// The raw text of the query
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::ExplicitCity(s) | Self::FreeText(s) => s,
        }
    }
}

/// Outcome of city resolution
///
/// Never holds an empty city name; absence is always `NoValidCity`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolvedCity {
    /// A usable city name
    City(String),
    /// No city could be determined
    NoValidCity,
}

impl ResolvedCity {
    /// Create a resolved city, falling back to the sentinel for blank names
    #[must_use]
    pub fn city(name: impl Into<String>) -> Self {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            Self::NoValidCity
        } else {
            Self::City(trimmed.to_string())
        }
    }

    /// Interpret a raw language-model answer
    ///
    /// The answer is trimmed, surrounding quotes are dropped, and the sentinel
    /// token is matched case-insensitively.
    #[must_use]
    pub fn from_model_answer(answer: &str) -> Self {
        let cleaned = answer
            .trim()
            .trim_matches(|c| c == '"' || c == '\'' || c == '`')
            .trim();

        if cleaned.is_empty() || cleaned.eq_ignore_ascii_case(NO_VALID_CITY) {
            Self::NoValidCity
        } else {
            Self::City(cleaned.to_string())
        }
    }

    /// Whether this is the sentinel
    #[must_use]
    pub const fn is_no_valid_city(&self) -> bool {
        matches!(self, Self::NoValidCity)
    }

    /// The city name, if one was resolved
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::City(name) => Some(name),
            Self::NoValidCity => None,
        }
    }
}

impl fmt::Display for ResolvedCity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::City(name) => write!(f, "{name}"),
            Self::NoValidCity => write!(f, "{NO_VALID_CITY}"),
        }
    }
}
