//! Session-scoped context carried across request cycles

/// State owned by the caller and threaded through every cycle
///
/// Holds the detected location. Once set, it is the city for every cycle
/// until a new detection replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    location: Option<String>,
}

impl SessionContext {
    /// Create an empty session
    #[must_use]
    pub const fn new() -> Self {
        Self { location: None }
    }

    /// The stored location, if any
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Replace the stored location
    ///
    /// Blank names are ignored and leave the previous location in place.
    pub fn set_location(&mut self, city: impl Into<String>) {
        let city = city.into();
        let trimmed = city.trim();
        if !trimmed.is_empty() {
            self.location = Some(trimmed.to_string());
        }
    }

    /// Whether a location is stored
    #[must_use]
    pub const fn has_location(&self) -> bool {
        self.location.is_some()
    }
}
