//! User-visible, non-blocking notices
//!
//! Every failure in a request cycle is reported exactly once as a notice at
//! the point where it happens.

use std::fmt;

/// How prominently a notice should be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// What went wrong
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// The language model failed during city extraction
    CityExtractionFailed,
    /// No city could be identified in non-empty text
    InvalidCity,
    /// The weather provider failed or returned an unusable body
    WeatherUnavailable,
    /// Speech synthesis failed
    SpeechUnavailable,
    /// Location detection failed
    LocationUnavailable,
}

impl NoticeKind {
    /// Severity used when rendering this kind
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::CityExtractionFailed => Severity::Warning,
            Self::InvalidCity
            | Self::WeatherUnavailable
            | Self::SpeechUnavailable
            | Self::LocationUnavailable => Severity::Error,
        }
    }
}

/// A single notice shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    kind: NoticeKind,
    detail: Option<String>,
}

impl Notice {
    #[must_use]
    pub fn city_extraction_failed(detail: impl Into<String>) -> Self {
        Self::with_detail(NoticeKind::CityExtractionFailed, detail)
    }

    #[must_use]
    pub const fn invalid_city() -> Self {
        Self {
            kind: NoticeKind::InvalidCity,
            detail: None,
        }
    }

    #[must_use]
    pub fn weather_unavailable(detail: impl Into<String>) -> Self {
        Self::with_detail(NoticeKind::WeatherUnavailable, detail)
    }

    #[must_use]
    pub fn speech_unavailable(detail: impl Into<String>) -> Self {
        Self::with_detail(NoticeKind::SpeechUnavailable, detail)
    }

    #[must_use]
    pub fn location_unavailable(detail: impl Into<String>) -> Self {
        Self::with_detail(NoticeKind::LocationUnavailable, detail)
    }

    fn with_detail(kind: NoticeKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: Some(detail.into()),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> NoticeKind {
        self.kind
    }

    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.kind.severity()
    }

    /// Failure detail from the underlying provider, if any
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Message shown to the user
    #[must_use]
    pub fn message(&self) -> String {
        let detail = self.detail.as_deref().unwrap_or("unknown error");
        match self.kind {
            NoticeKind::CityExtractionFailed => format!("City extraction error: {detail}"),
            NoticeKind::InvalidCity => {
                "Please specify a valid city or use location detection.".to_string()
            },
            NoticeKind::WeatherUnavailable => format!("Couldn't fetch weather data: {detail}"),
            NoticeKind::SpeechUnavailable => format!("TTS error: {detail}"),
            NoticeKind::LocationUnavailable => format!("Couldn't detect location: {detail}"),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
