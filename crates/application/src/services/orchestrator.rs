//! Orchestrator - Sequences one request cycle
//!
//! A cycle runs `Idle -> Resolving -> Fetching -> Summarizing -> Ready`, or
//! stops at `Failed` when no city can be resolved or the weather provider
//! fails. Each call is awaited before the next one starts.

use std::{fmt, sync::Arc};

use domain::{CityQuery, SpeechText, SummaryText, Voice, WeatherObservation};
use tracing::{debug, info, instrument, warn};

use crate::{
    notice::Notice,
    ports::{InferencePort, LocationPort, SpeechPort, WeatherPort},
    services::{
        city_resolver::CityResolver,
        speech_synthesizer::{SpeechOutcome, SpeechSynthesizer},
        summary_generator::{SummaryGenerationFailed, SummaryGenerator},
    },
    session::SessionContext,
};

/// Why a cycle stopped early
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InvalidCity,
    WeatherUnavailable,
}

/// States of one request cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleState {
    Idle,
    Resolving,
    Fetching,
    Summarizing,
    Ready,
    Failed(FailureKind),
}

/// What a cycle produced
#[derive(Debug, Clone, PartialEq)]
pub enum CycleOutcome {
    /// No trigger, nothing happened
    Idle,
    /// Observation fetched; the summary may still have failed
    Ready {
        observation: WeatherObservation,
        summary: Result<SummaryText, SummaryGenerationFailed>,
    },
    Failed(FailureKind),
}

/// Full record of one cycle
#[derive(Debug, Clone, PartialEq)]
pub struct CycleReport {
    /// Every state entered, starting at `Idle`
    pub transitions: Vec<CycleState>,
    pub outcome: CycleOutcome,
    /// Notices in the order they were raised
    pub notices: Vec<Notice>,
}

impl CycleReport {
    fn idle() -> Self {
        Self {
            transitions: vec![CycleState::Idle],
            outcome: CycleOutcome::Idle,
            notices: Vec::new(),
        }
    }

    /// Whether no cycle ran
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self.outcome, CycleOutcome::Idle)
    }

    /// The state the cycle ended in
    #[must_use]
    pub fn final_state(&self) -> CycleState {
        self.transitions.last().copied().unwrap_or(CycleState::Idle)
    }

    #[must_use]
    pub fn observation(&self) -> Option<&WeatherObservation> {
        match &self.outcome {
            CycleOutcome::Ready { observation, .. } => Some(observation),
            CycleOutcome::Idle | CycleOutcome::Failed(_) => None,
        }
    }

    /// The summary, if one was generated successfully
    #[must_use]
    pub fn summary(&self) -> Option<&SummaryText> {
        match &self.outcome {
            CycleOutcome::Ready {
                summary: Ok(summary),
                ..
            } => Some(summary),
            _ => None,
        }
    }
}

/// The weather assistant
///
/// Owns the services of a cycle. Session state lives in `SessionContext`,
/// which the caller keeps between cycles.
pub struct WeatherAssistant {
    resolver: CityResolver,
    weather: Arc<dyn WeatherPort>,
    summarizer: SummaryGenerator,
    location: Arc<dyn LocationPort>,
    speech: SpeechSynthesizer,
}

impl fmt::Debug for WeatherAssistant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherAssistant")
            .field("speech", &self.speech)
            .finish_non_exhaustive()
    }
}

impl WeatherAssistant {
    /// Create an assistant with speech disabled
    pub fn new(
        inference: Arc<dyn InferencePort>,
        weather: Arc<dyn WeatherPort>,
        location: Arc<dyn LocationPort>,
    ) -> Self {
        Self {
            resolver: CityResolver::new(Arc::clone(&inference)),
            weather,
            summarizer: SummaryGenerator::new(inference),
            location,
            speech: SpeechSynthesizer::disabled(),
        }
    }

    /// Enable speech synthesis
    #[must_use]
    pub fn with_speech(mut self, speech: Arc<dyn SpeechPort>) -> Self {
        self.speech = SpeechSynthesizer::new(Some(speech));
        self
    }

    #[must_use]
    pub const fn speech_enabled(&self) -> bool {
        self.speech.is_enabled()
    }

    /// Run a cycle for submitted text
    ///
    /// A stored location is the city whenever present; the text is then only
    /// the question. Without a stored location, blank text is no trigger and
    /// the cycle stays `Idle`.
    #[instrument(skip(self, ctx, text), fields(has_location = ctx.has_location()))]
    pub async fn submit(&self, ctx: &SessionContext, text: &str) -> CycleReport {
        if text.trim().is_empty() {
            debug!("No input, staying idle");
            return CycleReport::idle();
        }

        let query = match ctx.location().map(CityQuery::explicit) {
            Some(Ok(query)) => query,
            _ => match CityQuery::free_text(text) {
                Some(query) => query,
                None => return CycleReport::idle(),
            },
        };

        self.run_cycle(&query, text).await
    }

    /// Detect the user's location and run a cycle for it
    ///
    /// On success the location replaces any stored one. On failure the stored
    /// location is kept and no cycle runs.
    #[instrument(skip(self, ctx))]
    pub async fn detect_location(&self, ctx: &mut SessionContext) -> CycleReport {
        let city = match self.location.detect_city().await {
            Ok(city) => city,
            Err(e) => {
                warn!(error = %e, "Location detection failed");
                let mut report = CycleReport::idle();
                report
                    .notices
                    .push(Notice::location_unavailable(e.to_string()));
                return report;
            },
        };

        let query = match CityQuery::explicit(city) {
            Ok(query) => query,
            Err(e) => {
                warn!(error = %e, "Location detection returned no city");
                let mut report = CycleReport::idle();
                report
                    .notices
                    .push(Notice::location_unavailable(e.to_string()));
                return report;
            },
        };

        ctx.set_location(query.as_str());
        info!(city = %query.as_str(), "Location detected");

        self.run_cycle(&query, "").await
    }

    /// Speak a summary with the chosen voice
    ///
    /// The text is sanitized before it reaches the speech provider.
    pub async fn listen(&self, summary: &SummaryText, voice: Voice) -> SpeechOutcome {
        self.speech
            .synthesize(&SpeechText::from(summary), voice)
            .await
    }

    async fn run_cycle(&self, query: &CityQuery, user_text: &str) -> CycleReport {
        let mut transitions = vec![CycleState::Idle, CycleState::Resolving];
        let mut notices = Vec::new();

        let resolution = self.resolver.resolve(query).await;
        notices.extend(resolution.warning);

        let Some(city) = resolution.city.name() else {
            debug!("No valid city resolved");
            transitions.push(CycleState::Failed(FailureKind::InvalidCity));
            notices.push(Notice::invalid_city());
            return CycleReport {
                transitions,
                outcome: CycleOutcome::Failed(FailureKind::InvalidCity),
                notices,
            };
        };

        transitions.push(CycleState::Fetching);
        let observation = match self.weather.current_weather(city).await {
            Ok(observation) => observation,
            Err(e) => {
                warn!(city = %city, error = %e, "Weather fetch failed");
                transitions.push(CycleState::Failed(FailureKind::WeatherUnavailable));
                notices.push(Notice::weather_unavailable(e.to_string()));
                return CycleReport {
                    transitions,
                    outcome: CycleOutcome::Failed(FailureKind::WeatherUnavailable),
                    notices,
                };
            },
        };

        transitions.push(CycleState::Summarizing);
        let summary = self.summarizer.summarize(&observation, user_text).await;
        transitions.push(CycleState::Ready);

        debug!(
            city = %observation.city,
            summary_ok = summary.is_ok(),
            "Cycle ready"
        );

        CycleReport {
            transitions,
            outcome: CycleOutcome::Ready {
                observation,
                summary,
            },
            notices,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::ApplicationError,
        notice::NoticeKind,
        ports::{
            InferenceResult, MockInferencePort, MockLocationPort, MockSpeechPort, MockWeatherPort,
        },
    };
    use domain::AudioClip;

    fn tokyo() -> WeatherObservation {
        WeatherObservation {
            city: "Tokyo".to_string(),
            country: "JP".to_string(),
            temperature_c: 15.0,
            feels_like_c: 14.0,
            pressure_hpa: 1012,
            humidity_pct: 60,
            wind_speed: 3.2,
            condition_main: "Clear".to_string(),
            condition_description: "clear sky".to_string(),
        }
    }

    fn answer(content: &str) -> InferenceResult {
        InferenceResult {
            content: content.to_string(),
            model: "gemini-2.0-flash".to_string(),
            tokens_used: None,
            latency_ms: 10,
        }
    }

    /// Inference mock that answers extraction with `city` and summaries with `summary`
    fn inference(city: &'static str, summary: &'static str) -> MockInferencePort {
        let mut mock = MockInferencePort::new();
        mock.expect_generate().returning(move |prompt| {
            if prompt.starts_with("Extract only the city name") {
                Ok(answer(city))
            } else {
                Ok(answer(summary))
            }
        });
        mock
    }

    fn no_location() -> MockLocationPort {
        let mut mock = MockLocationPort::new();
        mock.expect_detect_city().times(0);
        mock
    }

    fn assistant(
        inference: MockInferencePort,
        weather: MockWeatherPort,
        location: MockLocationPort,
    ) -> WeatherAssistant {
        WeatherAssistant::new(Arc::new(inference), Arc::new(weather), Arc::new(location))
    }

    const READY_PATH: [CycleState; 5] = [
        CycleState::Idle,
        CycleState::Resolving,
        CycleState::Fetching,
        CycleState::Summarizing,
        CycleState::Ready,
    ];

    // ==================== Idle ====================

    #[tokio::test]
    async fn blank_text_stays_idle() {
        let mut inference = MockInferencePort::new();
        inference.expect_generate().times(0);
        let mut weather = MockWeatherPort::new();
        weather.expect_current_weather().times(0);

        let assistant = assistant(inference, weather, no_location());
        let report = assistant.submit(&SessionContext::new(), "   ").await;

        assert_eq!(report.transitions, vec![CycleState::Idle]);
        assert!(report.is_idle());
        assert!(report.notices.is_empty());
    }

    // ==================== Ready ====================

    #[tokio::test]
    async fn tokyo_reaches_ready_with_readout() {
        let mut weather = MockWeatherPort::new();
        weather
            .expect_current_weather()
            .withf(|city| city == "Tokyo")
            .times(1)
            .returning(|_| Ok(tokyo()));

        let assistant = assistant(
            inference("Tokyo", "It is clear and 15 degrees in Tokyo."),
            weather,
            no_location(),
        );
        let report = assistant.submit(&SessionContext::new(), "Tokyo").await;

        assert_eq!(report.transitions, READY_PATH.to_vec());
        assert_eq!(report.final_state(), CycleState::Ready);
        assert!(report.notices.is_empty());

        let summary = report.summary().unwrap();
        assert!(!summary.is_blank());

        let readout = report.observation().unwrap().to_string();
        assert!(readout.contains("Tokyo"));
        assert!(readout.contains("JP"));
        assert!(readout.contains("15.0°C"));
    }

    #[tokio::test]
    async fn summary_failure_still_reaches_ready() {
        let mut inference = MockInferencePort::new();
        inference.expect_generate().returning(|prompt| {
            if prompt.starts_with("Extract only the city name") {
                Ok(answer("Tokyo"))
            } else {
                Err(ApplicationError::Inference("model overloaded".to_string()))
            }
        });
        let mut weather = MockWeatherPort::new();
        weather.expect_current_weather().returning(|_| Ok(tokyo()));

        let assistant = assistant(inference, weather, no_location());
        let report = assistant.submit(&SessionContext::new(), "Tokyo").await;

        assert_eq!(report.final_state(), CycleState::Ready);
        assert!(report.observation().is_some());
        assert!(report.summary().is_none());
        assert!(report.notices.is_empty());
        match report.outcome {
            CycleOutcome::Ready {
                summary: Err(failed),
                ..
            } => assert!(failed.detail.contains("model overloaded")),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    // ==================== Failed ====================

    #[tokio::test]
    async fn sentinel_fails_without_fetching() {
        let mut inference = MockInferencePort::new();
        inference
            .expect_generate()
            .times(1)
            .returning(|_| Ok(answer("no_valid_city")));
        let mut weather = MockWeatherPort::new();
        weather.expect_current_weather().times(0);

        let assistant = assistant(inference, weather, no_location());
        let report = assistant
            .submit(&SessionContext::new(), "tell me a joke")
            .await;

        assert_eq!(
            report.transitions,
            vec![
                CycleState::Idle,
                CycleState::Resolving,
                CycleState::Failed(FailureKind::InvalidCity),
            ]
        );
        assert_eq!(report.outcome, CycleOutcome::Failed(FailureKind::InvalidCity));
        assert_eq!(report.notices, vec![Notice::invalid_city()]);
    }

    #[tokio::test]
    async fn extraction_failure_warns_then_fails_invalid_city() {
        let mut inference = MockInferencePort::new();
        inference
            .expect_generate()
            .times(1)
            .returning(|_| Err(ApplicationError::Inference("timeout".to_string())));
        let mut weather = MockWeatherPort::new();
        weather.expect_current_weather().times(0);

        let assistant = assistant(inference, weather, no_location());
        let report = assistant.submit(&SessionContext::new(), "weather in Rome").await;

        assert_eq!(report.final_state(), CycleState::Failed(FailureKind::InvalidCity));
        let kinds: Vec<_> = report.notices.iter().map(Notice::kind).collect();
        assert_eq!(
            kinds,
            vec![NoticeKind::CityExtractionFailed, NoticeKind::InvalidCity]
        );
    }

    #[tokio::test]
    async fn weather_failure_skips_summary() {
        let mut inference = MockInferencePort::new();
        inference
            .expect_generate()
            .withf(|prompt| prompt.starts_with("Extract only the city name"))
            .times(1)
            .returning(|_| Ok(answer("Atlantis")));
        let mut weather = MockWeatherPort::new();
        weather
            .expect_current_weather()
            .times(1)
            .returning(|_| Err(ApplicationError::ExternalService("city not found".to_string())));

        let assistant = assistant(inference, weather, no_location());
        let report = assistant
            .submit(&SessionContext::new(), "weather in Atlantis")
            .await;

        assert_eq!(
            report.transitions,
            vec![
                CycleState::Idle,
                CycleState::Resolving,
                CycleState::Fetching,
                CycleState::Failed(FailureKind::WeatherUnavailable),
            ]
        );
        assert!(report.observation().is_none());
        assert!(report.summary().is_none());
        assert_eq!(report.notices.len(), 1);
        assert_eq!(report.notices[0].kind(), NoticeKind::WeatherUnavailable);
    }

    // ==================== Re-entry ====================

    #[tokio::test]
    async fn resubmitting_repeats_the_same_transitions() {
        let mut inference = MockInferencePort::new();
        inference.expect_generate().times(4).returning(|prompt| {
            if prompt.starts_with("Extract only the city name") {
                Ok(answer("Tokyo"))
            } else {
                Ok(answer("Clear skies."))
            }
        });
        let mut weather = MockWeatherPort::new();
        weather
            .expect_current_weather()
            .times(2)
            .returning(|_| Ok(tokyo()));

        let assistant = assistant(inference, weather, no_location());
        let ctx = SessionContext::new();

        let first = assistant.submit(&ctx, "How is Tokyo?").await;
        let second = assistant.submit(&ctx, "How is Tokyo?").await;

        assert_eq!(first.transitions, second.transitions);
        assert_eq!(first.outcome, second.outcome);
    }

    // ==================== Location ====================

    #[tokio::test]
    async fn detected_location_runs_cycle_without_extraction() {
        let mut inference = MockInferencePort::new();
        inference
            .expect_generate()
            .withf(|prompt| prompt.starts_with("user asked: \n"))
            .times(1)
            .returning(|_| Ok(answer("Mild in Lisbon.")));
        let mut weather = MockWeatherPort::new();
        weather
            .expect_current_weather()
            .withf(|city| city == "Lisbon")
            .times(1)
            .returning(|_| {
                Ok(WeatherObservation {
                    city: "Lisbon".to_string(),
                    country: "PT".to_string(),
                    ..tokyo()
                })
            });
        let mut location = MockLocationPort::new();
        location
            .expect_detect_city()
            .times(1)
            .returning(|| Ok("Lisbon".to_string()));

        let assistant = assistant(inference, weather, location);
        let mut ctx = SessionContext::new();
        let report = assistant.detect_location(&mut ctx).await;

        assert_eq!(ctx.location(), Some("Lisbon"));
        assert_eq!(report.transitions, READY_PATH.to_vec());
    }

    #[tokio::test]
    async fn stored_location_takes_precedence_over_text() {
        let mut inference = MockInferencePort::new();
        inference
            .expect_generate()
            .withf(|prompt| prompt.starts_with("user asked: weather in Paris?"))
            .times(1)
            .returning(|_| Ok(answer("Lisbon is mild.")));
        let mut weather = MockWeatherPort::new();
        weather
            .expect_current_weather()
            .withf(|city| city == "Lisbon")
            .times(1)
            .returning(|_| Ok(tokyo()));

        let assistant = assistant(inference, weather, no_location());
        let mut ctx = SessionContext::new();
        ctx.set_location("Lisbon");

        let report = assistant.submit(&ctx, "weather in Paris?").await;
        assert_eq!(report.final_state(), CycleState::Ready);
    }

    #[tokio::test]
    async fn failed_detection_keeps_previous_location() {
        let mut inference = MockInferencePort::new();
        inference.expect_generate().times(0);
        let mut weather = MockWeatherPort::new();
        weather.expect_current_weather().times(0);
        let mut location = MockLocationPort::new();
        location
            .expect_detect_city()
            .times(1)
            .returning(|| Err(ApplicationError::ExternalService("HTTP 503".to_string())));

        let assistant = assistant(inference, weather, location);
        let mut ctx = SessionContext::new();
        ctx.set_location("Porto");

        let report = assistant.detect_location(&mut ctx).await;

        assert_eq!(ctx.location(), Some("Porto"));
        assert_eq!(report.outcome, CycleOutcome::Idle);
        assert_eq!(report.notices.len(), 1);
        assert_eq!(report.notices[0].kind(), NoticeKind::LocationUnavailable);
    }

    // ==================== Speech ====================

    #[tokio::test]
    async fn listen_without_credential_is_silent() {
        let mut weather = MockWeatherPort::new();
        weather.expect_current_weather().returning(|_| Ok(tokyo()));

        let assistant = assistant(inference("Tokyo", "Sunny!"), weather, no_location());
        let report = assistant.submit(&SessionContext::new(), "Tokyo").await;
        let summary = report.summary().unwrap();

        let outcome = assistant.listen(summary, Voice::default()).await;

        assert!(!assistant.speech_enabled());
        assert!(outcome.audio.is_none());
        assert!(outcome.notice.is_none());
    }

    #[tokio::test]
    async fn listen_sends_sanitized_text() {
        let mut speech = MockSpeechPort::new();
        speech
            .expect_synthesize()
            .withf(|text, voice| text.as_str() == "Sunny and 25C in Rome" && *voice == Voice::Bella)
            .times(1)
            .returning(|_, _| Ok(AudioClip::mpeg(vec![1, 2, 3])));

        let assistant = assistant(MockInferencePort::new(), MockWeatherPort::new(), no_location())
            .with_speech(Arc::new(speech));
        let summary = SummaryText::new("Sunny* and 25C in Rome!!");

        let outcome = assistant.listen(&summary, Voice::Bella).await;

        assert!(assistant.speech_enabled());
        assert_eq!(outcome.audio.unwrap().len(), 3);
    }
}
