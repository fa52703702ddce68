//! City resolver - Turns a city query into a single city name or the sentinel

use std::{fmt, sync::Arc};

use domain::{CityQuery, NO_VALID_CITY, ResolvedCity};
use tracing::{debug, instrument, warn};

use crate::{notice::Notice, ports::InferencePort};

/// Build the extraction prompt for free-form user text
#[must_use]
pub fn extraction_prompt(user_input: &str) -> String {
    format!(
        "Extract only the city name from this input: \"{user_input}\". \
         Return just the city name or '{NO_VALID_CITY}'."
    )
}

/// Result of resolving a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityResolution {
    pub city: ResolvedCity,
    /// Set when the language model call failed
    pub warning: Option<Notice>,
}

/// Resolves explicit cities directly and extracts cities from free text
pub struct CityResolver {
    inference: Arc<dyn InferencePort>,
}

impl fmt::Debug for CityResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CityResolver")
            .field("model", &self.inference.current_model())
            .finish_non_exhaustive()
    }
}

impl CityResolver {
    pub fn new(inference: Arc<dyn InferencePort>) -> Self {
        Self { inference }
    }

    /// Resolve a query
    ///
    /// Explicit cities are returned as-is without calling the model. Free text
    /// costs exactly one model call; a failed call degrades to the sentinel
    /// with a warning attached.
    #[instrument(skip(self, query), fields(explicit = query.is_explicit()))]
    pub async fn resolve(&self, query: &CityQuery) -> CityResolution {
        match query {
            CityQuery::ExplicitCity(city) => CityResolution {
                city: ResolvedCity::city(city.as_str()),
                warning: None,
            },
            CityQuery::FreeText(text) => match self.inference.generate(&extraction_prompt(text)).await {
                Ok(result) => {
                    let city = ResolvedCity::from_model_answer(&result.content);
                    debug!(
                        model = %result.model,
                        latency_ms = result.latency_ms,
                        resolved = %city,
                        "City extracted"
                    );
                    CityResolution {
                        city,
                        warning: None,
                    }
                },
                Err(e) => {
                    warn!(error = %e, "City extraction failed");
                    CityResolution {
                        city: ResolvedCity::NoValidCity,
                        warning: Some(Notice::city_extraction_failed(e.to_string())),
                    }
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::ApplicationError,
        notice::NoticeKind,
        ports::{InferenceResult, MockInferencePort},
    };

    fn answer(content: &str) -> InferenceResult {
        InferenceResult {
            content: content.to_string(),
            model: "gemini-2.0-flash".to_string(),
            tokens_used: Some(12),
            latency_ms: 40,
        }
    }

    fn resolver(mock: MockInferencePort) -> CityResolver {
        CityResolver::new(Arc::new(mock))
    }

    // ==================== Prompt ====================

    #[test]
    fn prompt_embeds_input_and_sentinel() {
        let prompt = extraction_prompt("is it raining in Oslo?");
        assert_eq!(
            prompt,
            "Extract only the city name from this input: \"is it raining in Oslo?\". \
             Return just the city name or 'no_valid_city'."
        );
    }

    // ==================== Explicit city ====================

    #[tokio::test]
    async fn explicit_city_skips_model() {
        let mut mock = MockInferencePort::new();
        mock.expect_generate().times(0);

        let query = CityQuery::explicit("Lisbon").unwrap();
        let resolution = resolver(mock).resolve(&query).await;

        assert_eq!(resolution.city, ResolvedCity::City("Lisbon".to_string()));
        assert!(resolution.warning.is_none());
    }

    // ==================== Free text ====================

    #[tokio::test]
    async fn free_text_is_extracted_once() {
        let mut mock = MockInferencePort::new();
        mock.expect_generate()
            .withf(|prompt| prompt.contains("weather in Tokyo today"))
            .times(1)
            .returning(|_| Ok(answer("  Tokyo\n")));

        let query = CityQuery::free_text("weather in Tokyo today").unwrap();
        let resolution = resolver(mock).resolve(&query).await;

        assert_eq!(resolution.city, ResolvedCity::City("Tokyo".to_string()));
        assert!(resolution.warning.is_none());
    }

    #[tokio::test]
    async fn sentinel_answer_is_no_valid_city() {
        let mut mock = MockInferencePort::new();
        mock.expect_generate()
            .times(1)
            .returning(|_| Ok(answer("no_valid_city")));

        let query = CityQuery::free_text("hello there").unwrap();
        let resolution = resolver(mock).resolve(&query).await;

        assert!(resolution.city.is_no_valid_city());
        assert!(resolution.warning.is_none());
    }

    #[tokio::test]
    async fn empty_answer_is_never_an_empty_city() {
        let mut mock = MockInferencePort::new();
        mock.expect_generate().returning(|_| Ok(answer("   ")));

        let query = CityQuery::free_text("something").unwrap();
        let resolution = resolver(mock).resolve(&query).await;

        assert_eq!(resolution.city, ResolvedCity::NoValidCity);
    }

    #[tokio::test]
    async fn model_failure_degrades_with_warning() {
        let mut mock = MockInferencePort::new();
        mock.expect_generate()
            .times(1)
            .returning(|_| Err(ApplicationError::Inference("quota exceeded".to_string())));

        let query = CityQuery::free_text("weather in Rome").unwrap();
        let resolution = resolver(mock).resolve(&query).await;

        assert!(resolution.city.is_no_valid_city());
        let warning = resolution.warning.unwrap();
        assert_eq!(warning.kind(), NoticeKind::CityExtractionFailed);
        assert!(warning.message().contains("quota exceeded"));
    }

    // ==================== Properties ====================

    proptest::proptest! {
        #[test]
        fn any_explicit_city_is_returned_without_model_call(city in "[A-Za-z][A-Za-z .'-]{0,30}") {
            let mut mock = MockInferencePort::new();
            mock.expect_generate().times(0);
            let resolver = resolver(mock);

            let query = CityQuery::explicit(city.as_str()).unwrap();
            let resolution = tokio_test::block_on(resolver.resolve(&query));

            proptest::prop_assert_eq!(resolution.city.name(), Some(city.trim()));
            proptest::prop_assert!(resolution.warning.is_none());
        }
    }
}
