//! Integration tests for ai_speech crate
//!
//! Tests the synthesis flow through the public API with a mocked ElevenLabs server.

use ai_speech::{ElevenLabsProvider, SpeechConfig, SpeechError, TextToSpeech};
use domain::Voice;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Create a test configuration pointing to mock server
fn test_config(base_url: &str) -> SpeechConfig {
    SpeechConfig {
        api_key: Some("test-api-key".to_string()),
        base_url: base_url.to_string(),
        timeout_secs: Some(5),
        ..Default::default()
    }
}

/// Create mock MP3 audio data (minimal MP3 frame header)
fn mock_mp3_audio() -> Vec<u8> {
    vec![
        0xFF, 0xFB, 0x90, 0x00, // MP3 frame header
        0x00, 0x00, 0x00, 0x00, // Padding
        0x00, 0x00, 0x00, 0x00, // More padding
    ]
}

// ============ TTS Integration Tests ============

#[tokio::test]
async fn every_table_voice_hits_its_own_endpoint() {
    let mock_server = MockServer::start().await;

    for voice in Voice::ALL {
        Mock::given(method("POST"))
            .and(path(format!("/v1/text-to-speech/{}", voice.id())))
            .and(header("xi-api-key", "test-api-key"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(mock_mp3_audio()))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let provider = ElevenLabsProvider::new(test_config(&mock_server.uri())).unwrap();

    for voice in Voice::ALL {
        let audio = provider
            .synthesize("It is sunny in Lisbon.", Some(voice.id()))
            .await
            .unwrap();
        assert_eq!(audio.data(), mock_mp3_audio().as_slice());
    }
}

#[tokio::test]
async fn unknown_voice_is_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/text-to-speech/does-not-exist"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "detail": {"status": "voice_not_found", "message": "A voice with that ID was not found."}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = ElevenLabsProvider::new(test_config(&mock_server.uri())).unwrap();
    let result = provider.synthesize("Hello", Some("does-not-exist")).await;

    assert!(matches!(result, Err(SpeechError::VoiceNotFound(id)) if id == "does-not-exist"));
}

#[tokio::test]
async fn server_error_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = ElevenLabsProvider::new(test_config(&mock_server.uri())).unwrap();
    let result = provider.synthesize("Hello", None).await;

    assert!(matches!(result, Err(SpeechError::ServiceUnavailable(_))));
}

#[tokio::test]
async fn slow_provider_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(mock_mp3_audio())
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let config = SpeechConfig {
        timeout_secs: Some(1),
        ..test_config(&mock_server.uri())
    };
    let provider = ElevenLabsProvider::new(config).unwrap();
    let result = provider.synthesize("Hello", None).await;

    assert!(matches!(result, Err(SpeechError::Timeout)));
}
